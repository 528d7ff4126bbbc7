//! Earthly branches (地支): the 12-symbol cycle and the hour table.
//!
//! Hour lookup follows a fixed 24-hour table: 23, 0 and 1 map to 子;
//! after that each branch takes two consecutive hours (2-3 → 丑,
//! 4-5 → 寅, ...), leaving hour 22 alone for 亥.

use crate::element::Element;

/// The 12 earthly branches starting from Zi (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Kanji of the branch.
    pub const fn kanji(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Romanised (pinyin) name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Zodiac animal associated with the branch.
    pub const fn zodiac_animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at cycle position `n`, wrapping in both directions.
    pub const fn from_cycle(n: i64) -> Branch {
        ALL_BRANCHES[n.rem_euclid(12) as usize]
    }

    /// Primary element (主気). Earth holds the four seasonal-transition
    /// branches 丑辰未戌; every other element holds two.
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
        }
    }

    /// Nominal two-hour window `(start, end)` on the 24-hour clock.
    ///
    /// 子 spans midnight: `(23, 1)`. 丑 is `(1, 3)`, and so on.
    pub const fn traditional_window(self) -> (u32, u32) {
        let i = self.index() as u32;
        ((2 * i + 23) % 24, (2 * i + 1) % 24)
    }

    /// Clock hours that [`branch_from_hour`] maps to this branch.
    pub const fn hours(self) -> &'static [u32] {
        match self {
            Self::Zi => &[23, 0, 1],
            Self::Chou => &[2, 3],
            Self::Yin => &[4, 5],
            Self::Mao => &[6, 7],
            Self::Chen => &[8, 9],
            Self::Si => &[10, 11],
            Self::Wu => &[12, 13],
            Self::Wei => &[14, 15],
            Self::Shen => &[16, 17],
            Self::You => &[18, 19],
            Self::Xu => &[20, 21],
            Self::Hai => &[22],
        }
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kanji())
    }
}

/// Hour branch for a 24-hour clock hour. `None` outside 0..=23.
pub const fn branch_from_hour(hour: u32) -> Option<Branch> {
    match hour {
        23 | 0 | 1 => Some(Branch::Zi),
        2..=22 => Some(ALL_BRANCHES[(hour / 2) as usize]),
        _ => None,
    }
}
