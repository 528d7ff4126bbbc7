//! Ten gods (通変星): relation of a stem to the day stem.
//!
//! The label combines the element-cycle relation between the two stems
//! with whether their polarities match.

use crate::element::ElementRelation;
use crate::stem::{ALL_STEMS, Stem};

/// The ten relational labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    /// 比肩: same element, same polarity (includes the day stem itself).
    PeerSame,
    /// 劫財: same element, opposite polarity.
    PeerOpposite,
    /// 食神: day stem generates it, same polarity.
    EatingGod,
    /// 傷官: day stem generates it, opposite polarity.
    HurtingOfficer,
    /// 偏財: day stem overcomes it, same polarity.
    IndirectWealth,
    /// 正財: day stem overcomes it, opposite polarity.
    DirectWealth,
    /// 七殺: it overcomes the day stem, same polarity.
    SevenKillings,
    /// 正官: it overcomes the day stem, opposite polarity.
    DirectOfficer,
    /// 偏印: it generates the day stem, same polarity.
    IndirectResource,
    /// 印綬: it generates the day stem, opposite polarity.
    DirectResource,
}

/// All 10 labels, peers first.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::PeerSame,
    TenGod::PeerOpposite,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

impl TenGod {
    /// Kanji label as used in Japanese readings.
    pub const fn kanji(self) -> &'static str {
        match self {
            Self::PeerSame => "比肩",
            Self::PeerOpposite => "劫財",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "傷官",
            Self::IndirectWealth => "偏財",
            Self::DirectWealth => "正財",
            Self::SevenKillings => "七殺",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "印綬",
        }
    }

    /// Kebab-case English label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PeerSame => "peer-same",
            Self::PeerOpposite => "peer-opposite",
            Self::EatingGod => "eating-god",
            Self::HurtingOfficer => "hurting-officer",
            Self::IndirectWealth => "indirect-wealth",
            Self::DirectWealth => "direct-wealth",
            Self::SevenKillings => "seven-killings",
            Self::DirectOfficer => "direct-officer",
            Self::IndirectResource => "indirect-resource",
            Self::DirectResource => "direct-resource",
        }
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kanji())
    }
}

/// Ten-god label of `candidate` relative to `reference` (the day stem).
pub fn relation_of(reference: Stem, candidate: Stem) -> TenGod {
    use ElementRelation::*;
    use TenGod::*;

    if candidate == reference {
        return PeerSame;
    }
    let same_polarity = reference.polarity() == candidate.polarity();
    match (reference.element().relation_to(candidate.element()), same_polarity) {
        (Same, true) => PeerSame,
        (Same, false) => PeerOpposite,
        (Generates, true) => EatingGod,
        (Generates, false) => HurtingOfficer,
        (Overcomes, true) => IndirectWealth,
        (Overcomes, false) => DirectWealth,
        (OvercomeBy, true) => SevenKillings,
        (OvercomeBy, false) => DirectOfficer,
        (GeneratedBy, true) => IndirectResource,
        (GeneratedBy, false) => DirectResource,
    }
}

/// Labels for every stem relative to `day_stem`, in stem cycle order.
pub fn ten_gods_table(day_stem: Stem) -> [(Stem, TenGod); 10] {
    ALL_STEMS.map(|s| (s, relation_of(day_stem, s)))
}

/// Ten-god labels of the four pillar stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenGodsAnalysis {
    /// Reference stem.
    pub day_stem: Stem,
    pub year: TenGod,
    pub month: TenGod,
    /// Always [`TenGod::PeerSame`]: the day stem classified against itself.
    pub day: TenGod,
    pub hour: TenGod,
}

impl TenGodsAnalysis {
    /// Classify the year, month and hour stems against `day_stem`.
    pub fn new(year_stem: Stem, month_stem: Stem, day_stem: Stem, hour_stem: Stem) -> Self {
        let table = ten_gods_table(day_stem);
        let lookup = |s: Stem| table[s.index() as usize].1;
        Self {
            day_stem,
            year: lookup(year_stem),
            month: lookup(month_stem),
            day: lookup(day_stem),
            hour: lookup(hour_stem),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_is_peer_same() {
        for s in ALL_STEMS {
            assert_eq!(relation_of(s, s), TenGod::PeerSame);
        }
    }

    #[test]
    fn same_element_pairs() {
        assert_eq!(relation_of(Stem::Geng, Stem::Xin), TenGod::PeerOpposite);
        assert_eq!(relation_of(Stem::Xin, Stem::Geng), TenGod::PeerOpposite);
        assert_eq!(relation_of(Stem::Jia, Stem::Yi), TenGod::PeerOpposite);
    }

    #[test]
    fn jia_day_full_table() {
        let expected = [
            TenGod::PeerSame,         // 甲
            TenGod::PeerOpposite,     // 乙
            TenGod::EatingGod,        // 丙
            TenGod::HurtingOfficer,   // 丁
            TenGod::IndirectWealth,   // 戊
            TenGod::DirectWealth,     // 己
            TenGod::SevenKillings,    // 庚
            TenGod::DirectOfficer,    // 辛
            TenGod::IndirectResource, // 壬
            TenGod::DirectResource,   // 癸
        ];
        let table = ten_gods_table(Stem::Jia);
        for (i, (stem, god)) in table.iter().enumerate() {
            assert_eq!(*stem, ALL_STEMS[i]);
            assert_eq!(*god, expected[i], "{stem:?}");
        }
    }

    #[test]
    fn every_label_once_per_day_stem() {
        for day in ALL_STEMS {
            let table = ten_gods_table(day);
            for god in ALL_TEN_GODS {
                let n = table.iter().filter(|(_, g)| *g == god).count();
                assert_eq!(n, 1, "{day:?} {god:?}");
            }
        }
    }

    #[test]
    fn asymmetric_across_elements() {
        for a in ALL_STEMS {
            for b in ALL_STEMS {
                if a.element() != b.element() {
                    assert_ne!(relation_of(a, b), relation_of(b, a), "{a:?} {b:?}");
                }
            }
        }
    }

    #[test]
    fn directional_pairs() {
        // Geng (metal) overcomes Jia (wood)
        assert_eq!(relation_of(Stem::Geng, Stem::Jia), TenGod::IndirectWealth);
        assert_eq!(relation_of(Stem::Jia, Stem::Geng), TenGod::SevenKillings);
        // Ji (yin earth) vs Jia (yang wood)
        assert_eq!(relation_of(Stem::Ji, Stem::Jia), TenGod::DirectOfficer);
        assert_eq!(relation_of(Stem::Ji, Stem::Ding), TenGod::IndirectResource);
        assert_eq!(relation_of(Stem::Ji, Stem::Ren), TenGod::DirectWealth);
    }

    #[test]
    fn analysis_day_is_self() {
        let a = TenGodsAnalysis::new(Stem::Geng, Stem::Jia, Stem::Geng, Stem::Xin);
        assert_eq!(a.day, TenGod::PeerSame);
        assert_eq!(a.year, TenGod::PeerSame);
        assert_eq!(a.month, TenGod::IndirectWealth);
        assert_eq!(a.hour, TenGod::PeerOpposite);
    }

    #[test]
    fn labels_distinct() {
        for (i, a) in ALL_TEN_GODS.iter().enumerate() {
            for b in &ALL_TEN_GODS[i + 1..] {
                assert_ne!(a.label(), b.label());
                assert_ne!(a.kanji(), b.kanji());
            }
        }
    }
}
