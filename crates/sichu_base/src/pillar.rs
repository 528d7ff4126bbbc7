//! Pillar derivation: year, month, day and hour stem/branch pairs.
//!
//! Conventions, kept exactly for output compatibility:
//! - Year: index `year - 4` in both cycles.
//! - Month: branch index `month + 1`, so January is 寅. No solar-term
//!   cutover is applied.
//! - Day: index `total_days - 1` where day 1 is 1900-01-01 (甲子).
//! - Hour: branch from the fixed 24-hour table.
//!
//! Month and hour stems start from an offset selected by the governing
//! stem's pair group (甲己, 乙庚, 丙辛, 丁壬, 戊癸).

use sichu_time::total_days_since_epoch;

use crate::branch::{Branch, branch_from_hour};
use crate::stem::Stem;

/// Offset subtracted from the CE year to index both cycles.
pub const YEAR_CYCLE_OFFSET: i32 = 4;

/// A stem/branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// 0-based position in the 60-pair sexagenary cycle (甲子 = 0).
    ///
    /// `None` when stem and branch parities differ; such pairs never occur
    /// in the cycle and are never produced by the derivations below.
    pub const fn sexagenary_index(self) -> Option<u8> {
        let s = self.stem.index();
        let b = self.branch.index();
        if s % 2 != b % 2 {
            return None;
        }
        // Smallest n with n ≡ s (mod 10) and n ≡ b (mod 12).
        let mut n = s;
        while n % 12 != b {
            n += 10;
        }
        Some(n)
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// Month-stem offset for a year stem: the stem index the month cycle
/// assigns to branch index 0 (子). January (寅) therefore lands two stems
/// later.
pub const fn month_stem_start(year_stem: Stem) -> u8 {
    match year_stem {
        Stem::Jia | Stem::Ji => 2,
        Stem::Yi | Stem::Geng => 4,
        Stem::Bing | Stem::Xin => 6,
        Stem::Ding | Stem::Ren => 8,
        Stem::Wu | Stem::Gui => 0,
    }
}

/// Hour-stem offset for a day stem: the stem of the 子 hour.
pub const fn hour_stem_start(day_stem: Stem) -> u8 {
    match day_stem {
        Stem::Jia | Stem::Ji => 0,
        Stem::Yi | Stem::Geng => 2,
        Stem::Bing | Stem::Xin => 4,
        Stem::Ding | Stem::Ren => 6,
        Stem::Wu | Stem::Gui => 8,
    }
}

/// Year pillar for a CE year.
pub const fn year_pillar(year: i32) -> Pillar {
    let n = (year - YEAR_CYCLE_OFFSET) as i64;
    Pillar::new(Stem::from_cycle(n), Branch::from_cycle(n))
}

/// Month pillar from the year stem and a 1-based month.
pub const fn month_pillar(year_stem: Stem, month: u32) -> Pillar {
    let branch = Branch::from_cycle(month as i64 + 1);
    let stem = Stem::from_cycle(month_stem_start(year_stem) as i64 + branch.index() as i64);
    Pillar::new(stem, branch)
}

/// Day pillar from a 1-based day count (see [`total_days_since_epoch`]).
pub const fn day_pillar(total_days: i64) -> Pillar {
    Pillar::new(
        Stem::from_cycle(total_days - 1),
        Branch::from_cycle(total_days - 1),
    )
}

/// Day pillar for a calendar date. Unchecked, like the day count itself.
pub fn day_pillar_for_date(year: i32, month: u32, day: u32) -> Pillar {
    day_pillar(total_days_since_epoch(year, month, day))
}

/// Hour pillar from the day stem and a 24-hour clock hour.
///
/// Returns `None` for an hour outside 0..=23.
pub const fn hour_pillar(day_stem: Stem, hour: u32) -> Option<Pillar> {
    let Some(branch) = branch_from_hour(hour) else {
        return None;
    };
    let stem = Stem::from_cycle(hour_stem_start(day_stem) as i64 + branch.index() as i64);
    Some(Pillar::new(stem, branch))
}
