//! Five-element tally of the eight chart symbols.
//!
//! Each stem and each branch (primary element only) is filed under its
//! element. Stems are filed first, in pillar order, then branches.

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::Pillar;

/// One of the four chart positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    /// Kanji for the position (年, 月, 日, 時).
    pub const fn kanji(self) -> &'static str {
        match self {
            Self::Year => "年",
            Self::Month => "月",
            Self::Day => "日",
            Self::Hour => "時",
        }
    }

    /// Lowercase English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

/// Stem or branch half of a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Stem,
    Branch,
}

impl ComponentKind {
    pub const fn kanji(self) -> &'static str {
        match self {
            Self::Stem => "干",
            Self::Branch => "支",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Stem => "stem",
            Self::Branch => "branch",
        }
    }
}

/// A single symbol filed in the tally, e.g. the year stem 庚.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementMember {
    pub position: PillarPosition,
    pub kind: ComponentKind,
    /// Kanji of the stem or branch.
    pub symbol: &'static str,
}

impl ElementMember {
    /// English label such as `year-stem` or `day-branch`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.position.name(), self.kind.name())
    }
}

impl std::fmt::Display for ElementMember {
    /// Renders as `年干:庚`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}:{}",
            self.position.kanji(),
            self.kind.kanji(),
            self.symbol
        )
    }
}

/// Chart symbols grouped by element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiveElementTally {
    buckets: [Vec<ElementMember>; 5],
}

impl FiveElementTally {
    /// Tally the pillars, given in year, month, day, hour order.
    pub fn from_pillars(pillars: &[Pillar; 4]) -> Self {
        let mut buckets: [Vec<ElementMember>; 5] = Default::default();
        for (position, pillar) in ALL_POSITIONS.iter().zip(pillars) {
            buckets[pillar.stem.element().index() as usize].push(ElementMember {
                position: *position,
                kind: ComponentKind::Stem,
                symbol: pillar.stem.kanji(),
            });
        }
        for (position, pillar) in ALL_POSITIONS.iter().zip(pillars) {
            buckets[pillar.branch.element().index() as usize].push(ElementMember {
                position: *position,
                kind: ComponentKind::Branch,
                symbol: pillar.branch.kanji(),
            });
        }
        Self { buckets }
    }

    /// Members filed under `element`, in filing order.
    pub fn members(&self, element: Element) -> &[ElementMember] {
        &self.buckets[element.index() as usize]
    }

    /// Number of symbols filed under `element`.
    pub fn count(&self, element: Element) -> usize {
        self.members(element).len()
    }

    /// Total symbols filed; always 8 for a tally built from four pillars.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Non-empty buckets in element order (Wood, Fire, Earth, Metal, Water).
    pub fn non_empty(&self) -> impl Iterator<Item = (Element, &[ElementMember])> + '_ {
        ALL_ELEMENTS
            .iter()
            .map(|&e| (e, self.members(e)))
            .filter(|(_, members)| !members.is_empty())
    }

    /// Elements with no symbols at all.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .iter()
            .copied()
            .filter(|&e| self.count(e) == 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;
    use crate::stem::Stem;

    fn chart_1990() -> [Pillar; 4] {
        [
            Pillar::new(Stem::Geng, Branch::Wu),
            Pillar::new(Stem::Jia, Branch::Wu),
            Pillar::new(Stem::Geng, Branch::Wu),
            Pillar::new(Stem::Xin, Branch::Si),
        ]
    }

    #[test]
    fn tally_1990() {
        let t = FiveElementTally::from_pillars(&chart_1990());
        assert_eq!(t.count(Element::Wood), 1);
        assert_eq!(t.count(Element::Fire), 4);
        assert_eq!(t.count(Element::Earth), 0);
        assert_eq!(t.count(Element::Metal), 3);
        assert_eq!(t.count(Element::Water), 0);
        assert_eq!(t.total(), 8);
        assert_eq!(t.missing(), vec![Element::Earth, Element::Water]);
    }

    #[test]
    fn stems_before_branches() {
        let t = FiveElementTally::from_pillars(&chart_1990());
        let metal: Vec<String> = t.members(Element::Metal).iter().map(|m| m.label()).collect();
        assert_eq!(metal, ["year-stem", "day-stem", "hour-stem"]);
        let fire: Vec<String> = t.members(Element::Fire).iter().map(|m| m.to_string()).collect();
        assert_eq!(fire, ["年支:午", "月支:午", "日支:午", "時支:巳"]);
    }

    #[test]
    fn non_empty_in_element_order() {
        let t = FiveElementTally::from_pillars(&chart_1990());
        let elems: Vec<Element> = t.non_empty().map(|(e, _)| e).collect();
        assert_eq!(elems, [Element::Wood, Element::Fire, Element::Metal]);
    }

    #[test]
    fn earth_heavy_chart() {
        let pillars = [
            Pillar::new(Stem::Wu, Branch::Chen),
            Pillar::new(Stem::Ji, Branch::Chou),
            Pillar::new(Stem::Wu, Branch::Xu),
            Pillar::new(Stem::Ji, Branch::Wei),
        ];
        let t = FiveElementTally::from_pillars(&pillars);
        assert_eq!(t.count(Element::Earth), 8);
        assert_eq!(t.non_empty().count(), 1);
    }

    #[test]
    fn member_display() {
        let m = ElementMember {
            position: PillarPosition::Hour,
            kind: ComponentKind::Stem,
            symbol: "辛",
        };
        assert_eq!(m.to_string(), "時干:辛");
        assert_eq!(m.label(), "hour-stem");
    }
}
