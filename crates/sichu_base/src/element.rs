//! Five elements (五行), yin-yang polarity, and the element cycles.
//!
//! Generative order: Wood → Fire → Earth → Metal → Water → Wood.
//! Destructive order: Wood → Earth, Fire → Metal, Earth → Water,
//! Metal → Wood, Water → Fire.

/// The five elements in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in order (0 = Wood, 4 = Water).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

/// Yang or yin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

/// How a candidate element stands relative to a reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRelation {
    /// Same element.
    Same,
    /// Reference generates the candidate (child).
    Generates,
    /// Reference overcomes the candidate.
    Overcomes,
    /// Candidate overcomes the reference.
    OvercomeBy,
    /// Candidate generates the reference (parent).
    GeneratedBy,
}

impl Element {
    /// Kanji for the element.
    pub const fn kanji(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one produces in the generative cycle.
    pub const fn generates(self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one overcomes in the destructive cycle.
    pub const fn overcomes(self) -> Element {
        match self {
            Self::Wood => Self::Earth,
            Self::Fire => Self::Metal,
            Self::Earth => Self::Water,
            Self::Metal => Self::Wood,
            Self::Water => Self::Fire,
        }
    }

    /// Relation of `other` as seen from `self`.
    ///
    /// Total over the closed element set: any two distinct elements are
    /// linked by exactly one of the four directed cycle edges.
    pub fn relation_to(self, other: Element) -> ElementRelation {
        if self == other {
            ElementRelation::Same
        } else if self.generates() == other {
            ElementRelation::Generates
        } else if self.overcomes() == other {
            ElementRelation::Overcomes
        } else if other.overcomes() == self {
            ElementRelation::OvercomeBy
        } else {
            ElementRelation::GeneratedBy
        }
    }
}

impl Polarity {
    /// Kanji for the polarity.
    pub const fn kanji(self) -> &'static str {
        match self {
            Self::Yang => "陽",
            Self::Yin => "陰",
        }
    }
}
