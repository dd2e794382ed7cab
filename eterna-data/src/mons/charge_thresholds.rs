use ahash::HashMap;

use crate::{
    Error,
    Type,
};

/// Number of charge circles needed to reach an "excellent" charge move, by move type.
const EXCELLENT_THRESHOLDS: [(Type, u32); 18] = [
    (Type::Flying, 23),
    (Type::Fighting, 23),
    (Type::Grass, 23),
    (Type::Steel, 23),
    (Type::Ghost, 24),
    (Type::Bug, 26),
    (Type::Poison, 27),
    (Type::Fire, 27),
    (Type::Water, 27),
    (Type::Electric, 27),
    (Type::Ground, 28),
    (Type::Rock, 31),
    (Type::Ice, 31),
    (Type::Dark, 31),
    (Type::Dragon, 34),
    (Type::Psychic, 36),
    (Type::Fairy, 36),
    (Type::Normal, 43),
];

/// Per-type table of charge circles required to reach an "excellent" charge.
///
/// The default table covers every type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeThresholds(HashMap<Type, u32>);

impl ChargeThresholds {
    /// A table with no entries.
    pub fn empty() -> Self {
        Self(HashMap::default())
    }

    /// The number of circles for the type, if it exists.
    pub fn get(&self, typ: Type) -> Option<u32> {
        self.0.get(&typ).copied()
    }

    /// The number of circles for the type.
    ///
    /// A missing type means the table is incomplete, which is a data integrity error.
    pub fn circles(&self, typ: Type) -> Result<u32, Error> {
        self.get(typ).ok_or(Error::UnknownTypeThreshold(typ))
    }

    pub fn remove(&mut self, typ: Type) -> Option<u32> {
        self.0.remove(&typ)
    }
}

impl Default for ChargeThresholds {
    fn default() -> Self {
        Self::from_iter(EXCELLENT_THRESHOLDS)
    }
}

impl FromIterator<(Type, u32)> for ChargeThresholds {
    fn from_iter<T: IntoIterator<Item = (Type, u32)>>(iter: T) -> Self {
        Self(HashMap::from_iter(iter))
    }
}
