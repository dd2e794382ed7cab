use std::{
    fmt::{
        self,
        Display,
    },
    str::FromStr,
};

use anyhow::Error;
use serde::{
    Deserialize,
    Serialize,
    Serializer,
    de::{
        Unexpected,
        Visitor,
    },
};

/// A level, which is always a multiple of 0.5.
///
/// Levels are stored as a count of half steps so they can be compared and hashed exactly. This is
/// the key of the [`StatCurve`][`crate::StatCurve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u16);

impl Level {
    /// The lowest level a combatant can have.
    pub const MIN: Level = Level(2);
    /// The highest level a combatant can have.
    pub const MAX: Level = Level(102);

    /// Creates a level from its numeric value.
    ///
    /// Returns [`None`] if the value is not a positive multiple of 0.5.
    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        let half_steps = value * 2.0;
        if half_steps.fract() != 0.0 || half_steps > u16::MAX as f64 {
            return None;
        }
        Some(Self(half_steps as u16))
    }

    /// The numeric value of the level.
    pub fn value(&self) -> f64 {
        self.0 as f64 / 2.0
    }

    /// Is the level within [`Level::MIN`] and [`Level::MAX`]?
    pub fn is_legal(&self) -> bool {
        *self >= Self::MIN && *self <= Self::MAX
    }

    /// Iterates over every legal level in ascending order.
    pub fn all_legal() -> impl Iterator<Item = Level> {
        (Self::MIN.0..=Self::MAX.0).map(Level)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

impl FromStr for Level {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::msg(format!("invalid level: \"{s}\"")))?;
        Self::new(value).ok_or_else(|| Error::msg(format!("level {s} is not a multiple of 0.5")))
    }
}

impl Serialize for Level {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct LevelVisitor;

impl<'de> Visitor<'de> for LevelVisitor {
    type Value = Level;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a positive multiple of 0.5")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Level::new(v as f64).ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Level::new(v as f64).ok_or_else(|| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Level::new(v).ok_or_else(|| E::invalid_value(Unexpected::Float(v), &self))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Level::from_str(v).map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(LevelVisitor)
    }
}
