use std::collections::BTreeMap;

use anyhow::Error as AnyError;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Error,
    Level,
};

/// The stat curve as it appears in the lookup file, keyed by the string form of the level.
pub type SerializedStatCurve = BTreeMap<String, f64>;

/// The stat curve, which maps each level to its CP multiplier.
///
/// Every multiplier is in the range (0, 1].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SerializedStatCurve", into = "SerializedStatCurve")]
pub struct StatCurve {
    multipliers: BTreeMap<Level, f64>,
}

impl StatCurve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a curve from level and multiplier pairs.
    pub fn from_entries<I>(entries: I) -> Result<Self, AnyError>
    where
        I: IntoIterator<Item = (Level, f64)>,
    {
        let mut curve = Self::new();
        for (level, multiplier) in entries {
            curve.insert(level, multiplier)?;
        }
        Ok(curve)
    }

    /// Inserts a multiplier for a level.
    pub fn insert(&mut self, level: Level, multiplier: f64) -> Result<(), AnyError> {
        if !multiplier.is_finite() || multiplier <= 0.0 || multiplier > 1.0 {
            return Err(AnyError::msg(format!(
                "CP multiplier for level {level} must be in (0, 1], got {multiplier}"
            )));
        }
        self.multipliers.insert(level, multiplier);
        Ok(())
    }

    /// The multiplier for the level, if it exists.
    pub fn get(&self, level: Level) -> Option<f64> {
        self.multipliers.get(&level).copied()
    }

    /// The CP multiplier for the level.
    ///
    /// A missing level means the curve is incomplete, which is a data integrity error.
    pub fn cp_multiplier(&self, level: Level) -> Result<f64, Error> {
        self.get(level).ok_or(Error::UnknownLevel(level))
    }

    /// Legal levels that have no multiplier.
    pub fn missing_legal_levels(&self) -> Vec<Level> {
        Level::all_legal()
            .filter(|level| !self.multipliers.contains_key(level))
            .collect()
    }

    /// Does the curve define every legal level?
    pub fn is_complete(&self) -> bool {
        self.missing_legal_levels().is_empty()
    }

    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    /// Iterates over all entries in ascending level order.
    pub fn entries(&self) -> impl Iterator<Item = (Level, f64)> + '_ {
        self.multipliers
            .iter()
            .map(|(level, multiplier)| (*level, *multiplier))
    }
}

impl TryFrom<SerializedStatCurve> for StatCurve {
    type Error = AnyError;
    fn try_from(value: SerializedStatCurve) -> Result<Self, Self::Error> {
        let entries = value
            .into_iter()
            .map(|(level, multiplier)| Ok((level.parse::<Level>()?, multiplier)))
            .collect::<Result<Vec<_>, AnyError>>()?;
        Self::from_entries(entries)
    }
}

impl From<StatCurve> for SerializedStatCurve {
    fn from(value: StatCurve) -> Self {
        value
            .multipliers
            .into_iter()
            .map(|(level, multiplier)| (level.to_string(), multiplier))
            .collect()
    }
}
