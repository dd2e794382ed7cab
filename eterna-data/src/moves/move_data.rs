use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    Type,
    move_display_name,
};

/// Suffix that marks a fast move identifier.
pub const FAST_MOVE_SUFFIX: &str = "_FAST";

/// How a move is used in battle.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveUsage {
    /// A fast move, which generates energy every turn it is used.
    #[string = "fast"]
    #[default]
    Fast,
    /// A charge move, which spends energy and is powered up by charge circles.
    #[string = "charge"]
    #[alias = "charged"]
    Charge,
}

impl MoveUsage {
    /// Infers the usage from a move identifier.
    pub fn from_unique_id(unique_id: &str) -> Self {
        if unique_id.ends_with(FAST_MOVE_SUFFIX) {
            Self::Fast
        } else {
            Self::Charge
        }
    }
}

/// Data about a particular move.
///
/// Move data never changes after it is constructed.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveData {
    /// Display name of the move.
    pub name: String,
    /// Stable identifier of the move.
    pub unique_id: String,
    /// Move type.
    #[serde(rename = "type")]
    pub typ: Type,
    /// Base power.
    pub power: u32,
    /// Energy gained (fast moves) or spent (charge moves), as an absolute value.
    pub energy: u32,
    /// Cast duration in turns.
    pub turns: u32,
    /// Usage category.
    pub usage: MoveUsage,
}

impl MoveData {
    /// Creates a new move.
    ///
    /// The energy delta may be given with either sign. Only its magnitude is kept.
    pub fn new<N, I>(
        name: N,
        unique_id: I,
        typ: Type,
        power: u32,
        energy_delta: i32,
        turns: u32,
        usage: MoveUsage,
    ) -> Self
    where
        N: Into<String>,
        I: Into<String>,
    {
        Self {
            name: name.into(),
            unique_id: unique_id.into(),
            typ,
            power,
            energy: energy_delta.unsigned_abs(),
            turns,
            usage,
        }
    }

    pub fn is_fast(&self) -> bool {
        self.usage == MoveUsage::Fast
    }

    pub fn is_charge(&self) -> bool {
        self.usage == MoveUsage::Charge
    }
}

/// A single entry of the move roster lookup file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub unique_id: String,
    /// Type token, such as `POKEMON_TYPE_FIRE`.
    #[serde(rename = "type")]
    pub typ: String,
    #[serde(default)]
    pub power: f64,
    /// Signed energy change. Charge moves are negative upstream.
    #[serde(default)]
    pub energy_delta: i32,
    #[serde(default)]
    pub turns: u32,
    pub usage_type: Option<MoveUsage>,
}

impl From<MoveRecord> for MoveData {
    fn from(value: MoveRecord) -> Self {
        let usage = value
            .usage_type
            .unwrap_or_else(|| MoveUsage::from_unique_id(&value.unique_id));
        Self::new(
            move_display_name(&value.unique_id),
            value.unique_id,
            Type::from_token(&value.typ),
            value.power.max(0.0) as u32,
            value.energy_delta,
            value.turns,
            usage,
        )
    }
}
