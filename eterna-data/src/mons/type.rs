use std::str::FromStr;

use ahash::HashMap;
use log::warn;
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The elemental type of a species or move.
///
/// Upstream game data encodes types as `POKEMON_TYPE_*` tokens, which are accepted as aliases.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[alias = "POKEMON_TYPE_NORMAL"]
    #[default]
    Normal,
    #[string = "Fire"]
    #[alias = "POKEMON_TYPE_FIRE"]
    Fire,
    #[string = "Water"]
    #[alias = "POKEMON_TYPE_WATER"]
    Water,
    #[string = "Electric"]
    #[alias = "POKEMON_TYPE_ELECTRIC"]
    Electric,
    #[string = "Grass"]
    #[alias = "POKEMON_TYPE_GRASS"]
    Grass,
    #[string = "Ice"]
    #[alias = "POKEMON_TYPE_ICE"]
    Ice,
    #[string = "Fighting"]
    #[alias = "POKEMON_TYPE_FIGHTING"]
    Fighting,
    #[string = "Poison"]
    #[alias = "POKEMON_TYPE_POISON"]
    Poison,
    #[string = "Ground"]
    #[alias = "POKEMON_TYPE_GROUND"]
    Ground,
    #[string = "Flying"]
    #[alias = "POKEMON_TYPE_FLYING"]
    Flying,
    #[string = "Psychic"]
    #[alias = "POKEMON_TYPE_PSYCHIC"]
    Psychic,
    #[string = "Bug"]
    #[alias = "POKEMON_TYPE_BUG"]
    Bug,
    #[string = "Rock"]
    #[alias = "POKEMON_TYPE_ROCK"]
    Rock,
    #[string = "Ghost"]
    #[alias = "POKEMON_TYPE_GHOST"]
    Ghost,
    #[string = "Dragon"]
    #[alias = "POKEMON_TYPE_DRAGON"]
    Dragon,
    #[string = "Dark"]
    #[alias = "POKEMON_TYPE_DARK"]
    Dark,
    #[string = "Steel"]
    #[alias = "POKEMON_TYPE_STEEL"]
    Steel,
    #[string = "Fairy"]
    #[alias = "POKEMON_TYPE_FAIRY"]
    Fairy,
}

impl Type {
    /// Every type, in display order.
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Parses a serialized type token, returning [`None`] if it is not recognized.
    ///
    /// Accepts display names (`"Fire"`), upstream tokens (`"POKEMON_TYPE_FIRE"`), and any token whose
    /// last underscore-separated word is a type name.
    pub fn parse_token(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::from_str(token)
            .or_else(|_| Self::from_str(token.rsplit_once('_').map_or(token, |(_, last)| last)))
            .ok()
    }

    /// Parses a serialized type token, falling back to [`Type::Normal`] if it is not recognized.
    pub fn from_token(token: &str) -> Self {
        Self::parse_token(token).unwrap_or_default()
    }
}

/// Effectiveness category of one type attacking another.
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
pub enum TypeEffectiveness {
    #[string = "SUPER_EFFECTIVE"]
    SuperEffective,
    #[string = "NEUTRAL"]
    #[default]
    Neutral,
    #[string = "NOT_VERY_EFFECTIVE"]
    NotVeryEffective,
    #[string = "IMMUNE"]
    Immune,
}

impl TypeEffectiveness {
    /// The damage multiplier for the category.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::SuperEffective => 1.6,
            Self::Neutral => 1.0,
            Self::NotVeryEffective => 0.625,
            Self::Immune => 0.390625,
        }
    }

    /// Parses a serialized category token, falling back to [`TypeEffectiveness::Neutral`].
    pub fn from_token(token: &str) -> Self {
        Self::from_str(token.trim()).unwrap_or_default()
    }
}

/// A type table, which maps an attacking type to the effectiveness against each defending type.
///
/// Missing pairs are neutral.
pub type TypeTable = HashMap<Type, HashMap<Type, TypeEffectiveness>>;

/// The type chart as it appears in the lookup file, before tokens are resolved.
pub type SerializedTypeChart = HashMap<String, HashMap<String, String>>;

/// The type chart, which contains all type effectiveness information.
///
/// The key here is the attacking type.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SerializedTypeChart", into = "TypeTable")]
pub struct TypeChart {
    pub types: TypeTable,
}

impl TypeChart {
    pub fn new() -> Self {
        Self {
            types: TypeTable::default(),
        }
    }

    pub fn from_filled(types: TypeTable) -> Self {
        Self { types }
    }

    /// The effectiveness of an attacking type against a single defending type.
    pub fn effectiveness(&self, attacking: Type, defending: Type) -> TypeEffectiveness {
        self.types
            .get(&attacking)
            .and_then(|row| row.get(&defending))
            .copied()
            .unwrap_or_default()
    }

    /// The combined multiplier of an attacking type against all of the defending types.
    ///
    /// Multipliers stack multiplicatively. No defending types yields 1.
    pub fn type_multiplier(&self, attacking: Type, defending: &[Type]) -> f64 {
        defending
            .iter()
            .map(|typ| self.effectiveness(attacking, *typ).multiplier())
            .product()
    }
}

impl From<SerializedTypeChart> for TypeChart {
    fn from(value: SerializedTypeChart) -> Self {
        let mut types = TypeTable::default();
        for (attacking, row) in value {
            let Some(attacking_type) = Type::parse_token(&attacking) else {
                warn!("skipping unknown attacking type \"{attacking}\" in type chart");
                continue;
            };
            let row = row
                .into_iter()
                .filter_map(|(defending, effectiveness)| match Type::parse_token(&defending) {
                    Some(defending) => {
                        Some((defending, TypeEffectiveness::from_token(&effectiveness)))
                    }
                    None => {
                        warn!(
                            "skipping unknown defending type \"{defending}\" for {attacking_type} \
                             in type chart"
                        );
                        None
                    }
                });
            types.entry(attacking_type).or_default().extend(row);
        }
        Self { types }
    }
}

impl From<TypeChart> for TypeTable {
    fn from(value: TypeChart) -> Self {
        value.types
    }
}

#[cfg(test)]
mod type_test {
    use crate::{
        Type,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(Type::Grass, "Grass");
        test_string_serialization(Type::Fire, "Fire");
        test_string_serialization(Type::Water, "Water");
    }

    #[test]
    fn deserializes_lowercase() {
        test_string_deserialization("normal", Type::Normal);
        test_string_deserialization("dragon", Type::Dragon);
        test_string_deserialization("ghost", Type::Ghost);
    }

    #[test]
    fn deserializes_upstream_tokens() {
        test_string_deserialization("POKEMON_TYPE_FAIRY", Type::Fairy);
        test_string_deserialization("POKEMON_TYPE_STEEL", Type::Steel);
    }

    #[test]
    fn has_eighteen_distinct_types() {
        let mut types = Type::ALL.to_vec();
        types.sort();
        types.dedup();
        assert_eq!(types.len(), 18);
    }

    #[test]
    fn parses_tokens_leniently() {
        assert_eq!(Type::from_token("POKEMON_TYPE_PSYCHIC"), Type::Psychic);
        assert_eq!(Type::from_token("psychic"), Type::Psychic);
        assert_eq!(Type::from_token("SOME_FUTURE_ICE"), Type::Ice);
        assert_eq!(Type::from_token("POKEMON_TYPE_STELLAR"), Type::Normal);
        assert_eq!(Type::from_token(""), Type::Normal);
        assert_eq!(Type::parse_token("POKEMON_TYPE_STELLAR"), None);
        assert_eq!(Type::parse_token("Stellar"), None);
        assert_eq!(Type::parse_token("_"), None);
    }
}
