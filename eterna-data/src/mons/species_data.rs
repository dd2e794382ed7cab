use ahash::HashSet;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Error,
    MoveData,
    StatTable,
    Type,
    invalid_configuration,
};

/// Display name prefixes of temporary boosted forms (Mega Evolutions and Primal Reversions).
pub const BOOSTED_FORM_PREFIXES: [&str; 2] = ["Mega ", "Primal "];

/// Data about a particular species form.
///
/// Species data is common to all combatants of a given form. Data about a specific combatant (such
/// as its IVs, level, or battle state) does not belong here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesData {
    id: String,
    name: String,
    species: String,
    types: Vec<Type>,
    base_stats: StatTable,
    fast_move_pool: Vec<MoveData>,
    charged_move_pool: Vec<MoveData>,
}

/// Drops repeated moves, keeping the first occurrence of each identifier.
fn dedup_moves(moves: Vec<MoveData>) -> Vec<MoveData> {
    let mut seen = HashSet::default();
    moves
        .into_iter()
        .filter(|mov| seen.insert(mov.unique_id.clone()))
        .collect()
}

impl SpeciesData {
    /// Creates new species data.
    ///
    /// Fails if there are not one or two types, or if any base stat is zero. Move pools are
    /// deduplicated by move identifier, keeping their original order.
    pub fn new<I, N, S>(
        id: I,
        name: N,
        species: S,
        types: Vec<Type>,
        base_stats: StatTable,
        fast_move_pool: Vec<MoveData>,
        charged_move_pool: Vec<MoveData>,
    ) -> Result<Self, Error>
    where
        I: Into<String>,
        N: Into<String>,
        S: Into<String>,
    {
        if types.is_empty() || types.len() > 2 {
            return Err(invalid_configuration(
                "types",
                format!("expected one or two types, got {}", types.len()),
            ));
        }
        for (stat, value) in base_stats.entries() {
            if value == 0 {
                return Err(invalid_configuration(
                    "base_stats",
                    format!("base {stat} must be positive"),
                ));
            }
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            species: species.into(),
            types,
            base_stats,
            fast_move_pool: dedup_moves(fast_move_pool),
            charged_move_pool: dedup_moves(charged_move_pool),
        })
    }

    /// The roster identifier of the form.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display name of the form.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The species identifier, shared by all forms of the same creature.
    pub fn species(&self) -> &str {
        &self.species
    }

    /// One or two types, primary type first.
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn has_type(&self, typ: Type) -> bool {
        self.types.contains(&typ)
    }

    pub fn base_stats(&self) -> &StatTable {
        &self.base_stats
    }

    pub fn fast_move_pool(&self) -> &[MoveData] {
        &self.fast_move_pool
    }

    pub fn charged_move_pool(&self) -> &[MoveData] {
        &self.charged_move_pool
    }

    /// Is this a temporary boosted form?
    pub fn is_boosted_form(&self) -> bool {
        BOOSTED_FORM_PREFIXES
            .iter()
            .any(|prefix| self.name.starts_with(prefix))
    }
}

/// A single entry of the creature roster lookup file.
///
/// Types are upstream tokens and may be `null`. Move pools list move identifiers.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub name: String,
    pub species: String,
    #[serde(default)]
    pub types: Vec<Option<String>>,
    pub base_attack: u32,
    pub base_defense: u32,
    pub base_hp: u32,
    #[serde(default)]
    pub fast_move_pool: Vec<String>,
    #[serde(default)]
    pub charged_move_pool: Vec<String>,
}

impl SpeciesRecord {
    /// The type tokens that are present.
    pub fn type_tokens(&self) -> impl Iterator<Item = &str> {
        self.types
            .iter()
            .filter_map(|typ| typ.as_deref())
            .filter(|typ| !typ.is_empty())
    }

    pub fn base_stats(&self) -> StatTable {
        StatTable::new(self.base_attack, self.base_defense, self.base_hp)
    }
}
