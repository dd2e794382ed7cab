use anyhow::{
    Error as AnyError,
    Result,
};
use eterna_data::{
    DataStoreByName,
    Error,
    Level,
    SpeciesData,
    StatCurve,
    StatTable,
    invalid_configuration,
};
use serde::{
    Deserialize,
    Serialize,
};

/// The highest individual value of any stat.
pub const MAX_IV: u32 = 15;
/// The lowest stat stage.
pub const MIN_STAGE: i8 = -4;
/// The highest stat stage.
pub const MAX_STAGE: i8 = 4;

/// Battle-specific configuration of a combatant, as supplied by the caller.
///
/// Nothing here is trusted until it passes through [`Combatant::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatantConfig {
    /// Current HP. Full HP when unset.
    pub current_hp: Option<u32>,
    /// Individual values, each in `0..=15`.
    pub ivs: StatTable,
    /// Level, a multiple of 0.5 in `1.0..=51.0`.
    pub level: f64,
    pub shadow: bool,
    /// Attack stat stage, in `-4..=4`.
    pub attack_stage: i8,
    /// Defense stat stage, in `-4..=4`.
    pub defense_stage: i8,
}

impl Default for CombatantConfig {
    fn default() -> Self {
        Self {
            current_hp: None,
            ivs: StatTable::default(),
            level: 1.0,
            shadow: false,
            attack_stage: 0,
            defense_stage: 0,
        }
    }
}

/// A species form configured for battle.
///
/// Immutable once constructed. The CP multiplier for the level is resolved at construction, so
/// every derived stat is infallible.
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    species: SpeciesData,
    current_hp: Option<u32>,
    ivs: StatTable,
    level: Level,
    cp_multiplier: f64,
    shadow: bool,
    attack_stage: i8,
    defense_stage: i8,
}

fn validate_stage(field: &'static str, stage: i8) -> Result<i8, Error> {
    if (MIN_STAGE..=MAX_STAGE).contains(&stage) {
        Ok(stage)
    } else {
        Err(invalid_configuration(
            field,
            format!("stage {stage} is outside {MIN_STAGE}..={MAX_STAGE}"),
        ))
    }
}

impl Combatant {
    /// Creates a new combatant.
    ///
    /// Fails with [`Error::InvalidConfiguration`] if any IV or stage is out of range or the level is
    /// not a legal half step. Fails with [`Error::UnknownLevel`] if the curve does not define the
    /// level.
    pub fn new(
        species: SpeciesData,
        config: CombatantConfig,
        stat_curve: &StatCurve,
    ) -> Result<Self, Error> {
        for (stat, iv) in config.ivs.entries() {
            if iv > MAX_IV {
                return Err(invalid_configuration(
                    "ivs",
                    format!("{stat} IV {iv} is outside 0..={MAX_IV}"),
                ));
            }
        }
        let level = Level::new(config.level)
            .filter(|level| level.is_legal())
            .ok_or_else(|| {
                invalid_configuration(
                    "level",
                    format!(
                        "{} is not a multiple of 0.5 in {}..={}",
                        config.level,
                        Level::MIN,
                        Level::MAX
                    ),
                )
            })?;
        let attack_stage = validate_stage("attack_stage", config.attack_stage)?;
        let defense_stage = validate_stage("defense_stage", config.defense_stage)?;
        let cp_multiplier = stat_curve.cp_multiplier(level)?;
        Ok(Self {
            species,
            current_hp: config.current_hp,
            ivs: config.ivs,
            level,
            cp_multiplier,
            shadow: config.shadow,
            attack_stage,
            defense_stage,
        })
    }

    /// Creates a new combatant for the species with the given name.
    pub fn from_data(
        data: &dyn DataStoreByName,
        name: &str,
        config: CombatantConfig,
    ) -> Result<Self> {
        let species = data
            .get_species_by_name(name)?
            .ok_or_else(|| AnyError::msg(format!("species {name} does not exist")))?;
        Ok(Self::new(species, config, data.get_stat_curve()?)?)
    }

    pub fn species(&self) -> &SpeciesData {
        &self.species
    }

    pub fn ivs(&self) -> &StatTable {
        &self.ivs
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// The CP multiplier of the combatant's level.
    pub fn cp_multiplier(&self) -> f64 {
        self.cp_multiplier
    }

    pub fn shadow(&self) -> bool {
        self.shadow
    }

    pub fn attack_stage(&self) -> i8 {
        self.attack_stage
    }

    pub fn defense_stage(&self) -> i8 {
        self.defense_stage
    }

    /// The configured current HP, if any.
    pub fn current_hp(&self) -> Option<u32> {
        self.current_hp
    }
}
