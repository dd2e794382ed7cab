use std::fmt::{
    self,
    Display,
};

use anyhow::{
    Error,
    Result,
};
use eterna_data::MoveData;

use crate::{
    damage::DamageOutput,
    state::Combatant,
    stats,
};

/// Damage dealt per point of energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamagePerEnergy {
    Finite(f64),
    /// The move costs no energy.
    Infinite,
}

impl Display for DamagePerEnergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value:.1}"),
            Self::Infinite => write!(f, "infinite"),
        }
    }
}

/// How effective a move is against its target, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effectiveness {
    SuperEffective,
    Neutral,
    NotVeryEffective,
}

impl Effectiveness {
    pub fn from_multiplier(type_multiplier: f64) -> Self {
        if type_multiplier > 1.0 {
            Self::SuperEffective
        } else if type_multiplier < 1.0 {
            Self::NotVeryEffective
        } else {
            Self::Neutral
        }
    }
}

impl Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuperEffective => write!(f, "It's super effective!"),
            Self::Neutral => Ok(()),
            Self::NotVeryEffective => write!(f, "It's not very effective..."),
        }
    }
}

/// `100 x damage / hp`.
pub fn percent_of_hp(damage: u32, hp: u32) -> f64 {
    100.0 * damage as f64 / hp as f64
}

/// Number of hits of the given damage needed to knock out a target with the given HP.
pub fn hits_to_knock_out(damage: u32, hp: u32) -> u32 {
    hp.div_ceil(damage.max(1))
}

/// `damage / energy`, or [`DamagePerEnergy::Infinite`] if the move costs no energy.
pub fn damage_per_energy(damage: u32, energy: u32) -> DamagePerEnergy {
    if energy == 0 {
        DamagePerEnergy::Infinite
    } else {
        DamagePerEnergy::Finite(damage as f64 / energy as f64)
    }
}

/// The headline numbers of a damage calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageSummary {
    pub low_damage: u32,
    pub high_damage: u32,
    /// Effective HP of the defender.
    pub target_hp: u32,
    pub low_percent: f64,
    pub high_percent: f64,
    /// Hits of the highest damage needed to knock out the defender.
    pub hits_to_knock_out: u32,
    /// Highest damage per energy.
    pub damage_per_energy: DamagePerEnergy,
    pub effectiveness: Effectiveness,
}

impl DamageSummary {
    /// Summarizes the output of the damage calculator.
    pub fn new(output: &DamageOutput, defender: &Combatant, mov: &MoveData) -> Result<Self> {
        let (low_damage, high_damage) = match (output.damage.first(), output.damage.last()) {
            (Some(low), Some(high)) => (*low, *high),
            _ => return Err(Error::msg("damage output has no values")),
        };
        let target_hp = stats::effective_hp(defender);
        Ok(Self {
            low_damage,
            high_damage,
            target_hp,
            low_percent: percent_of_hp(low_damage, target_hp),
            high_percent: percent_of_hp(high_damage, target_hp),
            hits_to_knock_out: hits_to_knock_out(high_damage, target_hp),
            damage_per_energy: damage_per_energy(high_damage, mov.energy),
            effectiveness: Effectiveness::from_multiplier(output.type_multiplier),
        })
    }
}

impl Display for DamageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.effectiveness != Effectiveness::Neutral {
            write!(f, "{} ", self.effectiveness)?;
        }
        write!(
            f,
            "{} - {} ({:.1}% - {:.1}%) -- ",
            self.low_damage, self.high_damage, self.low_percent, self.high_percent
        )?;
        if self.hits_to_knock_out == 1 {
            write!(f, "OHKO")?;
        } else {
            write!(f, "{}HKO", self.hits_to_knock_out)?;
        }
        write!(f, ", {} dpe", self.damage_per_energy)
    }
}
