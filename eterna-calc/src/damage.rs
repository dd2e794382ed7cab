use anyhow::Result;
use eterna_data::{
    DataStore,
    MoveData,
    MoveUsage,
};
use itertools::Itertools;
use log::debug;

use crate::{
    common::Output,
    state::Combatant,
    stats,
};

/// Fixed factor at the front of the damage formula.
pub const DAMAGE_FACTOR: f64 = 0.5;
/// Fixed multiplier applied to every hit.
pub const TRAINER_CONSTANT: f64 = 1.3;
/// Same-type attack bonus.
pub const STAB_MULTIPLIER: f64 = 1.2;
/// Charge fraction of the weakest possible charge move.
pub const MINIMUM_CHARGE: f64 = 0.25;

/// Input for the damage calculator.
pub struct DamageCalculatorInput<'d> {
    /// Data source, for the type chart and the charge thresholds.
    pub data: &'d dyn DataStore,
    /// Attacker state.
    pub attacker: &'d Combatant,
    /// Defender state.
    pub defender: &'d Combatant,
    /// Move being used.
    pub mov: &'d MoveData,
}

/// Output of the damage calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageOutput {
    /// Attack stat of the attacker.
    pub attack: Output<f64>,
    /// Defense stat of the defender.
    pub defense: Output<f64>,
    /// Same-type attack bonus.
    pub stab: f64,
    /// Combined type effectiveness against all of the defender's types.
    pub type_multiplier: f64,
    /// Product of all damage modifiers.
    pub modifiers: Output<f64>,
    /// Every step of the damage at full charge.
    pub full_charge: Output<u32>,
    /// Number of charge circles to reach an excellent charge. Only set for charge moves.
    pub circles: Option<u32>,
    /// All possible damage values, unique and ascending.
    ///
    /// Fast moves have exactly one value.
    pub damage: Vec<u32>,
}

impl DamageOutput {
    /// The lowest possible damage.
    pub fn low(&self) -> u32 {
        self.damage.first().copied().unwrap_or_default()
    }

    /// The highest possible damage.
    pub fn high(&self) -> u32 {
        self.damage.last().copied().unwrap_or_default()
    }
}

/// The charge fractions a charge move can be released at.
///
/// There are `circles + 1` evenly spaced fractions from [`MINIMUM_CHARGE`] to 1. Zero circles
/// behaves like one circle.
pub fn charge_fractions(circles: u32) -> Vec<f64> {
    let circles = circles.max(1);
    (0..=circles)
        .map(|i| (MINIMUM_CHARGE + (1.0 - MINIMUM_CHARGE) * i as f64 / circles as f64).min(1.0))
        .collect()
}

/// A single damage value, with a description of each step.
///
/// `floor(0.5 x power x attack / defense x charge x modifiers) + 1`, saturating at [`u32::MAX`].
pub fn describe_damage_roll(
    power: u32,
    attack: f64,
    defense: f64,
    charge: f64,
    modifiers: f64,
) -> Output<u32> {
    let mut damage = Output::<f64>::start(DAMAGE_FACTOR, "damage factor");
    damage.mul(power as f64, "move power");
    damage.mul(attack, "attack");
    damage.div(defense, "defense");
    damage.mul(charge, "charge");
    damage.mul(modifiers, "modifiers");
    damage.map(
        |damage| (damage.floor() as u32).saturating_add(1),
        "floor + 1",
    )
}

/// A single damage value.
pub fn damage_roll(power: u32, attack: f64, defense: f64, charge: f64, modifiers: f64) -> u32 {
    *describe_damage_roll(power, attack, defense, charge, modifiers).value()
}

/// Calculates all possible damage values of a move.
///
/// Shadow modifiers of both combatants always apply.
pub fn calculate_damage(input: DamageCalculatorInput) -> Result<DamageOutput> {
    let DamageCalculatorInput {
        data,
        attacker,
        defender,
        mov,
    } = input;

    let attack = stats::attack(attacker, true);
    let defense = stats::defense(defender, true);

    let stab = if attacker.species().has_type(mov.typ) {
        STAB_MULTIPLIER
    } else {
        1.0
    };
    let type_multiplier = data
        .get_type_chart()?
        .type_multiplier(mov.typ, defender.species().types());

    let mut modifiers = Output::<f64>::start(TRAINER_CONSTANT, "trainer constant");
    if stab != 1.0 {
        modifiers.mul(stab, "STAB");
    }
    if type_multiplier != 1.0 {
        modifiers.mul(type_multiplier, "type effectiveness");
    }

    let describe_roll = |charge: f64| {
        describe_damage_roll(
            mov.power,
            *attack.value(),
            *defense.value(),
            charge,
            *modifiers.value(),
        )
    };
    let roll = |charge: f64| *describe_roll(charge).value();
    let full_charge = describe_roll(1.0);
    let (circles, damage) = match mov.usage {
        MoveUsage::Fast => (None, vec![*full_charge.value()]),
        MoveUsage::Charge => {
            let circles = data.get_charge_thresholds()?.circles(mov.typ)?;
            let damage = charge_fractions(circles)
                .into_iter()
                .map(roll)
                .sorted()
                .dedup()
                .collect();
            (Some(circles), damage)
        }
    };

    debug!(
        "{} {} vs. {}: {damage:?}",
        attacker.species().name(),
        mov.name,
        defender.species().name(),
    );

    Ok(DamageOutput {
        attack,
        defense,
        stab,
        type_multiplier,
        modifiers,
        full_charge,
        circles,
        damage,
    })
}

/// Computes all possible damage values of a move, unique and ascending.
pub fn compute_damage(
    data: &dyn DataStore,
    attacker: &Combatant,
    defender: &Combatant,
    mov: &MoveData,
) -> Result<Vec<u32>> {
    calculate_damage(DamageCalculatorInput {
        data,
        attacker,
        defender,
        mov,
    })
    .map(|output| output.damage)
}
