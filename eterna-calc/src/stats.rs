use crate::{
    common::Output,
    state::Combatant,
};

/// Multiplier applied to the attack of a shadow combatant.
pub const SHADOW_ATTACK_MULTIPLIER: f64 = 6.0 / 5.0;
/// Multiplier applied to the defense of a shadow combatant.
pub const SHADOW_DEFENSE_MULTIPLIER: f64 = 5.0 / 6.0;
/// Effective HP never drops below this value.
pub const MIN_EFFECTIVE_HP: u32 = 10;

/// The multiplier of a stat stage.
///
/// Stages outside of `-4..=4` have no effect.
pub fn stage_multiplier(stage: i8) -> f64 {
    match stage {
        -4 => 4.0 / 8.0,
        -3 => 4.0 / 7.0,
        -2 => 4.0 / 6.0,
        -1 => 4.0 / 5.0,
        1 => 5.0 / 4.0,
        2 => 6.0 / 4.0,
        3 => 7.0 / 4.0,
        4 => 8.0 / 4.0,
        _ => 1.0,
    }
}

fn stage_label(stage: i8) -> String {
    if stage > 0 {
        format!("+{stage} stage")
    } else {
        format!("{stage} stage")
    }
}

fn scaled_stat(combatant: &Combatant, base: u32, iv: u32) -> Output<f64> {
    let mut output = Output::start(base as f64 + iv as f64, format!("base {base} + IV {iv}"));
    output.mul(
        combatant.cp_multiplier(),
        format!("CP multiplier at level {}", combatant.level()),
    );
    output
}

/// The attack of the combatant, with a description of each modifier.
pub fn attack(combatant: &Combatant, include_shadow: bool) -> Output<f64> {
    let base_stats = combatant.species().base_stats();
    let mut output = scaled_stat(combatant, base_stats.atk, combatant.ivs().atk);
    let stage = combatant.attack_stage();
    if stage != 0 {
        output.mul(stage_multiplier(stage), stage_label(stage));
    }
    if combatant.shadow() && include_shadow {
        output.mul(SHADOW_ATTACK_MULTIPLIER, "shadow");
    }
    output
}

/// The defense of the combatant, with a description of each modifier.
pub fn defense(combatant: &Combatant, include_shadow: bool) -> Output<f64> {
    let base_stats = combatant.species().base_stats();
    let mut output = scaled_stat(combatant, base_stats.def, combatant.ivs().def);
    let stage = combatant.defense_stage();
    if stage != 0 {
        output.mul(stage_multiplier(stage), stage_label(stage));
    }
    if combatant.shadow() && include_shadow {
        output.mul(SHADOW_DEFENSE_MULTIPLIER, "shadow");
    }
    output
}

/// `(base + IV) x CPM x stage x shadow`.
pub fn effective_attack(combatant: &Combatant, include_shadow: bool) -> f64 {
    *attack(combatant, include_shadow).value()
}

/// `(base + IV) x CPM x stage x shadow`.
pub fn effective_defense(combatant: &Combatant, include_shadow: bool) -> f64 {
    *defense(combatant, include_shadow).value()
}

/// Attack with no stage or shadow modifiers.
pub fn unmodified_attack(combatant: &Combatant) -> f64 {
    *scaled_stat(
        combatant,
        combatant.species().base_stats().atk,
        combatant.ivs().atk,
    )
    .value()
}

/// Defense with no stage or shadow modifiers.
pub fn unmodified_defense(combatant: &Combatant) -> f64 {
    *scaled_stat(
        combatant,
        combatant.species().base_stats().def,
        combatant.ivs().def,
    )
    .value()
}

/// `floor((base + IV) x CPM)`, never less than [`MIN_EFFECTIVE_HP`].
///
/// Saturates at [`u32::MAX`].
pub fn effective_hp(combatant: &Combatant) -> u32 {
    let hp = (combatant.species().base_stats().hp as f64 + combatant.ivs().hp as f64)
        * combatant.cp_multiplier();
    (hp.floor() as u32).max(MIN_EFFECTIVE_HP)
}

/// The combat power rating of the combatant.
///
/// Stages and shadow status do not contribute. Saturates at [`u32::MAX`].
pub fn combat_power(combatant: &Combatant) -> u32 {
    let base_stats = combatant.species().base_stats();
    let ivs = combatant.ivs();
    let cpm = combatant.cp_multiplier();
    let cp = (base_stats.atk as f64 + ivs.atk as f64)
        * (base_stats.def as f64 + ivs.def as f64).sqrt()
        * (base_stats.hp as f64 + ivs.hp as f64).sqrt()
        * cpm.powi(2)
        / 10.0;
    cp.floor() as u32
}
