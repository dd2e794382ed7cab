mod charge_thresholds;
mod species_data;
mod stat;
mod stat_curve;
mod r#type;

pub use charge_thresholds::ChargeThresholds;
pub use species_data::{
    BOOSTED_FORM_PREFIXES,
    SpeciesData,
    SpeciesRecord,
};
pub use stat::{
    Stat,
    StatTable,
};
pub use stat_curve::{
    SerializedStatCurve,
    StatCurve,
};
pub use r#type::{
    SerializedTypeChart,
    Type,
    TypeChart,
    TypeEffectiveness,
    TypeTable,
};
