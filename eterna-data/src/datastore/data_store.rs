use anyhow::Result;

use crate::{
    ChargeThresholds,
    MoveData,
    SpeciesData,
    StatCurve,
    TypeChart,
};

/// Collection of tables for all static battle data.
///
/// This trait can be implemented for different data sources, such as an external database or disk.
///
/// This collection is used for "raw lookup" of resources by identifier. Lookup by display name is
/// layered on top by [`DataStoreByName`].
pub trait DataStore: Send + Sync {
    /// Gets all species identifiers in roster order, applying the given filter on the underlying
    /// data.
    fn all_species_ids(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Vec<String>>;
    /// Gets all move identifiers in roster order, applying the given filter on the underlying data.
    fn all_move_ids(&self, filter: &dyn Fn(&MoveData) -> bool) -> Result<Vec<String>>;

    /// Gets the type chart.
    fn get_type_chart(&self) -> Result<&TypeChart>;
    /// Gets the CP multiplier curve.
    fn get_stat_curve(&self) -> Result<&StatCurve>;
    /// Gets the per-type charge circle thresholds.
    fn get_charge_thresholds(&self) -> Result<&ChargeThresholds>;

    /// Gets a move by identifier.
    fn get_move(&self, id: &str) -> Result<Option<MoveData>>;
    /// Gets a species by identifier.
    fn get_species(&self, id: &str) -> Result<Option<SpeciesData>>;
}

/// An extension of [`DataStore`] for looking up resources by name.
pub trait DataStoreByName: DataStore {
    /// Gets a species by display name or identifier.
    fn get_species_by_name(&self, name: &str) -> Result<Option<SpeciesData>>;
    /// Gets a move by display name or identifier.
    fn get_move_by_name(&self, name: &str) -> Result<Option<MoveData>>;
}
