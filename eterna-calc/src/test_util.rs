use std::path::PathBuf;

use eterna_data::{
    DataStoreByName,
    LocalDataStore,
    SpeciesData,
};

/// A [`LocalDataStore`] over the sample data directory at the root of the workspace.
pub fn local_data_store() -> LocalDataStore {
    LocalDataStore::new(
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("data")
            .to_string_lossy()
            .to_string(),
    )
    .unwrap()
}

/// Species data from the sample data directory.
#[track_caller]
pub fn species(name: &str) -> SpeciesData {
    local_data_store()
        .get_species_by_name(name)
        .unwrap()
        .unwrap()
}
