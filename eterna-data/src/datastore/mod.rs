mod data_store;
mod forms;
mod local;

pub use data_store::{
    DataStore,
    DataStoreByName,
};
pub use forms::forms_by_species;
pub use local::LocalDataStore;
