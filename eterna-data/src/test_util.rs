use std::{
    fmt::Debug,
    path::PathBuf,
};

use serde::{
    Serialize,
    de::DeserializeOwned,
};

use crate::LocalDataStore;

/// Asserts that the value serializes to the given JSON.
#[track_caller]
pub fn test_serialization<T, S>(value: T, expected: S)
where
    T: Serialize,
    S: ToString,
{
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        expected.to_string()
    );
}

/// Asserts that the JSON deserializes to the given value.
#[track_caller]
pub fn test_deserialization<T>(json: &str, expected: T)
where
    T: DeserializeOwned + PartialEq + Debug,
{
    assert_eq!(serde_json::from_str::<T>(json).unwrap(), expected);
}

/// Asserts that the value serializes to the given JSON string.
#[track_caller]
pub fn test_string_serialization<T>(value: T, expected: &str)
where
    T: Serialize,
{
    test_serialization(value, format!("\"{expected}\""));
}

/// Asserts that the string deserializes to the given value.
#[track_caller]
pub fn test_string_deserialization<T>(s: &str, expected: T)
where
    T: DeserializeOwned + PartialEq + Debug,
{
    test_deserialization(&format!("\"{s}\""), expected);
}

/// The sample data directory at the root of the workspace.
pub fn data_dir() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .to_string_lossy()
        .to_string()
}

/// A [`LocalDataStore`] over the sample data directory.
pub fn local_data_store() -> LocalDataStore {
    LocalDataStore::new(data_dir()).unwrap()
}
