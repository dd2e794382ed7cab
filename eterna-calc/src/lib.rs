pub mod common;
pub mod damage;
pub mod mega;
pub mod state;
pub mod stats;
pub mod summary;

#[cfg(test)]
mod test_util;
