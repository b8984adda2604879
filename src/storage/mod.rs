//! 本地持久化

pub mod store;

pub use store::{LocalStore, StoredState};
