//! Client-side key/value storage holding the persisted session.
//!
//! The portal keeps its session in the browser: behind Actix this is the
//! signed cookie session, in tests an in-memory map.

use thiserror::Error;

pub mod memory;

#[cfg(feature = "server")]
pub mod cookie;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read `{key}`: {message}")]
    Read { key: String, message: String },

    #[error("Failed to write `{key}`: {message}")]
    Write { key: String, message: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Raw string storage modelled on the browser `localStorage` API.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove_item(&self, key: &str);
}
