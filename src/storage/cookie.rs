//! [`SessionStorage`] over the signed Actix cookie session.

use actix_session::Session;

use crate::storage::{SessionStorage, StorageError, StorageResult};

impl SessionStorage for Session {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.get::<String>(key).map_err(|err| StorageError::Read {
            key: key.to_string(),
            message: err.to_string(),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.insert(key, value).map_err(|err| StorageError::Write {
            key: key.to_string(),
            message: err.to_string(),
        })
    }

    fn remove_item(&self, key: &str) {
        self.remove(key);
    }
}
