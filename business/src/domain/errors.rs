/// Storage errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.read")]
    Read,
    #[error("storage.write")]
    Write,
    #[error("storage.connection")]
    Connection,
    #[error("storage.migration")]
    Migration,
}

impl StorageError {
    pub fn read() -> Self {
        StorageError::Read
    }
    pub fn write() -> Self {
        StorageError::Write
    }
    pub fn connection() -> Self {
        StorageError::Connection
    }
    pub fn migration() -> Self {
        StorageError::Migration
    }
}
