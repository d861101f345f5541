use async_trait::async_trait;
use crate::application::errors::StorageError;

/// Store trait - abstraction for preference persistence
#[async_trait]
pub trait Store: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
