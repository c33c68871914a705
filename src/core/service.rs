//! Service traits for external collaborators

use anyhow::Result;
use async_trait::async_trait;

/// Storage for the serialized session user
///
/// Values are opaque text; the session decides their encoding. The
/// framework is agnostic to the underlying mechanism (browser storage,
/// a file, a key-value store).
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Read the value stored under `key`
    async fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn save(&self, key: &str, value: String) -> Result<()>;

    /// Remove the value under `key`; removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}
