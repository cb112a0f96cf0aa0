use async_trait::async_trait;

use super::PropertyError;

/// Read access to Android-style system properties.
///
/// Implementations are best-effort: callers treat any error as "no modems".
#[async_trait]
pub trait PropertyQuery: Send + Sync {
    /// Whether the property mechanism exists on this system at all.
    fn is_available(&self) -> bool;

    /// Reads `name`, returning `default` when the property is unset.
    ///
    /// The raw value is returned as-is, including any trailing newline.
    async fn get(&self, name: &str, default: &str) -> Result<String, PropertyError>;
}
