use crate::models::Hotel;
use serde_json::Value;

/// Common trait for all hotel suppliers
/// Each supplier is a pure mapping from its own record shape to [`Hotel`];
/// adding a supplier means adding one implementation, nothing else changes
pub trait Supplier: Send + Sync {
    /// Get the name of the supplier
    fn identify(&self) -> &'static str;

    /// Endpoint the transport fetches this supplier's records from
    fn endpoint(&self) -> &str;

    /// Map one raw record to the canonical shape. Never fails; unreadable
    /// fields fall back to their defaults.
    fn normalize(&self, raw: Value) -> Hotel;
}
