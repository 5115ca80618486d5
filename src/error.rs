use thiserror::Error;

/// Failures while fetching a supplier's hotel list
#[derive(Debug, Error)]
pub enum SupplierError {
    #[error("HTTP error from {supplier} ({url}): {source}")]
    Http {
        supplier: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {supplier} ({url})")]
    UnexpectedStatus {
        supplier: String,
        status: u16,
        url: String,
    },

    #[error("malformed JSON body from {supplier} ({url}): {source}")]
    Decode {
        supplier: String,
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a JSON array of hotels from {supplier} ({url})")]
    NotAnArray { supplier: String, url: String },
}

impl SupplierError {
    /// Name of the supplier the failure came from
    pub fn supplier(&self) -> &str {
        match self {
            SupplierError::Http { supplier, .. }
            | SupplierError::UnexpectedStatus { supplier, .. }
            | SupplierError::Decode { supplier, .. }
            | SupplierError::NotAnArray { supplier, .. } => supplier,
        }
    }
}
