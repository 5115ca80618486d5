pub mod config;
pub mod error;
pub mod merge;
pub mod models;
pub mod pipeline;
pub mod query;
pub mod suppliers;
pub mod transport;

pub use config::{AppConfig, FailurePolicy, SupplierEndpoints};
pub use error::SupplierError;
pub use merge::{reconcile, Catalog};
pub use models::{Hotel, Location};
pub use pipeline::build_catalog;
pub use query::{parse_id_list, HotelFilter};
pub use suppliers::{default_suppliers, Supplier};
pub use transport::{HttpTransport, Transport};
