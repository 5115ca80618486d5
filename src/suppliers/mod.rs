pub mod acme;
pub mod paperflies;
pub mod patagonia;
pub mod traits;
pub mod types;

pub use acme::AcmeSupplier;
pub use paperflies::PaperfliesSupplier;
pub use patagonia::PatagoniaSupplier;
pub use traits::Supplier;

use crate::config::SupplierEndpoints;

/// The built-in suppliers in registration order. Reconciliation folds
/// contributions in this order, so earlier suppliers win first-wins fields.
pub fn default_suppliers(endpoints: &SupplierEndpoints) -> Vec<Box<dyn Supplier>> {
    vec![
        Box::new(AcmeSupplier::new(endpoints.acme.clone())),
        Box::new(PatagoniaSupplier::new(endpoints.patagonia.clone())),
        Box::new(PaperfliesSupplier::new(endpoints.paperflies.clone())),
    ]
}
