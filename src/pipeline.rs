//! Fetch, normalize and reconcile hotels from every registered supplier.

use crate::config::FailurePolicy;
use crate::error::SupplierError;
use crate::merge::{reconcile, Catalog};
use crate::models::Hotel;
use crate::suppliers::Supplier;
use crate::transport::Transport;
use futures::future::join_all;
use tracing::{info, warn};

/// Build the merged catalog.
///
/// Fetches run concurrently; normalization and reconciliation run after all
/// of them finished, in supplier registration order.
///
/// # Errors
///
/// With [`FailurePolicy::Abort`], returns the first (in registration order)
/// supplier failure and no catalog. With [`FailurePolicy::Skip`], failing
/// suppliers are logged and left out, and this never errors.
pub async fn build_catalog(
    transport: &dyn Transport,
    suppliers: &[Box<dyn Supplier>],
    policy: FailurePolicy,
) -> Result<Catalog, SupplierError> {
    let fetches = suppliers
        .iter()
        .map(|supplier| transport.fetch(supplier.identify(), supplier.endpoint()));
    let payloads = join_all(fetches).await;

    let mut hotels: Vec<Hotel> = Vec::new();
    for (supplier, payload) in suppliers.iter().zip(payloads) {
        let records = match payload {
            Ok(records) => records,
            Err(err) if policy == FailurePolicy::Skip => {
                warn!("Skipping supplier {}: {}", supplier.identify(), err);
                continue;
            }
            Err(err) => return Err(err),
        };
        hotels.extend(records.into_iter().map(|raw| supplier.normalize(raw)));
    }

    let contributions = hotels.len();
    let catalog = reconcile(hotels);
    info!(
        "Reconciled {} supplier records into {} hotels",
        contributions,
        catalog.len()
    );

    Ok(catalog)
}
