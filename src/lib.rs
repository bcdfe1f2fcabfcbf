pub mod app;
pub mod domain;
pub mod infra;
pub mod seed;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::query_service::{QueryError, QueryService};
pub use domain::incident::{DateCount, Incident};
pub use domain::vendor::{Vendor, VendorCatalog, VendorSpec, VENDORS};
pub use storage::registry::StoreRegistry;
