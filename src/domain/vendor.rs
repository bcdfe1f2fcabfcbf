//! The static vendor catalog.
//!
//! The set of vendors is fixed at compile time: four tenants, each with its
//! own isolated store, geographic cluster, seed batch size, and payload
//! schema. Everything that varies per vendor is looked up here, so no other
//! module derives behavior from a vendor's position in a list.

use serde::Serialize;
use utoipa::ToSchema;

/// Which payload schema a vendor's incidents carry.
///
/// Each variant corresponds to exactly one generator in [`crate::seed`] and
/// one fixed key set on the wire. Shapes are never mixed across vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// `type`, `severity`, `duration_minutes`, `affected_users`
    Network,
    /// `category`, `impact`, `mitigated`, `systems_affected`
    Security,
    /// `device_type`, `model`, `fault_code`, `replaced`
    Hardware,
    /// `application`, `version`, `priority`, `resolution_time_hours`
    Software,
}

/// One entry in the static vendor catalog.
#[derive(Debug, Clone, Copy)]
pub struct VendorSpec {
    /// Stable slug, doubles as the store file stem (e.g. `vendor1` -> `vendor1.db`).
    pub id: &'static str,
    pub name: &'static str,
    /// Center of the vendor's geographic cluster; seeded coordinates jitter
    /// around this point by at most 0.05 degrees.
    pub base_lat: f64,
    pub base_lng: f64,
    /// Number of records inserted when the vendor's store is first seeded.
    pub seed_count: u32,
    pub payload: PayloadKind,
}

/// Declaration order is the order `GET /api/vendors` returns.
pub const VENDORS: [VendorSpec; 4] = [
    VendorSpec {
        id: "vendor1",
        name: "Vendor A",
        base_lat: 40.7,
        base_lng: -74.0,
        seed_count: 20,
        payload: PayloadKind::Network,
    },
    VendorSpec {
        id: "vendor2",
        name: "Vendor B",
        base_lat: 40.8,
        base_lng: -74.1,
        seed_count: 25,
        payload: PayloadKind::Security,
    },
    VendorSpec {
        id: "vendor3",
        name: "Vendor C",
        base_lat: 40.9,
        base_lng: -74.2,
        seed_count: 30,
        payload: PayloadKind::Hardware,
    },
    VendorSpec {
        id: "vendor4",
        name: "Vendor D",
        base_lat: 41.0,
        base_lng: -74.3,
        seed_count: 35,
        payload: PayloadKind::Software,
    },
];

/// Lookup over the static catalog.
pub struct VendorCatalog;

impl VendorCatalog {
    pub fn all() -> &'static [VendorSpec] {
        &VENDORS
    }

    /// Retrieves a vendor by slug. Returns None if the slug is unknown.
    pub fn get(id: &str) -> Option<&'static VendorSpec> {
        VENDORS.iter().find(|v| v.id == id)
    }
}

/// Wire representation of a vendor for `GET /api/vendors`.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct Vendor {
    pub id: String,
    pub name: String,
}

impl From<&VendorSpec> for Vendor {
    fn from(spec: &VendorSpec) -> Self {
        Vendor {
            id: spec.id.to_string(),
            name: spec.name.to_string(),
        }
    }
}
