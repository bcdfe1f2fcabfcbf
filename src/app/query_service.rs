//! The read-only query service.
//!
//! Answers the three API operations against the per-vendor stores. Every
//! operation is a single statement; requests are stateless and independent,
//! so the service is just the registry plus the static catalog.

use crate::domain::incident::{DateCount, Incident};
use crate::domain::vendor::{Vendor, VendorCatalog};
use crate::storage::StoreRegistry;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;
use thiserror::Error;

/// Request-scoped failures. Startup-fatal errors never reach this type.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The vendor slug is not in the static catalog.
    #[error("Vendor not found")]
    UnknownVendor,
    /// The underlying read failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    /// A row came back but could not be decoded (bad column or non-JSON payload).
    #[error("Data parsing error: {0}")]
    Decode(String),
}

pub struct QueryService {
    registry: Arc<StoreRegistry>,
}

impl QueryService {
    pub fn new(registry: Arc<StoreRegistry>) -> Self {
        QueryService { registry }
    }

    /// The static vendor list, in declaration order. Cannot fail.
    pub fn list_vendors(&self) -> Vec<Vendor> {
        VendorCatalog::all().iter().map(Vendor::from).collect()
    }

    /// All incidents for a vendor, newest date first.
    ///
    /// Ties within a date keep storage order; the stored payload text is
    /// re-parsed so it nests as JSON on the wire.
    pub async fn incidents(&self, vendor_id: &str) -> Result<Vec<Incident>, QueryError> {
        let pool = self.pool_for(vendor_id)?;
        let rows =
            sqlx::query("SELECT id, incident_date, lat, lng, data FROM incidents ORDER BY incident_date DESC")
                .fetch_all(pool)
                .await?;

        let mut incidents = Vec::with_capacity(rows.len());
        for row in rows {
            let data_str: String = row
                .try_get("data")
                .map_err(|e| QueryError::Decode(e.to_string()))?;
            let data = serde_json::from_str(&data_str)
                .map_err(|e| QueryError::Decode(e.to_string()))?;
            incidents.push(Incident {
                id: row
                    .try_get("id")
                    .map_err(|e| QueryError::Decode(e.to_string()))?,
                incident_date: row
                    .try_get("incident_date")
                    .map_err(|e| QueryError::Decode(e.to_string()))?,
                lat: row
                    .try_get("lat")
                    .map_err(|e| QueryError::Decode(e.to_string()))?,
                lng: row
                    .try_get("lng")
                    .map_err(|e| QueryError::Decode(e.to_string()))?,
                data,
            });
        }
        Ok(incidents)
    }

    /// Incident counts grouped by date for a vendor, oldest date first.
    pub async fn date_counts(&self, vendor_id: &str) -> Result<Vec<DateCount>, QueryError> {
        let pool = self.pool_for(vendor_id)?;
        let rows = sqlx::query(
            "SELECT incident_date, COUNT(*) as count FROM incidents GROUP BY incident_date ORDER BY incident_date",
        )
        .fetch_all(pool)
        .await?;

        let mut counts = Vec::with_capacity(rows.len());
        for row in rows {
            counts.push(DateCount {
                incident_date: row
                    .try_get("incident_date")
                    .map_err(|e| QueryError::Decode(e.to_string()))?,
                count: row
                    .try_get("count")
                    .map_err(|e| QueryError::Decode(e.to_string()))?,
            });
        }
        Ok(counts)
    }

    fn pool_for(&self, vendor_id: &str) -> Result<&SqlitePool, QueryError> {
        self.registry.get(vendor_id).ok_or(QueryError::UnknownVendor)
    }
}
