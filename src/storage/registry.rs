//! Per-vendor store provisioning and the store registry.
//!
//! Each vendor gets one SQLite file under the data directory, named by its
//! slug. The registry opens (creating if absent) every store at startup,
//! ensures the single-table schema exists, seeds empty stores, and holds the
//! pools for the life of the process. It is built once by the composition
//! root and handed to the query service through axum state; there is no
//! global connection map.

use crate::domain::vendor::{VendorCatalog, VendorSpec};
use crate::seed;
use anyhow::Context;
use chrono::Local;
use rand::Rng;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

const CREATE_INCIDENTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS incidents (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    incident_date TEXT,
    lat REAL,
    lng REAL,
    data TEXT
)";

/// Holds one open pool per vendor for the process lifetime.
pub struct StoreRegistry {
    pools: HashMap<&'static str, SqlitePool>,
}

impl StoreRegistry {
    /// Opens, migrates, and (if empty) seeds every vendor store.
    ///
    /// Any open/schema/count failure here is startup-fatal and propagated;
    /// individual seed-insert failures are not (see [`seed::seed_store`]).
    /// Seeding only happens when a store has no rows at all, so restarting
    /// against seeded stores changes nothing, and a partially-seeded store is
    /// never topped up.
    pub async fn provision(data_dir: &Path, rng: &mut impl Rng) -> anyhow::Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("creating data directory {}", data_dir.display()))?;

        let today = Local::now().date_naive();
        let mut pools = HashMap::new();
        for spec in VendorCatalog::all() {
            let pool = provision_store(data_dir, spec, today, rng).await?;
            pools.insert(spec.id, pool);
        }
        Ok(StoreRegistry { pools })
    }

    /// Returns the pool for a vendor slug, or None if the slug is unknown.
    pub fn get(&self, vendor_id: &str) -> Option<&SqlitePool> {
        self.pools.get(vendor_id)
    }

    /// Pings every vendor store; true only if all respond.
    pub async fn is_healthy(&self) -> bool {
        for pool in self.pools.values() {
            if sqlx::query("SELECT 1").execute(pool).await.is_err() {
                return false;
            }
        }
        true
    }

    /// Closes all pools. Called once at shutdown.
    pub async fn close_all(&self) {
        for (vendor_id, pool) in &self.pools {
            pool.close().await;
            info!(vendor = vendor_id, "closed store");
        }
    }
}

async fn provision_store(
    data_dir: &Path,
    spec: &VendorSpec,
    today: chrono::NaiveDate,
    rng: &mut impl Rng,
) -> anyhow::Result<SqlitePool> {
    let db_path = data_dir.join(format!("{}.db", spec.id));

    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .with_context(|| format!("opening store for {}", spec.id))?;

    sqlx::query(CREATE_INCIDENTS_TABLE)
        .execute(&pool)
        .await
        .with_context(|| format!("creating incidents table for {}", spec.id))?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM incidents")
        .fetch_one(&pool)
        .await
        .with_context(|| format!("counting rows for {}", spec.id))?;

    if count == 0 {
        info!(vendor = spec.id, records = spec.seed_count, "seeding empty store");
        let inserted = seed::seed_store(&pool, spec, today, rng).await;
        info!(vendor = spec.id, inserted, "seeding complete");
    }

    Ok(pool)
}
