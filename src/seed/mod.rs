//! Synthetic seed-data generation.
//!
//! Each vendor's store is filled once with a vendor-shaped batch of random
//! incidents. Generation is split from insertion: [`generate_batch`] is a pure
//! function of the catalog entry and an injected random source (so tests can
//! fix the seed and assert exact values), and [`seed_store`] performs the
//! best-effort inserts.

use crate::domain::vendor::{PayloadKind, VendorSpec};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde_json::{json, Value as JsonValue};
use sqlx::SqlitePool;
use tracing::warn;

/// One generated record, not yet inserted (the store assigns the id).
#[derive(Debug, Clone)]
pub struct SeedRecord {
    pub incident_date: String,
    pub lat: f64,
    pub lng: f64,
    pub data: JsonValue,
}

/// Generates the full seed batch for one vendor.
///
/// Dates fall within the 30 days up to and including `today`; coordinates
/// jitter around the vendor's base point by at most 0.05 degrees.
pub fn generate_batch(spec: &VendorSpec, today: NaiveDate, rng: &mut impl Rng) -> Vec<SeedRecord> {
    (0..spec.seed_count)
        .map(|_| {
            let date = today - Duration::days(rng.gen_range(0..30));
            SeedRecord {
                incident_date: date.format("%Y-%m-%d").to_string(),
                lat: spec.base_lat + rng.gen_range(-0.05..0.05),
                lng: spec.base_lng + rng.gen_range(-0.05..0.05),
                data: generate_payload(spec.payload, rng),
            }
        })
        .collect()
}

/// Generates one payload of the given shape from the random source.
///
/// Key sets are fixed per kind; values are uniform over the documented ranges.
pub fn generate_payload(kind: PayloadKind, rng: &mut impl Rng) -> JsonValue {
    match kind {
        PayloadKind::Network => {
            let incident_type = ["Outage", "Degradation", "Latency"][rng.gen_range(0..3)];
            json!({
                "type": incident_type,
                "severity": rng.gen_range(1..=5),
                "duration_minutes": rng.gen_range(5..=124),
                "affected_users": rng.gen_range(10..=1009),
            })
        }
        PayloadKind::Security => {
            let category = ["Malware", "Phishing", "Unauthorized Access"][rng.gen_range(0..3)];
            let impact = ["Low", "Medium", "High", "Critical"][rng.gen_range(0..4)];
            json!({
                "category": category,
                "impact": impact,
                "mitigated": rng.gen::<f64>() > 0.3,
                "systems_affected": rng.gen_range(1..=20),
            })
        }
        PayloadKind::Hardware => {
            let device_type = ["Server", "Router", "Switch", "Storage"][rng.gen_range(0..4)];
            json!({
                "device_type": device_type,
                "model": format!("Model-{}", rng.gen_range(0..1000)),
                "fault_code": format!("E{}", rng.gen_range(0..1000)),
                "replaced": rng.gen::<f64>() > 0.5,
            })
        }
        PayloadKind::Software => {
            let application = ["Frontend", "Backend", "Database", "API"][rng.gen_range(0..4)];
            json!({
                "application": application,
                "version": format!(
                    "{}.{}.{}",
                    rng.gen_range(0..10),
                    rng.gen_range(0..10),
                    rng.gen_range(0..10)
                ),
                "priority": rng.gen_range(1..=5),
                "resolution_time_hours": rng.gen_range(1..=72),
            })
        }
    }
}

/// Inserts a generated batch into an (expected-empty) vendor store.
///
/// Seeding is best-effort: a failed insert is logged and skipped, never
/// retried or rolled back, so a partially-seeded store is accepted. Returns
/// the number of rows actually inserted.
pub async fn seed_store(
    pool: &SqlitePool,
    spec: &VendorSpec,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> u32 {
    let mut inserted = 0;
    for record in generate_batch(spec, today, rng) {
        let result = sqlx::query(
            "INSERT INTO incidents (incident_date, lat, lng, data) VALUES (?, ?, ?, ?)",
        )
        .bind(&record.incident_date)
        .bind(record.lat)
        .bind(record.lng)
        .bind(record.data.to_string())
        .execute(pool)
        .await;

        match result {
            Ok(_) => inserted += 1,
            Err(e) => warn!(vendor = spec.id, error = %e, "skipping failed seed insert"),
        }
    }
    inserted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vendor::VENDORS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    #[test]
    fn batch_size_matches_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        for spec in &VENDORS {
            let batch = generate_batch(spec, today(), &mut rng);
            assert_eq!(batch.len(), spec.seed_count as usize);
        }
    }

    #[test]
    fn dates_fall_within_trailing_thirty_days() {
        let mut rng = StdRng::seed_from_u64(7);
        let spec = &VENDORS[0];
        let floor = today() - Duration::days(29);
        for record in generate_batch(spec, today(), &mut rng) {
            let date = NaiveDate::parse_from_str(&record.incident_date, "%Y-%m-%d").unwrap();
            assert!(date >= floor && date <= today(), "date out of window: {date}");
        }
    }

    #[test]
    fn coordinates_stay_inside_vendor_cluster() {
        let mut rng = StdRng::seed_from_u64(42);
        for spec in &VENDORS {
            // Jitter is drawn from [-0.05, 0.05), so the lower bound itself
            // is a legal draw.
            for record in generate_batch(spec, today(), &mut rng) {
                assert!((record.lat - spec.base_lat).abs() <= 0.05);
                assert!((record.lng - spec.base_lng).abs() <= 0.05);
            }
        }
    }

    #[test]
    fn payload_keys_match_vendor_schema_exactly() {
        let expected: [&[&str]; 4] = [
            &["affected_users", "duration_minutes", "severity", "type"],
            &["category", "impact", "mitigated", "systems_affected"],
            &["device_type", "fault_code", "model", "replaced"],
            &["application", "priority", "resolution_time_hours", "version"],
        ];
        let mut rng = StdRng::seed_from_u64(99);
        for (spec, keys) in VENDORS.iter().zip(expected) {
            for record in generate_batch(spec, today(), &mut rng) {
                let mut got: Vec<&str> = record
                    .data
                    .as_object()
                    .expect("payload is an object")
                    .keys()
                    .map(String::as_str)
                    .collect();
                got.sort_unstable();
                assert_eq!(got, keys, "payload shape drifted for {}", spec.id);
            }
        }
    }

    #[test]
    fn payload_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let network = generate_payload(PayloadKind::Network, &mut rng);
            let severity = network["severity"].as_i64().unwrap();
            assert!((1..=5).contains(&severity));
            let duration = network["duration_minutes"].as_i64().unwrap();
            assert!((5..=124).contains(&duration));
            let users = network["affected_users"].as_i64().unwrap();
            assert!((10..=1009).contains(&users));

            let security = generate_payload(PayloadKind::Security, &mut rng);
            let systems = security["systems_affected"].as_i64().unwrap();
            assert!((1..=20).contains(&systems));
            assert!(security["mitigated"].is_boolean());

            let software = generate_payload(PayloadKind::Software, &mut rng);
            let resolution = software["resolution_time_hours"].as_i64().unwrap();
            assert!((1..=72).contains(&resolution));
        }
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let a = generate_batch(&VENDORS[2], today(), &mut StdRng::seed_from_u64(11));
        let b = generate_batch(&VENDORS[2], today(), &mut StdRng::seed_from_u64(11));
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.incident_date, y.incident_date);
            assert_eq!(x.lat, y.lat);
            assert_eq!(x.lng, y.lng);
            assert_eq!(x.data, y.data);
        }
    }
}
