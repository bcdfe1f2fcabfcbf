//! End-to-end API test:
//! 1) Provision stores into a scratch directory.
//! 2) Serve the real router on an ephemeral port.
//! 3) Drive every endpoint over HTTP and assert the wire contract.

use incident_dashboard::app::query_service::QueryService;
use incident_dashboard::{transport, StoreRegistry};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

async fn spawn_server(
    dir: &std::path::Path,
) -> Result<(String, Arc<StoreRegistry>), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(17);
    let registry = Arc::new(StoreRegistry::provision(dir, &mut rng).await?);
    let state = transport::http::AppState {
        query_service: Arc::new(QueryService::new(registry.clone())),
        registry: registry.clone(),
    };
    let router = transport::http::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    // Wait for the server to accept connections.
    for _ in 0..30 {
        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => break,
            Err(_) => tokio::time::sleep(tokio::time::Duration::from_millis(50)).await,
        }
    }
    Ok((format!("http://{}", addr), registry))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_api_contract() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let (base_url, registry) = spawn_server(dir.path()).await?;
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    // --- Vendor list: exactly the 4 static entries, declaration order ---
    let vendors = client
        .get(format!("{}/api/vendors", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let vendors = vendors.as_array().unwrap();
    assert_eq!(vendors.len(), 4);
    let expected = [
        ("vendor1", "Vendor A"),
        ("vendor2", "Vendor B"),
        ("vendor3", "Vendor C"),
        ("vendor4", "Vendor D"),
    ];
    for (entry, (id, name)) in vendors.iter().zip(expected) {
        assert_eq!(entry["id"], id);
        assert_eq!(entry["name"], name);
    }

    // --- Incidents: shape, nested payload, descending dates ---
    let incidents = client
        .get(format!("{}/api/vendors/vendor1/incidents", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let incidents = incidents.as_array().unwrap();
    assert_eq!(incidents.len(), 20);
    let mut prev: Option<String> = None;
    for incident in incidents {
        assert!(incident["id"].is_i64());
        assert!(incident["lat"].is_f64());
        assert!(incident["lng"].is_f64());
        // Payload is nested JSON, not a string, and carries vendor1's keys.
        let data = incident["data"].as_object().unwrap();
        for key in ["type", "severity", "duration_minutes", "affected_users"] {
            assert!(data.contains_key(key), "missing payload key {key}");
        }
        assert_eq!(data.len(), 4);

        let date = incident["incident_date"].as_str().unwrap().to_string();
        if let Some(p) = &prev {
            assert!(*p >= date, "incidents not descending by date");
        }
        prev = Some(date);
    }

    // --- By-date: ascending, counts sum to the vendor's total ---
    let counts = client
        .get(format!(
            "{}/api/vendors/vendor1/incidents/by-date",
            base_url
        ))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let counts = counts.as_array().unwrap();
    let mut sum = 0;
    let mut prev: Option<String> = None;
    for entry in counts {
        sum += entry["count"].as_i64().unwrap();
        let date = entry["incident_date"].as_str().unwrap().to_string();
        if let Some(p) = &prev {
            assert!(*p < date, "by-date not ascending");
        }
        prev = Some(date);
    }
    assert_eq!(sum, 20);

    // --- Unknown vendor: 404 with error body, on both endpoints ---
    for path in [
        "/api/vendors/nope/incidents",
        "/api/vendors/nope/incidents/by-date",
    ] {
        let resp = client.get(format!("{}{}", base_url, path)).send().await?;
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
        let body = resp.json::<serde_json::Value>().await?;
        assert_eq!(body["error"], "Vendor not found");
    }

    // --- Health: all stores reachable ---
    let resp = client.get(format!("{}/health", base_url)).send().await?;
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    registry.close_all().await;
    Ok(())
}
