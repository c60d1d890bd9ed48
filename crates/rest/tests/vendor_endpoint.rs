//! Vendor endpoint tests against a stub service.
//!
//! Covers the structural contract of the endpoint:
//! - Path and method binding for every operation
//! - Status codes (200, 201)
//! - Wire shape (`vendors` envelope, `vendor_url` key)
//! - Path ids reaching the service unchanged

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use vendor_service::{VendorDTO, VendorPatch};

use common::create_test_server;
use common::stub::{Call, StubVendorService};

fn nuts() -> VendorDTO {
    VendorDTO::stored(1, "Nuts for Nuts Company")
}

fn fruits() -> VendorDTO {
    VendorDTO::stored(2, "Exotic Fruits Company")
}

// =============================================================================
// List
// =============================================================================

mod list {
    use super::*;

    #[tokio::test]
    async fn test_list_wraps_service_result_in_envelope() {
        let stub = StubVendorService::new().returning_list(vec![nuts(), fruits()]);
        let (server, service) = create_test_server(stub);

        let response = server.get("/api/v1/vendors").await;

        response.assert_status_ok();
        let body: Value = response.json();
        let vendors = body["vendors"].as_array().unwrap();
        assert_eq!(vendors.len(), 2);
        assert_eq!(vendors[0]["name"], "Nuts for Nuts Company");
        assert_eq!(vendors[1]["vendor_url"], "/api/v1/vendors/2");
        assert_eq!(service.calls(), vec![Call::GetAll]);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (server, _service) = create_test_server(StubVendorService::new());

        let response = server.get("/api/v1/vendors").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "vendors": [] }));
    }
}

// =============================================================================
// Read
// =============================================================================

mod read {
    use super::*;

    #[tokio::test]
    async fn test_get_returns_service_dto() {
        let stub = StubVendorService::new().returning(nuts());
        let (server, service) = create_test_server(stub);

        let response = server.get("/api/v1/vendors/1").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "id": 1,
            "name": "Nuts for Nuts Company",
            "vendor_url": "/api/v1/vendors/1"
        }));
        assert_eq!(service.calls(), vec![Call::GetById(1)]);
    }

    #[tokio::test]
    async fn test_get_passes_id_unchanged() {
        let stub = StubVendorService::new().returning(nuts());
        let (server, service) = create_test_server(stub);

        server.get("/api/v1/vendors/-7").await.assert_status_ok();
        server
            .get(&format!("/api/v1/vendors/{}", i64::MAX))
            .await
            .assert_status_ok();

        assert_eq!(
            service.calls(),
            vec![Call::GetById(-7), Call::GetById(i64::MAX)]
        );
    }
}

// =============================================================================
// Create
// =============================================================================

mod create {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_201_with_service_dto() {
        let stub = StubVendorService::new().returning(nuts());
        let (server, service) = create_test_server(stub);

        let response = server
            .post("/api/v1/vendors")
            .json(&json!({ "name": "Nuts for Nuts Company" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["name"], "Nuts for Nuts Company");
        assert_eq!(body["vendor_url"], "/api/v1/vendors/1");
        assert_eq!(body["id"], 1);

        assert_eq!(
            service.calls(),
            vec![Call::Create(VendorDTO::named("Nuts for Nuts Company"))]
        );
    }

    #[tokio::test]
    async fn test_create_sets_location_header() {
        let stub = StubVendorService::new().returning(nuts());
        let (server, _service) = create_test_server(stub);

        let response = server
            .post("/api/v1/vendors")
            .json(&json!({ "name": "Nuts for Nuts Company" }))
            .await;

        assert_eq!(response.header("location"), "/api/v1/vendors/1");
    }

    #[tokio::test]
    async fn test_create_passes_full_body_to_service() {
        let stub = StubVendorService::new().returning(nuts());
        let (server, service) = create_test_server(stub);

        server
            .post("/api/v1/vendors")
            .json(&nuts())
            .await
            .assert_status(StatusCode::CREATED);

        assert_eq!(service.calls(), vec![Call::Create(nuts())]);
    }
}

// =============================================================================
// Update
// =============================================================================

mod update {
    use super::*;

    #[tokio::test]
    async fn test_put_returns_service_result() {
        let stub =
            StubVendorService::new().returning(VendorDTO::stored(1, "Exotic Fruits Company"));
        let (server, service) = create_test_server(stub);

        let response = server
            .put("/api/v1/vendors/1")
            .json(&json!({ "name": "Exotic Fruits Company" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["name"], "Exotic Fruits Company");
        assert_eq!(body["vendor_url"], "/api/v1/vendors/1");
        assert_eq!(
            service.calls(),
            vec![Call::Save(1, VendorDTO::named("Exotic Fruits Company"))]
        );
    }

    #[tokio::test]
    async fn test_put_id_and_url_come_from_service() {
        let stub = StubVendorService::new().returning(VendorDTO::stored(5, "Renamed"));
        let (server, service) = create_test_server(stub);

        let response = server
            .put("/api/v1/vendors/5")
            .json(&json!({
                "id": 99,
                "name": "Renamed",
                "vendor_url": "/elsewhere"
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["id"], 5);
        assert_eq!(body["vendor_url"], "/api/v1/vendors/5");

        // The body goes through untouched; the path id is passed alongside it
        match &service.calls()[..] {
            [Call::Save(5, dto)] => assert_eq!(dto.id, Some(99)),
            other => panic!("unexpected calls: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_put_is_repeatable() {
        let stub =
            StubVendorService::new().returning(VendorDTO::stored(1, "Exotic Fruits Company"));
        let (server, service) = create_test_server(stub);
        let body = json!({ "name": "Exotic Fruits Company" });

        let first: Value = server.put("/api/v1/vendors/1").json(&body).await.json();
        let second: Value = server.put("/api/v1/vendors/1").json(&body).await.json();

        assert_eq!(first, second);
        assert_eq!(service.calls().len(), 2);
    }
}

// =============================================================================
// Patch
// =============================================================================

mod patch {
    use super::*;

    #[tokio::test]
    async fn test_patch_returns_service_result() {
        let stub = StubVendorService::new().returning(VendorDTO {
            id: None,
            name: "Exotic Fruits Company".to_string(),
            url: Some("/api/v1/vendors/1".to_string()),
        });
        let (server, service) = create_test_server(stub);

        let response = server
            .patch("/api/v1/vendors/1")
            .json(&json!({ "name": "Exotic Fruits Company" }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "name": "Exotic Fruits Company",
            "vendor_url": "/api/v1/vendors/1"
        }));
        assert_eq!(
            service.calls(),
            vec![Call::Patch(
                1,
                VendorPatch {
                    name: Some("Exotic Fruits Company".to_string()),
                    ..Default::default()
                }
            )]
        );
    }

    #[tokio::test]
    async fn test_patch_accepts_empty_body_object() {
        let stub = StubVendorService::new().returning(nuts());
        let (server, service) = create_test_server(stub);

        let response = server.patch("/api/v1/vendors/1").json(&json!({})).await;

        response.assert_status_ok();
        assert_eq!(
            service.calls(),
            vec![Call::Patch(1, VendorPatch::default())]
        );
    }
}

// =============================================================================
// Delete
// =============================================================================

mod delete {
    use super::*;

    #[tokio::test]
    async fn test_delete_returns_200_and_calls_service_once() {
        let (server, service) = create_test_server(StubVendorService::new());

        let response = server.delete("/api/v1/vendors/1").await;

        response.assert_status_ok();
        assert!(response.text().is_empty());
        assert_eq!(service.calls(), vec![Call::Delete(1)]);
    }

    #[tokio::test]
    async fn test_delete_passes_id_unchanged() {
        let (server, service) = create_test_server(StubVendorService::new());

        server.delete("/api/v1/vendors/42").await.assert_status_ok();

        assert_eq!(service.calls(), vec![Call::Delete(42)]);
    }
}

// =============================================================================
// Routing
// =============================================================================

mod routing {
    use super::*;

    #[tokio::test]
    async fn test_unsupported_method_on_collection() {
        let (server, service) = create_test_server(StubVendorService::new());

        let response = server.delete("/api/v1/vendors").await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let (server, _service) = create_test_server(StubVendorService::new());

        server.get("/api/v1/customers").await.assert_status_not_found();
    }
}
