use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tci::inventory::results::{result_router, AssessmentService, ResultRepository};
use tci::inventory::{Item, ItemCatalog};

/// Items shown per questionnaire page in the reference UI. The engine is
/// pagination-agnostic; this constant exists only for item delivery.
pub(crate) const PAGE_SIZE: usize = 10;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ItemsQuery {
    pub(crate) page: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemView {
    pub(crate) id: u16,
    pub(crate) text: &'static str,
    pub(crate) page: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemsResponse {
    pub(crate) page_size: usize,
    pub(crate) page_count: usize,
    pub(crate) items: Vec<ItemView>,
}

pub(crate) fn with_inventory_routes<R>(service: Arc<AssessmentService<R>>) -> axum::Router
where
    R: ResultRepository + 'static,
{
    result_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/items", axum::routing::get(items_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn items_endpoint(
    Extension(catalog): Extension<Arc<ItemCatalog>>,
    Query(query): Query<ItemsQuery>,
) -> impl IntoResponse {
    let items = catalog.items();
    let page_count = items.len().div_ceil(PAGE_SIZE);

    let selected: Vec<ItemView> = match query.page {
        Some(page) => {
            if page == 0 || page > page_count {
                let payload = json!({ "error": format!("page must be in 1..={page_count}") });
                return (StatusCode::NOT_FOUND, Json(payload)).into_response();
            }
            items
                .iter()
                .skip((page - 1) * PAGE_SIZE)
                .take(PAGE_SIZE)
                .map(item_view)
                .collect()
        }
        None => items.iter().map(item_view).collect(),
    };

    let body = ItemsResponse {
        page_size: PAGE_SIZE,
        page_count,
        items: selected,
    };
    (StatusCode::OK, Json(body)).into_response()
}

fn item_view(item: &Item) -> ItemView {
    ItemView {
        id: item.id,
        text: item.text,
        page: (item.id as usize - 1) / PAGE_SIZE + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryResultRepository;
    use axum::body::Body;
    use axum::http::Request;
    use tci::config::SharingConfig;
    use tci::inventory::ScoringEngine;
    use tower::util::ServiceExt;

    fn service() -> Arc<AssessmentService<InMemoryResultRepository>> {
        let catalog = Arc::new(ItemCatalog::standard());
        Arc::new(AssessmentService::new(
            ScoringEngine::new(catalog),
            Arc::new(InMemoryResultRepository::default()),
            SharingConfig {
                public_base_url: None,
                default_language: "ko".to_string(),
            },
        ))
    }

    fn router() -> axum::Router {
        with_inventory_routes(service()).layer(Extension(Arc::new(ItemCatalog::standard())))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn items_endpoint_pages_ten_at_a_time() {
        let response = router()
            .oneshot(
                Request::get("/api/v1/items?page=1")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["pageSize"], 10);
        assert_eq!(body["pageCount"], 14);
        assert_eq!(body["items"].as_array().expect("items array").len(), 10);
        assert_eq!(body["items"][0]["id"], 1);
        assert_eq!(body["items"][9]["page"], 1);
    }

    #[tokio::test]
    async fn items_endpoint_rejects_out_of_range_page() {
        let response = router()
            .oneshot(
                Request::get("/api/v1/items?page=15")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn items_endpoint_returns_full_catalog_without_page() {
        let response = router()
            .oneshot(
                Request::get("/api/v1/items")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let body = body_json(response).await;
        assert_eq!(body["items"].as_array().expect("items array").len(), 140);
    }

    #[tokio::test]
    async fn submit_then_fetch_roundtrips_a_result() {
        let app = router();
        let payload = json!({
            "responses": { "1": 5, "2": 2 },
            "language": "en"
        });

        let response = app
            .clone()
            .oneshot(
                Request::post("/api/v1/results")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = body_json(response).await;
        assert_eq!(created["language"], "en");
        assert_eq!(created["result"]["subdimensionScores"]["NS1"], 5);
        assert_eq!(created["result"]["subdimensionScores"]["HA1"], 4);

        let id = created["id"].as_str().expect("id string");
        assert_eq!(created["shareUrl"], format!("/results/{id}"));

        let response = app
            .oneshot(
                Request::get(format!("/api/v1/results/{id}"))
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        let fetched = body_json(response).await;
        assert_eq!(fetched["id"], created["id"]);
    }

    #[tokio::test]
    async fn null_responses_surface_the_missing_input_failure() {
        let response = router()
            .oneshot(
                Request::post("/api/v1/results")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({ "responses": null }).to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().expect("error string").contains("no response data"));
    }

    #[tokio::test]
    async fn unknown_result_id_is_not_found() {
        for path in [
            "/api/v1/results/00000000-0000-0000-0000-000000000000",
            "/api/v1/results/not-a-uuid",
        ] {
            let response = router()
                .oneshot(Request::get(path).body(Body::empty()).expect("request builds"))
                .await
                .expect("router responds");
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }
}
