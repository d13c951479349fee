//! Liveness endpoint
//!
//! Answers without touching storage, so a down database still reports the
//! process as alive.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Body of `GET /health`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Liveness {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl Liveness {
    fn current() -> Self {
        Self {
            status: "ok",
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

async fn liveness() -> Json<Liveness> {
    Json(Liveness::current())
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(liveness))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::db::memory::MemoryStore;
    use crate::http::server::{build_router, AppState};

    #[tokio::test]
    async fn reports_alive_while_storage_is_down() {
        let store = Arc::new(MemoryStore::default());
        store.fail();
        let app = build_router(AppState::new(store.clone()));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "favstore-server");
        assert_eq!(store.calls(), 0);
    }
}
