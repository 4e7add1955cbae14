pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::profiles::handlers as profiles;
use crate::recommendation::handlers as recommendations;
use crate::state::AppState;
use crate::talent::handlers as talent;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profiles
        .route("/api/v1/roles", get(profiles::handle_list_roles))
        .route(
            "/api/v1/roles/:id",
            get(profiles::handle_get_role).put(profiles::handle_put_role),
        )
        .route(
            "/api/v1/employees/:id",
            get(profiles::handle_get_employee).put(profiles::handle_put_employee),
        )
        // Recommendations
        .route(
            "/api/v1/recommendations",
            get(recommendations::handle_list).post(recommendations::handle_generate),
        )
        .route(
            "/api/v1/recommendations/preview",
            post(recommendations::handle_preview),
        )
        .route("/api/v1/recommendations/:id", get(recommendations::handle_get))
        .route(
            "/api/v1/recommendations/:id/status",
            patch(recommendations::handle_update_status),
        )
        // Talent review
        .route("/api/v1/nine-box/classify", post(talent::handle_classify))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, StorageBackend};
    use crate::recommendation::engine::testing::frozen_engine;
    use crate::store::memory::MemoryStore;

    fn test_state() -> AppState {
        let config = Config {
            storage: StorageBackend::Memory,
            database_url: None,
            db_max_connections: 1,
            port: 0,
            rust_log: "debug".to_string(),
        };
        AppState::new(config, frozen_engine(), Arc::new(MemoryStore::new()))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(json) => request.body(Body::from(json.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, value)
    }

    async fn seed(app: &Router) {
        let (status, _) = send(
            app,
            Method::PUT,
            "/api/v1/roles/ROLE-MGR",
            Some(json!({
                "id": "ROLE-MGR",
                "title": "Engineering Manager",
                "experience": 5,
                "required_skills": {
                    "Leadership": {"minimum_level": 3, "weight": 0.9, "critical": true}
                }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            app,
            Method::PUT,
            "/api/v1/employees/EMP001",
            Some(json!({"id": "EMP001", "name": "Sarah Johnson", "experience": 5, "skills": {}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "memory");
    }

    #[tokio::test]
    async fn test_generate_persist_and_review() {
        let app = build_router(test_state());
        seed(&app).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/recommendations",
            Some(json!({"employee_id": "EMP001", "target_role_id": "ROLE-MGR"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["persisted"], true);
        let rec = &body["recommendation"];
        assert_eq!(rec["timeline"], 14);
        assert_eq!(rec["status"], "pending");
        assert_eq!(rec["skill_gaps"]["Leadership"]["priority"], "high");
        assert_eq!(rec["learning_path"].as_array().unwrap().len(), 3);
        let id = rec["id"].as_str().unwrap().to_string();

        let (status, listed) = send(
            &app,
            Method::GET,
            "/api/v1/recommendations?employee_id=EMP001",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let status_uri = format!("/api/v1/recommendations/{id}/status");
        let (status, updated) = send(
            &app,
            Method::PATCH,
            &status_uri,
            Some(json!({"status": "in_progress"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["status"], "in_progress");

        let (status, body) = send(
            &app,
            Method::PATCH,
            &status_uri,
            Some(json!({"status": "rejected"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_generate_unknown_employee_is_404() {
        let app = build_router(test_state());
        seed(&app).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/recommendations",
            Some(json!({"employee_id": "EMP404", "target_role_id": "ROLE-MGR"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_met_requirements_not_persisted() {
        let app = build_router(test_state());
        seed(&app).await;
        send(
            &app,
            Method::PUT,
            "/api/v1/employees/EMP002",
            Some(json!({
                "id": "EMP002",
                "experience": 8,
                "skills": {"Leadership": {"level": 4}}
            })),
        )
        .await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/recommendations",
            Some(json!({"employee_id": "EMP002", "target_role_id": "ROLE-MGR"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["persisted"], false);
        assert_eq!(body["recommendation"]["timeline"], 0);

        let (_, listed) = send(
            &app,
            Method::GET,
            "/api/v1/recommendations?employee_id=EMP002",
            None,
        )
        .await;
        assert!(listed.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_regenerate_after_review_keeps_reviewed_status() {
        let app = build_router(test_state());
        seed(&app).await;
        let generate = json!({"employee_id": "EMP001", "target_role_id": "ROLE-MGR"});

        let (_, body) = send(&app, Method::POST, "/api/v1/recommendations", Some(generate.clone())).await;
        let id = body["recommendation"]["id"].as_str().unwrap().to_string();
        let status_uri = format!("/api/v1/recommendations/{id}/status");
        for next in ["in_progress", "implemented"] {
            let (status, _) =
                send(&app, Method::PATCH, &status_uri, Some(json!({"status": next}))).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = send(&app, Method::POST, "/api/v1/recommendations", Some(generate)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONFLICT");

        let (status, stored) =
            send(&app, Method::GET, &format!("/api/v1/recommendations/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stored["status"], "implemented");
    }

    #[tokio::test]
    async fn test_regenerate_replaces_pending_recommendation() {
        let app = build_router(test_state());
        seed(&app).await;
        let generate = json!({"employee_id": "EMP001", "target_role_id": "ROLE-MGR"});

        send(&app, Method::POST, "/api/v1/recommendations", Some(generate.clone())).await;
        send(
            &app,
            Method::PUT,
            "/api/v1/employees/EMP001",
            Some(json!({"id": "EMP001", "experience": 5, "skills": {"Leadership": {"level": 2}}})),
        )
        .await;
        let (status, body) = send(&app, Method::POST, "/api/v1/recommendations", Some(generate)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["persisted"], true);

        let (_, listed) = send(
            &app,
            Method::GET,
            "/api/v1/recommendations?employee_id=EMP001",
            None,
        )
        .await;
        let listed = listed.as_array().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["skill_gaps"]["Leadership"]["gap"], 1);
    }

    #[tokio::test]
    async fn test_meeting_requirements_discards_stale_pending() {
        let app = build_router(test_state());
        seed(&app).await;
        let generate = json!({"employee_id": "EMP001", "target_role_id": "ROLE-MGR"});

        let (_, body) = send(&app, Method::POST, "/api/v1/recommendations", Some(generate.clone())).await;
        assert_eq!(body["persisted"], true);

        send(
            &app,
            Method::PUT,
            "/api/v1/employees/EMP001",
            Some(json!({"id": "EMP001", "experience": 5, "skills": {"Leadership": {"level": 3}}})),
        )
        .await;
        let (status, body) = send(&app, Method::POST, "/api/v1/recommendations", Some(generate)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["persisted"], false);

        let (_, listed) = send(
            &app,
            Method::GET,
            "/api/v1/recommendations?employee_id=EMP001",
            None,
        )
        .await;
        assert!(listed.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_preview_rejects_negative_level() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/recommendations/preview",
            Some(json!({
                "employee": {"id": "EMP001", "experience": 2, "skills": {"SQL": {"level": -1}}},
                "role": {
                    "id": "ROLE-DA",
                    "experience": 3,
                    "required_skills": {"SQL": {"minimum_level": 3, "weight": 0.6}}
                }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_preview_missing_required_skills_is_rejected() {
        let app = build_router(test_state());
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/recommendations/preview",
            Some(json!({
                "employee": {"id": "EMP001", "experience": 2},
                "role": {"id": "ROLE-DA", "experience": 3}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_put_role_path_mismatch() {
        let app = build_router(test_state());
        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/v1/roles/ROLE-A",
            Some(json!({"id": "ROLE-B", "experience": 1, "required_skills": {}})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_nine_box_classify() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/nine-box/classify",
            Some(json!({"performance": 4.5, "potential": 4.0})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "star");
        assert_eq!(body["box_number"], 9);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/nine-box/classify",
            Some(json!({"performance": 7, "potential": 4.0})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
