//! Router-level tests for the Nova API
//!
//! Exercise the full axum stack (routing, extraction, content negotiation,
//! error mapping) against the static catalog.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, HeaderValue, Request, StatusCode};
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::build_router;
    use crate::test_utils::{
        test_state, DAILY_TRANSCRIPT, PLANNING_TRANSCRIPT, RETRO_TRANSCRIPT, SPORTS_TRANSCRIPT,
    };

    fn server() -> TestServer {
        let app = build_router(test_state(), false).unwrap();
        TestServer::new(app).unwrap()
    }

    fn json_accept() -> HeaderValue {
        HeaderValue::from_static("application/json")
    }

    #[tokio::test]
    async fn context_endpoint_flags_sports_talk() {
        let response = server()
            .post("/analyze/context")
            .add_header(header::ACCEPT, json_accept())
            .json(&json!({ "text": SPORTS_TRANSCRIPT }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["is_out_of_context"], true);
        assert_eq!(body["theme"], "Sport");
        assert_eq!(body["confidence"], 99);
    }

    #[tokio::test]
    async fn workshop_endpoint_classifies_each_scenario() {
        let server = server();
        for (text, expected) in [
            (DAILY_TRANSCRIPT, "Daily Scrum"),
            (PLANNING_TRANSCRIPT, "Sprint Planning"),
            (RETRO_TRANSCRIPT, "Retrospective"),
        ] {
            let response = server
                .post("/analyze/workshop")
                .add_header(header::ACCEPT, json_accept())
                .json(&json!({ "text": text }))
                .await;

            response.assert_status_ok();
            let body: Value = response.json();
            assert_eq!(body["type"], expected);
            assert_eq!(body["all_scores"].as_array().unwrap().len(), 6);
        }
    }

    #[tokio::test]
    async fn analyze_returns_json_analysis() {
        let response = server()
            .post("/analyze")
            .add_header(header::ACCEPT, json_accept())
            .json(&json!({ "text": DAILY_TRANSCRIPT }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["context"]["is_out_of_context"], false);
        assert_eq!(body["workshop"]["type"], "Daily Scrum");
        assert!(!body["anti_patterns"].as_array().unwrap().is_empty());
        assert!(body["anonymized_text"]
            .as_str()
            .unwrap()
            .starts_with("Participant 1:"));
        assert!(body["id"].is_string());
    }

    #[tokio::test]
    async fn analyze_defaults_to_plain_text() {
        let response = server()
            .post("/analyze")
            .json(&json!({ "text": DAILY_TRANSCRIPT }))
            .await;

        response.assert_status_ok();
        let content_type = response.header(header::CONTENT_TYPE);
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));
        let text = response.text();
        assert!(text.starts_with("# Analyse "));
        assert!(text.contains("Daily Scrum"));
    }

    #[tokio::test]
    async fn missing_or_null_text_is_insufficient_evidence() {
        let server = server();
        for body in [json!({}), json!({ "text": null })] {
            let response = server
                .post("/analyze")
                .add_header(header::ACCEPT, json_accept())
                .json(&body)
                .await;

            response.assert_status_ok();
            let body: Value = response.json();
            assert_eq!(body["context"]["reason"], "text too short");
            assert_eq!(body["workshop"]["type"], "Autre");
            assert_eq!(body["workshop"]["confidence"], 0);
        }
    }

    #[tokio::test]
    async fn oversized_transcript_is_rejected() {
        let response = server()
            .post("/analyze/workshop")
            .add_header(header::ACCEPT, json_accept())
            .json(&json!({ "text": "a".repeat(2_001) }))
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        let body: Value = response.json();
        assert_eq!(body["error"], "Transcript too large");
    }

    #[tokio::test]
    async fn ceremonies_lists_every_label() {
        let response = server()
            .get("/ceremonies")
            .add_header(header::ACCEPT, json_accept())
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let ceremonies = body.as_array().unwrap();
        assert_eq!(ceremonies.len(), 7);
        assert_eq!(ceremonies[0]["label"], "Daily Scrum");
        assert_eq!(ceremonies[6]["id"], "none");
    }

    #[tokio::test]
    async fn anti_patterns_accepts_encoded_label_and_id() {
        let server = server();
        for path in ["/anti-patterns/Sprint%20Review", "/anti-patterns/sprint_review"] {
            let response = server
                .get(path)
                .add_header(header::ACCEPT, json_accept())
                .await;

            response.assert_status_ok();
            let body: Value = response.json();
            assert!(body
                .as_array()
                .unwrap()
                .iter()
                .any(|a| a["name"] == "Démo sans parties prenantes"));
        }
    }

    #[tokio::test]
    async fn anti_patterns_plain_text() {
        let response = server().get("/anti-patterns/retro").await;

        response.assert_status_ok();
        assert!(response.text().contains("# Anti-patterns: Retrospective"));
    }

    #[tokio::test]
    async fn unknown_ceremony_is_bad_request() {
        let response = server().get("/anti-patterns/hackathon").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Parse error");
        assert_eq!(body["details"], "Unknown ceremony: hackathon");
    }

    #[tokio::test]
    async fn health_via_oneshot() {
        let app = build_router(test_state(), false).unwrap();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }
}
