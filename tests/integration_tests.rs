//! Integration tests for the WarmBridge library.
//! The live completion test requires an API key in the environment to run.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::json;
    use tower::ServiceExt;

    use warmbridge::provider::MISSING_REPLY_TEXT;
    use warmbridge::server::{AppState, BACKEND_ERROR_REPLY, router};
    use warmbridge::{
        BackendProvider, BridgeReply, Completions, Error, MockProvider, RemoteProvider,
        ReplyProvider, Result, Turn,
    };

    /// Fails every request, the way a dead upstream would.
    struct FailingProvider;

    #[async_trait::async_trait]
    impl ReplyProvider for FailingProvider {
        async fn reply(&self, _message: &str, _history: &[Turn]) -> Result<String> {
            Err(Error::internal_server("simulated outage", None))
        }
    }

    /// Succeeds with an empty reply string.
    struct EmptyReplyProvider;

    #[async_trait::async_trait]
    impl ReplyProvider for EmptyReplyProvider {
        async fn reply(&self, _message: &str, _history: &[Turn]) -> Result<String> {
            Ok(String::new())
        }
    }

    /// Replies with the length of the history it was shown.
    struct HistoryLenProvider;

    #[async_trait::async_trait]
    impl ReplyProvider for HistoryLenProvider {
        async fn reply(&self, _message: &str, history: &[Turn]) -> Result<String> {
            Ok(format!("len={}", history.len()))
        }
    }

    fn mock_app() -> axum::Router {
        router(AppState::new(Arc::new(MockProvider::new())))
    }

    fn bridge_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/warmbridge")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn reply_body(response: axum::response::Response) -> BridgeReply {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_answers_ok() {
        let response = mock_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn bridge_answers_with_mock_reply() {
        let response = mock_app()
            .oneshot(bridge_request(
                json!({ "message": "someone asked for my bank otp" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let reply = reply_body(response).await;
        assert!(reply.reply.starts_with("Step 1: Do not share your OTP"));
    }

    #[tokio::test]
    async fn bridge_forwards_history_to_the_provider() {
        let app = router(AppState::new(Arc::new(HistoryLenProvider)));

        let response = app
            .clone()
            .oneshot(bridge_request(json!({ "message": "hi" })))
            .await
            .unwrap();
        assert_eq!(reply_body(response).await.reply, "len=0");

        let response = app
            .oneshot(bridge_request(json!({
                "message": "what now",
                "history": [
                    { "role": "user", "content": "hi" },
                    { "role": "assistant", "content": "Step 1: ..." },
                ],
            })))
            .await
            .unwrap();
        assert_eq!(reply_body(response).await.reply, "len=2");
    }

    #[tokio::test]
    async fn provider_failure_answers_500_with_fixed_text() {
        let app = router(AppState::new(Arc::new(FailingProvider)));

        let response = app
            .oneshot(bridge_request(json!({ "message": "help" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply_body(response).await.reply, BACKEND_ERROR_REPLY);
    }

    #[tokio::test]
    async fn malformed_request_is_a_client_error() {
        let response = mock_app()
            .oneshot(bridge_request(json!({ "text": "wrong field" })))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let mut request = bridge_request(json!({ "message": "hello" }));
        request
            .headers_mut()
            .insert(header::ORIGIN, "http://example.com".parse().unwrap());

        let response = mock_app().oneshot(request).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*")
        );
    }

    async fn spawn_server(provider: Arc<dyn ReplyProvider>) -> String {
        let app = router(AppState::new(provider));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/api/warmbridge", addr)
    }

    #[tokio::test]
    async fn backend_provider_round_trips_through_the_server() {
        let endpoint = spawn_server(Arc::new(MockProvider::new())).await;
        let provider = BackendProvider::new(endpoint).unwrap();

        let reply = provider
            .reply("someone asked for my bank otp", &[])
            .await
            .unwrap();

        assert!(reply.starts_with("Step 1: Do not share your OTP"));
    }

    #[tokio::test]
    async fn backend_provider_surfaces_500_as_an_error() {
        let endpoint = spawn_server(Arc::new(FailingProvider)).await;
        let provider = BackendProvider::new(endpoint).unwrap();

        let err = provider.reply("help", &[]).await.unwrap_err();

        assert!(err.is_provider_failure());
        assert!(matches!(err, Error::Api { status_code: 500, .. }));
    }

    #[tokio::test]
    async fn backend_provider_substitutes_empty_replies() {
        let endpoint = spawn_server(Arc::new(EmptyReplyProvider)).await;
        let provider = BackendProvider::new(endpoint).unwrap();

        let reply = provider.reply("hello", &[]).await.unwrap();

        assert_eq!(reply, MISSING_REPLY_TEXT);
    }

    /// Answers every completion request with zero choices.
    async fn zero_choice_completions() -> axum::Json<serde_json::Value> {
        axum::Json(json!({ "choices": [] }))
    }

    async fn spawn_completion_service() -> String {
        let app = axum::Router::new().route(
            "/chat/completions",
            axum::routing::post(zero_choice_completions),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    #[tokio::test]
    async fn remote_provider_surfaces_zero_choices_as_an_error() {
        let base_url = spawn_completion_service().await;
        let client =
            Completions::with_options(Some("test-key".to_string()), Some(base_url), None).unwrap();
        let provider = RemoteProvider::new(client);

        let err = provider.reply("hello", &[]).await.unwrap_err();

        assert!(err.is_empty_completion());
        assert!(err.is_provider_failure());
    }

    #[tokio::test]
    async fn live_completion_round_trip() {
        // This test requires WARMBRIDGE_API_KEY to be set
        let api_key = std::env::var("WARMBRIDGE_API_KEY").ok();
        if api_key.is_none() {
            eprintln!("Skipping test: WARMBRIDGE_API_KEY not set");
            return;
        }

        let client = Completions::new(api_key).expect("Failed to create client");
        let provider = RemoteProvider::new(client);

        let reply = provider.reply("Say the word ready.", &[]).await;
        assert!(reply.is_ok(), "Request should succeed with valid API key");
        assert!(!reply.unwrap().is_empty());
    }
}
