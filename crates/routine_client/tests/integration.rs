use routine_client::http_client::ReqwestRoutineClient;
use routine_client::{RoutineApiError, RoutineClient};
use secrecy::SecretString;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestRoutineClient {
    ReqwestRoutineClient::new(&server.uri(), SecretString::new("tok".into()))
}

#[tokio::test]
async fn list_routines_passes_bearer_token_and_parses() {
    let server = MockServer::start().await;
    let body = serde_json::json!([
        {
            "_id": "r1",
            "name": "Squat",
            "category": "c1",
            "tags": ["t1"],
            "sets": 3,
            "reps": 10,
            "weights": 100,
            "notes": "",
            "dateTime": "2024-01-01T10:00:00Z"
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/r/"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let routines = client_for(&server).list_routines().await.expect("routines");
    assert_eq!(routines.len(), 1);
    assert_eq!(routines[0].name, "Squat");
    assert_eq!(routines[0].tag_ids, vec!["t1"]);

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
}

#[tokio::test]
async fn categories_and_tags_endpoints_parse() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"_id": "c1", "name": "Legs"}])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/t/tag"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"_id": "t1", "name": "Strength"},
            {"_id": "t2", "name": "Cardio"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let categories = client.list_categories().await.expect("categories");
    assert_eq!(categories[0].name, "Legs");
    let tags = client.list_tags().await.expect("tags");
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[1].id, "t2");
}

#[tokio::test]
async fn delete_routine_hits_id_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/r/r42"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .delete_routine("r42")
        .await
        .expect("delete");
}

#[tokio::test]
async fn delete_routine_encodes_id_as_single_segment() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    client_for(&server)
        .delete_routine("a/../../api/categories")
        .await
        .expect("delete");

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.path(), "/r/a%2F..%2F..%2Fapi%2Fcategories");
}

#[tokio::test]
async fn delete_routine_keeps_base_url_path_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/r/r7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/v1/", server.uri());
    let client = ReqwestRoutineClient::new(&base, SecretString::new("tok".into()));
    client.delete_routine("r7").await.expect("delete");
}

#[tokio::test]
async fn delete_routine_rejects_dot_segments() {
    let server = MockServer::start().await;
    for id in [".", ".."] {
        let res = client_for(&server).delete_routine(id).await;
        assert!(matches!(res, Err(RoutineApiError::InvalidInput(_))), "id {id}");
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_routine_rejects_empty_id_without_request() {
    let server = MockServer::start().await;
    let res = client_for(&server).delete_routine("  ").await;
    assert!(matches!(res, Err(RoutineApiError::InvalidInput(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unauthorized_maps_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_routines().await.unwrap_err();
    match err {
        RoutineApiError::Auth(body) => assert_eq!(body, "invalid token"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn missing_routine_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/r/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Routine not found"))
        .mount(&server)
        .await;

    let err = client_for(&server).delete_routine("gone").await.unwrap_err();
    assert!(matches!(err, RoutineApiError::NotFound(_)));
}

#[tokio::test]
async fn server_error_body_is_truncated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/t/tag"))
        .respond_with(ResponseTemplate::new(500).set_body_string("x".repeat(1000)))
        .mount(&server)
        .await;

    let err = client_for(&server).list_tags().await.unwrap_err();
    match err {
        RoutineApiError::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body.len(), 256);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_categories().await.unwrap_err();
    assert!(matches!(err, RoutineApiError::Http(_)));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_trimmed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let base = format!("{}/", server.uri());
    let client = ReqwestRoutineClient::new(&base, SecretString::new("tok".into()));
    assert!(client.list_categories().await.expect("categories").is_empty());
}
