use langify::{
    client::{
        AuthClient, ClientApp, ClientError, FileStore, KeyValueStore, MemoryStore, Notice, Page,
        PLAN_KEY, USER_EMAIL_KEY,
    },
    messages,
    models::plan::Plan,
};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn login_success(email: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "message": messages::LOGIN_SUCCESS,
        "user": {
            "id": 1,
            "username": "abc",
            "email": email,
            "full_name": "abc",
            "role": "user"
        }
    }))
}

#[tokio::test]
async fn test_register_sends_username_as_full_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "username": "abc",
            "email": "a@a.co",
            "password": "1234",
            "full_name": "abc"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"message": messages::REGISTER_SUCCESS})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut app = ClientApp::with_defaults(MemoryStore::new(), AuthClient::new(server.uri()));
    app.start();
    app.go_register();
    app.register(" abc ", "a@a.co ", "1234").await;

    assert_eq!(app.current_page(), Page::Login);
    assert_eq!(
        app.take_notices(),
        vec![Notice(messages::REGISTER_DONE_NOTICE.to_string())]
    );
}

#[tokio::test]
async fn test_register_failure_shows_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": messages::EMAIL_TAKEN})),
        )
        .mount(&server)
        .await;

    let mut app = ClientApp::with_defaults(MemoryStore::new(), AuthClient::new(server.uri()));
    app.go_register();
    app.register("abc", "a@a.co", "1234").await;

    assert_eq!(app.current_page(), Page::Register);
    assert_eq!(
        app.take_notices(),
        vec![Notice(messages::EMAIL_TAKEN.to_string())]
    );
}

#[tokio::test]
async fn test_register_validation_errors_are_joined() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [messages::EMAIL_INVALID, messages::PASSWORD_TOO_SHORT]
        })))
        .mount(&server)
        .await;

    let mut app = ClientApp::with_defaults(MemoryStore::new(), AuthClient::new(server.uri()));
    app.register("abc", "a@b", "123").await;

    let expected = format!("{}\n{}", messages::EMAIL_INVALID, messages::PASSWORD_TOO_SHORT);
    assert_eq!(app.take_notices(), vec![Notice(expected)]);
}

#[tokio::test]
async fn test_login_persists_identity_and_defaults_plan() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "a@a.co", "password": "1234"})))
        .respond_with(login_success("a@a.co"))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = ClientApp::with_defaults(MemoryStore::new(), AuthClient::new(server.uri()));
    app.start();
    app.login(" a@a.co ", " 1234 ").await.unwrap();

    assert_eq!(app.current_page(), Page::Main);
    assert!(app.take_notices().is_empty());
    assert_eq!(app.session().user_email().as_deref(), Some("a@a.co"));
    assert_eq!(app.session().store().get(PLAN_KEY).as_deref(), Some("basic"));
}

#[tokio::test]
async fn test_login_rejection_keeps_session_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"message": messages::ACCOUNT_INACTIVE})),
        )
        .mount(&server)
        .await;

    let mut app = ClientApp::with_defaults(MemoryStore::new(), AuthClient::new(server.uri()));
    app.start();
    app.login("a@a.co", "1234").await.unwrap();

    assert_eq!(app.current_page(), Page::Login);
    assert_eq!(
        app.take_notices(),
        vec![Notice(messages::ACCOUNT_INACTIVE.to_string())]
    );
    assert!(!app.session().is_logged_in());
}

#[tokio::test]
async fn test_login_rejection_without_message_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut app = ClientApp::with_defaults(MemoryStore::new(), AuthClient::new(server.uri()));
    app.login("a@a.co", "1234").await.unwrap();

    assert_eq!(
        app.take_notices(),
        vec![Notice(messages::LOGIN_FAILURE.to_string())]
    );
}

#[tokio::test]
async fn test_status_and_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"registered": true})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": messages::EMAIL_NOT_FOUND})),
        )
        .mount(&server)
        .await;

    let client = AuthClient::new(format!("{}/", server.uri()));
    assert!(client.status().await.unwrap());

    let err = client
        .login(&langify::services::LoginRequest {
            email: Some("x@y.z".to_string()),
            password: Some("1234".to_string()),
        })
        .await
        .unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message.as_deref(), Some(messages::EMAIL_NOT_FOUND));
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_session_file_survives_restart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(login_success("a@a.co"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let state = dir.path().join("session.json");

    {
        let store = FileStore::open(&state).unwrap();
        let mut app = ClientApp::with_defaults(store, AuthClient::new(server.uri()));
        app.start();
        assert_eq!(app.current_page(), Page::Login);
        app.login("a@a.co", "1234").await.unwrap();
        app.choose_plan(Plan::Premium).unwrap();
    }

    let store = FileStore::open(&state).unwrap();
    assert_eq!(store.get(USER_EMAIL_KEY).as_deref(), Some("a@a.co"));

    let mut app = ClientApp::with_defaults(store, AuthClient::new(server.uri()));
    app.start();
    assert_eq!(app.current_page(), Page::Main);

    app.go_dashboard();
    let sidebar_locks: Vec<_> = app
        .layout()
        .group(langify::client::AffordanceGroup::Sidebar)
        .iter()
        .map(|a| a.locked)
        .collect();
    assert_eq!(&sidebar_locks[..5], &[false, false, false, false, true]);

    app.logout().unwrap();
    let store = FileStore::open(&state).unwrap();
    assert_eq!(store.get(USER_EMAIL_KEY), None);
    assert_eq!(store.get(PLAN_KEY), None);
}
