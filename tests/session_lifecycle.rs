//! Integration tests for the persisted session lifecycle

use std::{fs, sync::Arc};

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jiff::Timestamp;
use reqwest::StatusCode;
use serde_json::json;
use tempfile::TempDir;
use testresult::TestResult;

use shoplite::{
    config::ClientConfig,
    context::ClientContext,
    gateway::{GatewayError, LOGIN_PATH, MockNavigator, MockTransport, TransportResponse},
    session::{Console, FileStorage, Role, SessionState, UserId},
    token,
};

fn token_expiring_in(seconds: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let exp = Timestamp::now().as_second() + seconds;
    let claims = URL_SAFE_NO_PAD.encode(format!(
        r#"{{"sub":"kim@example.com","role":"CUSTOMER","exp":{exp}}}"#
    ));

    format!("{header}.{claims}.c2lnbmF0dXJl")
}

fn respond(status: StatusCode, body: &serde_json::Value) -> TransportResponse {
    TransportResponse {
        status,
        body: body.to_string().into_bytes(),
    }
}

fn context(
    dir: &TempDir,
    console: Console,
    transport: MockTransport,
    navigator: MockNavigator,
) -> ClientContext {
    ClientContext::with_transport(
        &ClientConfig::default(),
        console,
        Arc::new(FileStorage::new(dir.path())),
        Arc::new(transport),
        Arc::new(navigator),
    )
}

#[tokio::test]
async fn login_survives_restart() -> TestResult {
    let dir = TempDir::new()?;
    let token = token_expiring_in(3_600);
    let body = json!({
        "token": token,
        "type": "Bearer",
        "id": 7,
        "username": "kim",
        "email": "kim@example.com",
        "role": "CUSTOMER",
    });

    let mut transport = MockTransport::new();

    transport
        .expect_execute()
        .once()
        .return_once(move |_| Ok(respond(StatusCode::OK, &body)));

    let first = context(&dir, Console::Storefront, transport, MockNavigator::new());

    first.auth.login("kim@example.com", "hunter2").await?;

    assert!(dir.path().join("user.json").exists());

    let restarted = context(
        &dir,
        Console::Storefront,
        MockTransport::new(),
        MockNavigator::new(),
    );

    let session = restarted.sessions().current().ok_or("session should persist")?;

    assert_eq!(session.username, "kim");
    assert_eq!(session.role, Role::Customer);
    assert!(!token::is_expired(session.token.expose()));
    assert_eq!(restarted.sessions().state(), SessionState::Authenticated);

    Ok(())
}

#[tokio::test]
async fn expired_session_on_disk_is_evicted_on_read() -> TestResult {
    let dir = TempDir::new()?;
    let token = token_expiring_in(-60);

    fs::write(
        dir.path().join("user.json"),
        json!({
            "id": 7,
            "username": "kim",
            "email": "kim@example.com",
            "role": "CUSTOMER",
            "token": token,
        })
        .to_string(),
    )?;

    let ctx = context(
        &dir,
        Console::Storefront,
        MockTransport::new(),
        MockNavigator::new(),
    );

    assert!(!ctx.auth.is_logged_in());
    assert!(!dir.path().join("user.json").exists());

    Ok(())
}

#[tokio::test]
async fn corrupt_session_file_is_evicted_on_read() -> TestResult {
    let dir = TempDir::new()?;

    fs::write(dir.path().join("admin.json"), "{not json")?;

    let ctx = context(&dir, Console::Admin, MockTransport::new(), MockNavigator::new());

    assert_eq!(ctx.sessions().current(), None);
    assert!(!dir.path().join("admin.json").exists());

    Ok(())
}

#[tokio::test]
async fn rejected_token_removes_session_file_and_redirects() -> TestResult {
    let dir = TempDir::new()?;
    let token = token_expiring_in(3_600);

    fs::write(
        dir.path().join("user.json"),
        json!({ "id": 7, "role": "CUSTOMER", "token": token }).to_string(),
    )?;

    let mut transport = MockTransport::new();

    transport
        .expect_execute()
        .once()
        .return_once(|_| Ok(respond(StatusCode::UNAUTHORIZED, &json!({}))));

    let mut navigator = MockNavigator::new();

    navigator
        .expect_navigate()
        .once()
        .withf(|path| path == LOGIN_PATH)
        .return_const(());

    let ctx = context(&dir, Console::Storefront, transport, navigator);

    let result = ctx.orders.user_orders(&UserId::from(7)).await;

    assert!(result.as_ref().is_err_and(|error| error.is_unauthorized()));
    assert!(!dir.path().join("user.json").exists());
    assert_eq!(ctx.sessions().state(), SessionState::Anonymous);

    Ok(())
}

#[tokio::test]
async fn consoles_keep_separate_files() -> TestResult {
    let dir = TempDir::new()?;
    let token = token_expiring_in(3_600);
    let body = json!({ "token": token, "id": 1, "username": "root", "role": "ADMIN" });

    let mut transport = MockTransport::new();

    transport
        .expect_execute()
        .once()
        .return_once(move |_| Ok(respond(StatusCode::OK, &body)));

    let admin = context(&dir, Console::Admin, transport, MockNavigator::new());

    admin.auth.login("root@example.com", "hunter2").await?;

    let storefront = context(
        &dir,
        Console::Storefront,
        MockTransport::new(),
        MockNavigator::new(),
    );

    assert!(admin.auth.is_admin());
    assert!(!storefront.auth.is_logged_in());

    storefront.auth.logout()?;

    assert!(admin.auth.is_logged_in());

    Ok(())
}

#[tokio::test]
async fn server_error_keeps_session_file() -> TestResult {
    let dir = TempDir::new()?;
    let token = token_expiring_in(3_600);

    fs::write(
        dir.path().join("user.json"),
        json!({ "id": 7, "role": "CUSTOMER", "token": token }).to_string(),
    )?;

    let mut transport = MockTransport::new();

    transport.expect_execute().once().return_once(|_| {
        Ok(respond(
            StatusCode::INTERNAL_SERVER_ERROR,
            &json!({ "message": "boom" }),
        ))
    });

    let mut navigator = MockNavigator::new();

    navigator.expect_navigate().never();

    let ctx = context(&dir, Console::Storefront, transport, navigator);

    let error = ctx
        .cart
        .cart_items(&UserId::from(7))
        .await
        .err()
        .ok_or("expected an error")?;

    assert!(matches!(
        error,
        shoplite::domain::ServiceError::Gateway(GatewayError::Status { .. })
    ));
    assert_eq!(error.message(), Some("boom"));
    assert!(dir.path().join("user.json").exists());

    Ok(())
}
