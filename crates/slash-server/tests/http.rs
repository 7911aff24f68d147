//! Router-level behaviour: front-end embedding and the account API.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
};
use slash_api_models::{ProblemDetails, User};
use slash_server::config::OwnerSeed;
use slash_server::users::{InMemoryUsers, OWNER_ID, SharedUsers};
use slash_server::{ApiServer, AppMode, AppState};
use tempfile::TempDir;
use tower::ServiceExt;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const INDEX_HTML: &str = "<!doctype html><div id=\"root\"></div>";
const BUNDLE_LINE: &str = "export const shortcut = { name: 'slash', link: '/s/' };\n";

fn write_dist(root: &Path) -> std::io::Result<()> {
    fs::create_dir_all(root.join("assets"))?;
    fs::write(root.join("index.html"), INDEX_HTML)?;
    fs::write(root.join("favicon.ico"), "icon")?;
    fs::write(root.join("assets/app-3f2a.js"), "console.log('slash');")?;
    fs::write(root.join("assets/bundle-9c1d.js"), BUNDLE_LINE.repeat(64))?;
    Ok(())
}

fn test_app() -> Result<(Router, SharedUsers, TempDir), Box<dyn std::error::Error>> {
    let dist = TempDir::new()?;
    write_dist(dist.path())?;
    let users: SharedUsers = Arc::new(InMemoryUsers::with_owner(&OwnerSeed::default())?);
    let state = Arc::new(AppState::new(AppMode::Dev, Arc::clone(&users), dist.path()));
    Ok((ApiServer::new(state).into_router(), users, dist))
}

async fn body_string(response: axum::response::Response) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

#[tokio::test]
async fn client_routes_fall_back_to_index() -> TestResult {
    let (app, _users, _dist) = test_app()?;
    let response = app
        .oneshot(Request::get("/account").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await?, INDEX_HTML);
    Ok(())
}

#[tokio::test]
async fn existing_files_are_served_directly() -> TestResult {
    let (app, _users, _dist) = test_app()?;
    let response = app
        .oneshot(Request::get("/favicon.ico").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await?, "icon");
    Ok(())
}

#[tokio::test]
async fn assets_are_cached_immutably() -> TestResult {
    let (app, _users, _dist) = test_app()?;
    let response = app
        .oneshot(Request::get("/assets/app-3f2a.js").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL),
        Some(&header::HeaderValue::from_static("max-age=31536000, immutable"))
    );
    Ok(())
}

#[tokio::test]
async fn missing_assets_are_not_found_and_uncached() -> TestResult {
    let (app, _users, _dist) = test_app()?;
    let response = app
        .oneshot(Request::get("/assets/missing-0000.js").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get(header::CACHE_CONTROL).is_none());
    assert_ne!(body_string(response).await?, INDEX_HTML);
    Ok(())
}

#[tokio::test]
async fn gzip_is_negotiated() -> TestResult {
    let (app, _users, _dist) = test_app()?;
    let response = app
        .clone()
        .oneshot(
            Request::get("/assets/bundle-9c1d.js")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_ENCODING),
        Some(&header::HeaderValue::from_static("gzip"))
    );

    let plain = app
        .oneshot(Request::get("/assets/bundle-9c1d.js").body(Body::empty())?)
        .await?;
    assert!(plain.headers().get(header::CONTENT_ENCODING).is_none());
    assert_eq!(body_string(plain).await?, BUNDLE_LINE.repeat(64));
    Ok(())
}

#[tokio::test]
async fn reserved_prefixes_never_fall_back_to_index() -> TestResult {
    let (app, _users, _dist) = test_app()?;
    for path in ["/api/v1/unknown", "/s/docs"] {
        let response = app
            .clone()
            .oneshot(Request::get(path).body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
        let problem: ProblemDetails = serde_json::from_str(&body_string(response).await?)?;
        assert_eq!(problem.status, 404);
    }
    Ok(())
}

#[tokio::test]
async fn me_returns_the_owner() -> TestResult {
    let (app, _users, _dist) = test_app()?;
    let response = app
        .oneshot(Request::get("/api/v1/user/me").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let user: User = serde_json::from_str(&body_string(response).await?)?;
    assert_eq!(user.id, OWNER_ID);
    assert_eq!(user.nickname, "Admin");
    assert_eq!(user.email, "admin@example.com");
    Ok(())
}

#[tokio::test]
async fn patch_updates_profile_and_password() -> TestResult {
    let (app, users, _dist) = test_app()?;
    let request = Request::patch(format!("/api/v1/user/{OWNER_ID}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"nickname":"Steven","password":"correct horse"}"#,
        ))?;
    let response = app.oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let user: User = serde_json::from_str(&body_string(response).await?)?;
    assert_eq!(user.nickname, "Steven");
    assert_eq!(user.email, "admin@example.com");
    assert!(users.verify_password(OWNER_ID, "correct horse").await?);
    Ok(())
}

#[tokio::test]
async fn patch_rejects_invalid_and_empty_bodies() -> TestResult {
    let (app, _users, _dist) = test_app()?;
    for body in [r#"{"email":"nope"}"#, "{}"] {
        let request = Request::patch(format!("/api/v1/user/{OWNER_ID}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))?;
        let response = app.clone().oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
    }
    Ok(())
}

#[tokio::test]
async fn malformed_patch_requests_answer_problem_json() -> TestResult {
    let (app, _users, _dist) = test_app()?;
    let cases = [
        ("/api/v1/user/abc".to_string(), r#"{"nickname":"Steven"}"#),
        (format!("/api/v1/user/{OWNER_ID}"), r#"{"nickname":"#),
        (format!("/api/v1/user/{OWNER_ID}"), r#"{"nickname":7}"#),
    ];
    for (uri, body) in cases {
        let request = Request::patch(&uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))?;
        let response = app.clone().oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri} {body}");
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE),
            Some(&header::HeaderValue::from_static("application/json")),
            "{uri} {body}"
        );
        let problem: ProblemDetails = serde_json::from_str(&body_string(response).await?)?;
        assert_eq!(problem.status, 400);
        assert!(problem.detail.is_some());
    }
    Ok(())
}

#[tokio::test]
async fn patch_unknown_user_is_not_found() -> TestResult {
    let (app, _users, _dist) = test_app()?;
    let request = Request::patch("/api/v1/user/99")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"nickname":"Ghost"}"#))?;
    let response = app.oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn health_reports_mode() -> TestResult {
    let (app, _users, _dist) = test_app()?;
    let response = app
        .oneshot(Request::get("/health").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&body_string(response).await?)?;
    assert_eq!(value["status"], "ok");
    assert_eq!(value["mode"], "dev");
    Ok(())
}
