//! # HTTP tests for the membership listing client
//!
//! Each test serves one canned response from a `tiny_http` server on
//! `127.0.0.1:0` and points `ClerkBackend` at it. No Clerk credentials needed.

use std::thread::JoinHandle;

use gate_auth::{AuthError, ClerkBackend};

/// What the fake backend saw.
struct Seen {
    url: String,
    authorization: Option<String>,
}

/// Serve exactly one request, then stop.
fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<Option<Seen>>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind test server");
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .expect("ip listener");

    let handle = std::thread::spawn(move || {
        let request = server.recv().ok()?;
        let seen = Seen {
            url: request.url().to_string(),
            authorization: request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.as_str().to_string()),
        };
        let response = tiny_http::Response::from_string(body)
            .with_status_code(status)
            .with_header(
                tiny_http::Header::from_bytes("Content-Type", "application/json")
                    .expect("static header"),
            );
        request.respond(response).ok()?;
        Some(seen)
    });

    (format!("http://127.0.0.1:{port}/v1"), handle)
}

fn backend(base: &str) -> ClerkBackend {
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client builds");
    ClerkBackend::with_client(http, base, "sk_test_fake")
}

const ENVELOPE: &str = r#"{
  "data": [
    {
      "object": "organization_membership",
      "id": "orgmem_1",
      "role": "org:admin",
      "role_name": "Admin",
      "created_at": 1754190273226,
      "updated_at": 1754190273226,
      "organization": {
        "object": "organization",
        "id": "org_1",
        "name": "First Org",
        "slug": "first-org",
        "created_at": 1754190273000,
        "updated_at": 1754190273000,
        "members_count": 10
      }
    }
  ],
  "total_count": 1
}"#;

#[tokio::test]
async fn lists_memberships_with_bearer_auth() {
    let (base, handle) = serve_once(200, ENVELOPE);

    let memberships = backend(&base)
        .list_user_memberships("user_123", 50)
        .await
        .expect("listing succeeds");

    assert_eq!(memberships.total_count, 1);
    assert!(memberships.data[0].is_admin());
    assert_eq!(memberships.data[0].organization.members_count, 10);

    let seen = handle.join().expect("server thread").expect("request seen");
    assert_eq!(seen.url, "/v1/users/user_123/organization_memberships?limit=50");
    assert_eq!(seen.authorization.as_deref(), Some("Bearer sk_test_fake"));
}

#[tokio::test]
async fn non_success_status_is_reported_with_body() {
    let (base, handle) = serve_once(401, r#"{"errors":[{"code":"authentication_invalid"}]}"#);

    let error = backend(&base)
        .list_user_memberships("user_123", 50)
        .await
        .expect_err("401 should fail");

    match error {
        AuthError::ClerkApiStatus { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("authentication_invalid"));
        }
        other => panic!("unexpected error: {other}"),
    }
    handle.join().expect("server thread");
}

#[tokio::test]
async fn bare_array_body_is_a_decode_error_not_an_empty_list() {
    let (base, handle) = serve_once(200, "[]");

    let error = backend(&base)
        .list_user_memberships("user_123", 50)
        .await
        .expect_err("bare array should fail");

    assert!(matches!(error, AuthError::Decode(ref e) if e.is_shape()));
    handle.join().expect("server thread");
}

#[tokio::test]
async fn unreachable_backend_is_an_api_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };

    let error = backend(&format!("http://127.0.0.1:{port}/v1"))
        .list_user_memberships("user_123", 50)
        .await
        .expect_err("connection refused");

    assert!(matches!(error, AuthError::ClerkApiError(_)));
}
