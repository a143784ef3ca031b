//! Admin session endpoint integration tests
//!
//! Login, logout, and session introspection through the composed router.

use std::time::Duration;

use axum::http::{header, Method, StatusCode};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use khabar_auth::{create_token, AdminPrincipal, ADMIN_ID};
use serde_json::json;

use crate::common::{
    assert_unauthorized, body_json, cookie_pair, json_request, request, TestApp, ADMIN_EMAIL,
    ADMIN_PASSWORD, SESSION_SECRET,
};

fn principal() -> AdminPrincipal {
    AdminPrincipal {
        id: ADMIN_ID.to_string(),
        email: ADMIN_EMAIL.to_string(),
        name: "Sampadak".to_string(),
        role: "admin".to_string(),
    }
}

mod test_login {
    use super::*;

    #[tokio::test]
    async fn test_login_issues_http_only_session_cookie() {
        let app = TestApp::new().await.unwrap();
        let body = json!({
            "email": ADMIN_EMAIL.to_uppercase(),
            "password": format!(" {} ", ADMIN_PASSWORD),
        });

        let response = app
            .send(json_request(Method::POST, "/api/admin/login", &body))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.starts_with("admin_session="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("SameSite=Lax"));
        assert!(set_cookie.contains("Path=/"));
        assert!(set_cookie.contains("Max-Age=86400"));

        let principal = body_json(response).await;
        assert_eq!(principal["id"], "admin");
        assert_eq!(principal["email"], ADMIN_EMAIL);
        assert!(principal.get("password").is_none());
    }

    #[tokio::test]
    async fn test_wrong_email_and_wrong_password_look_the_same() {
        let app = TestApp::new().await.unwrap();

        for body in [
            json!({ "email": "someone@khabar.test", "password": ADMIN_PASSWORD }),
            json!({ "email": ADMIN_EMAIL, "password": "not-the-password" }),
        ] {
            let response = app
                .send(json_request(Method::POST, "/api/admin/login", &body))
                .await;

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert!(response.headers().get(header::SET_COOKIE).is_none());
            assert_eq!(
                body_json(response).await,
                json!({ "error": "Invalid credentials" })
            );
        }
    }

    #[tokio::test]
    async fn test_missing_fields_are_bad_request() {
        let app = TestApp::new().await.unwrap();
        let response = app
            .send(json_request(
                Method::POST,
                "/api/admin/login",
                &json!({ "email": ADMIN_EMAIL }),
            ))
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

mod test_session_cookie {
    use super::*;

    #[tokio::test]
    async fn test_session_endpoint_returns_payload() {
        let app = TestApp::new().await.unwrap();
        let cookie = app.login().await;

        let response = app
            .send(request(Method::GET, "/api/admin/session", Some(&cookie)))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let session = body_json(response).await;
        assert_eq!(session["id"], "admin");
        assert_eq!(session["role"], "admin");
        assert!(session["exp"].is_i64());
    }

    #[tokio::test]
    async fn test_tampered_payload_is_rejected() {
        let app = TestApp::new().await.unwrap();
        let cookie = app.login().await;

        let value = cookie.trim_start_matches("admin_session=");
        let (_, signature) = value.split_once('.').unwrap();
        let forged_payload = URL_SAFE_NO_PAD.encode(
            json!({
                "id": "admin",
                "email": "intruder@khabar.test",
                "name": "Intruder",
                "role": "admin",
                "exp": 4_102_444_800i64,
            })
            .to_string(),
        );
        let forged = format!("admin_session={}.{}", forged_payload, signature);

        let response = app
            .send(request(Method::GET, "/api/admin/session", Some(&forged)))
            .await;
        assert_unauthorized(response).await;
    }

    #[tokio::test]
    async fn test_token_signed_with_another_secret_is_rejected() {
        let app = TestApp::new().await.unwrap();
        let token = create_token(&principal(), "some-other-secret", 3600).unwrap();

        let response = app
            .send(request(
                Method::GET,
                "/api/admin/session",
                Some(&format!("admin_session={}", token)),
            ))
            .await;
        assert_unauthorized(response).await;
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected() {
        let app = TestApp::new().await.unwrap();
        let token = create_token(&principal(), SESSION_SECRET, 0).unwrap();
        let cookie = format!("admin_session={}", token);

        // exp == creation second; wait until the clock passes it
        tokio::time::sleep(Duration::from_millis(1100)).await;

        let response = app
            .send(request(Method::GET, "/api/admin/session", Some(&cookie)))
            .await;
        assert_unauthorized(response).await;
    }

    #[tokio::test]
    async fn test_garbage_cookie_is_rejected() {
        let app = TestApp::new().await.unwrap();

        for cookie in [
            "admin_session=",
            "admin_session=no-dot-here",
            "admin_session=.sig",
            "admin_session=payload.",
        ] {
            let response = app
                .send(request(Method::GET, "/api/admin/session", Some(cookie)))
                .await;
            assert_unauthorized(response).await;
        }
    }
}

mod test_logout {
    use super::*;

    #[tokio::test]
    async fn test_logout_without_session_still_succeeds() {
        let app = TestApp::new().await.unwrap();

        let response = app
            .send(request(Method::POST, "/api/admin/logout", None))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(cookie_pair(response.headers()), "admin_session=");
        assert_eq!(body_json(response).await, json!({ "success": true }));
    }
}
