//! WordPress proxy gate integration tests
//!
//! Access policy, header scrubbing, upstream credentials, and relay
//! behavior against a mocked CMS.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;
use wiremock::{
    matchers::{any, body_bytes, header as header_matcher, method, path, query_param},
    Mock, ResponseTemplate,
};

use crate::common::{assert_unauthorized, body_bytes as read_body, request, TestApp, Upstream};

mod test_public_reads {
    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_public_get_is_forwarded_without_cookie() {
        let app = TestApp::new().await.unwrap();
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/posts"))
            .and(query_param("per_page", "5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{ "id": 1, "title": { "rendered": "Pehli khabar" } }]))
                    .insert_header("x-wp-total", "1"),
            )
            .expect(1)
            .mount(&app.upstream)
            .await;

        let response = app
            .send(request(Method::GET, "/api/wordpress/wp/v2/posts?per_page=5", None))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-wp-total"], "1");

        let received = app.upstream.received_requests().await.unwrap();
        assert!(received[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_public_item_reads_pass() {
        let app = TestApp::new().await.unwrap();
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(3)
            .mount(&app.upstream)
            .await;

        for uri in [
            "/api/wordpress/wp/v2/posts/42",
            "/api/wordpress/wp/v2/categories",
            "/api/wordpress/wp/v2/media/7",
        ] {
            let response = app.send(request(Method::GET, uri, None)).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_write_to_public_collection_needs_session() {
        let app = TestApp::new().await.unwrap();
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&app.upstream)
            .await;

        for method in [Method::POST, Method::PUT, Method::PATCH, Method::DELETE] {
            let response = app
                .send(request(method, "/api/wordpress/wp/v2/posts/42", None))
                .await;
            assert_unauthorized(response).await;
        }
    }

    #[tokio::test]
    async fn test_private_get_without_cookie_is_rejected() {
        let app = TestApp::new().await.unwrap();
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&app.upstream)
            .await;

        for uri in [
            "/api/wordpress",
            "/api/wordpress/wp/v2/users/me",
            "/api/wordpress/wp/v2/settings",
            "/api/wordpress/wp/v2/postsecret",
            "/api/wordpress/wp/v2/posts/%2e%2e/users",
            "/api/wordpress/wp/v2/posts/..\\users",
            "/api/wordpress/wp/v2/media/..%5Csettings",
        ] {
            let response = app.send(request(Method::GET, uri, None)).await;
            assert_unauthorized(response).await;
        }
    }
}

mod test_admin_requests {
    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_private_get_with_session_carries_bearer_token() {
        let app = TestApp::new().await.unwrap();
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/users/me"))
            .and(header_matcher("authorization", "Bearer wp-upstream-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
            .expect(1)
            .mount(&app.upstream)
            .await;

        let cookie = app.login().await;
        let response = app
            .send(request(Method::GET, "/api/wordpress/wp/v2/users/me", Some(&cookie)))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_basic_credentials_when_no_bearer() {
        let app = TestApp::with_upstream(Upstream::Basic).await.unwrap();
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/settings"))
            // base64("editor:abcd efgh ijkl")
            .and(header_matcher(
                "authorization",
                "Basic ZWRpdG9yOmFiY2QgZWZnaCBpamts",
            ))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&app.upstream)
            .await;

        let cookie = app.login().await;
        let response = app
            .send(request(Method::GET, "/api/wordpress/wp/v2/settings", Some(&cookie)))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test_log::test(tokio::test)]
    async fn test_missing_upstream_credentials_still_forwards() {
        let app = TestApp::with_upstream(Upstream::Anonymous).await.unwrap();
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/users"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": "rest_forbidden_context"
            })))
            .expect(1)
            .mount(&app.upstream)
            .await;

        let cookie = app.login().await;
        let response = app
            .send(request(Method::GET, "/api/wordpress/wp/v2/users", Some(&cookie)))
            .await;

        // The upstream's own rejection is relayed, not replaced
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            read_body(response).await,
            br#"{"code":"rest_forbidden_context"}"#.to_vec()
        );

        let received = app.upstream.received_requests().await.unwrap();
        assert!(received[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_write_body_is_forwarded_unmodified() {
        let app = TestApp::new().await.unwrap();
        let payload = br#"{"title":"Taaza khabar","status":"draft"}"#;
        Mock::given(method("POST"))
            .and(path("/wp-json/wp/v2/posts"))
            .and(body_bytes(payload.to_vec()))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 77 })))
            .expect(1)
            .mount(&app.upstream)
            .await;

        let cookie = app.login().await;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/wordpress/wp/v2/posts")
            .header(header::COOKIE, &cookie)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_vec()))
            .unwrap();

        let response = app.send(request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

mod test_header_scrubbing {
    use super::*;

    #[tokio::test]
    async fn test_outbound_headers_are_scrubbed() {
        let app = TestApp::new().await.unwrap();
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&app.upstream)
            .await;

        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/wordpress/wp/v2/posts")
            .header(header::COOKIE, "admin_session=bogus.value; other=1")
            .header(header::AUTHORIZATION, "Bearer caller-supplied")
            .header(header::ACCEPT, "application/json")
            .header("x-request-id", "khabar-123")
            .body(Body::empty())
            .unwrap();

        let response = app.send(request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let received = app.upstream.received_requests().await.unwrap();
        let headers = &received[0].headers;
        assert!(headers.get("cookie").is_none());
        assert!(headers.get("authorization").is_none());
        assert_eq!(headers["accept"], "application/json");
        assert_eq!(headers["x-request-id"], "khabar-123");
    }

    #[tokio::test]
    async fn test_response_headers_are_scrubbed() {
        let app = TestApp::new().await.unwrap();
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("[]", "application/json")
                    .insert_header("set-cookie", "wordpress_logged_in=secret")
                    .insert_header("x-wp-totalpages", "3"),
            )
            .mount(&app.upstream)
            .await;

        let response = app
            .send(request(Method::GET, "/api/wordpress/wp/v2/categories", None))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert!(headers.get(header::SET_COOKIE).is_none());
        assert!(headers.get(header::CONTENT_ENCODING).is_none());
        assert!(headers.get(header::CONTENT_LENGTH).is_none());
        assert_eq!(headers["x-wp-totalpages"], "3");
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        assert_eq!(read_body(response).await, b"[]".to_vec());
    }
}

mod test_upstream_failures {
    use super::*;

    #[tokio::test]
    async fn test_upstream_errors_are_relayed_faithfully() {
        let app = TestApp::new().await.unwrap();
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&app.upstream)
            .await;

        let response = app
            .send(request(Method::GET, "/api/wordpress/wp/v2/media", None))
            .await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(read_body(response).await, b"maintenance".to_vec());
    }
}
