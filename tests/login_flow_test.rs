//! End-to-end sign-in flow against a mock API.

use std::sync::Arc;

use storynest_auth::SessionStore;
use storynest_client::endpoints::auth::LoginRequest;
use storynest_client::{ApiClient, AuthApi};
use storynest_core::config::api::ApiConfig;
use storynest_store::FileStore;

fn client_for(server: &mockito::ServerGuard, session: Arc<SessionStore>) -> Arc<ApiClient> {
    let config = ApiConfig {
        base_url: server.url(),
        timeout_seconds: 5,
    };
    Arc::new(ApiClient::new(&config, session).unwrap())
}

#[tokio::test]
async fn test_login_persists_and_authorizes_later_requests() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "accessToken": "tok-1",
                "refreshToken": "ref-1",
                "userId": "usr-7",
                "email": "lead@storynest.test",
                "firstName": "Iris",
                "lastName": "Vann",
                "isAdmin": true
            }"#,
        )
        .create_async()
        .await;
    let order_mock = server
        .mock("GET", "/admin/orders/SN-1001")
        .match_header("authorization", "Bearer tok-1")
        .with_status(404)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let session = Arc::new(SessionStore::new(Arc::new(FileStore::open(&path).unwrap())));
    let client = client_for(&server, session.clone());

    let auth = AuthApi::new(client.clone());
    let response = auth
        .login(&LoginRequest {
            email: "lead@storynest.test".to_string(),
            password: "hunter2hunter2".to_string(),
        })
        .await
        .unwrap();
    session
        .set_auth(response.identity(), &response.access_token, &response.refresh_token)
        .unwrap();

    // A brand-new client over the persisted session sends the bearer token.
    let restored = Arc::new(SessionStore::new(Arc::new(FileStore::open(&path).unwrap())));
    restored.initialize_from_storage().unwrap();
    assert!(restored.is_authenticated());

    let client = client_for(&server, restored);
    let api = storynest_client::OrderApi::new(client);
    let err = api.get("SN-1001").await.unwrap_err();
    assert_eq!(err.kind, storynest_core::error::ErrorKind::NotFound);
    order_mock.assert_async().await;
}

#[tokio::test]
async fn test_logout_round_trip_clears_the_session() {
    let mut server = mockito::Server::new_async().await;
    let _logout = server
        .mock("POST", "/auth/logout")
        .with_status(204)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let session = Arc::new(SessionStore::new(Arc::new(FileStore::open(&path).unwrap())));

    session
        .set_auth(
            storynest_entity::admin::AdminIdentity {
                id: "usr-7".to_string(),
                email: "lead@storynest.test".to_string(),
                first_name: "Iris".to_string(),
                last_name: "Vann".to_string(),
                is_admin: true,
            },
            "tok-1",
            "ref-1",
        )
        .unwrap();

    let client = client_for(&server, session.clone());
    AuthApi::new(client).logout().await.unwrap();
    session.logout().unwrap();

    let restored = SessionStore::new(Arc::new(FileStore::open(&path).unwrap()));
    restored.initialize_from_storage().unwrap();
    assert!(!restored.is_authenticated());
}
