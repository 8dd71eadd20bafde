use std::sync::Arc;

use chrono::Duration;
use roster_service::domain::auth::service::AuthService;
use roster_service::inbound::http::router::create_router;
use roster_service::outbound::repositories::InMemorySessionRepository;
use roster_service::outbound::repositories::InMemoryUserRepository;
use roster_service::seed::seed_demo_users;

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application with the default 24 hour session TTL and the
    /// demo users ("Алексей" online, "Мария" offline) pre-seeded.
    pub async fn spawn() -> Self {
        Self::spawn_with_ttl(Duration::hours(24)).await
    }

    /// Spawn the application with an explicit session TTL.
    pub async fn spawn_with_ttl(session_ttl: Duration) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(InMemoryUserRepository::new());
        let session_repository = Arc::new(InMemorySessionRepository::new());

        seed_demo_users(user_repository.as_ref())
            .await
            .expect("Failed to seed demo users");

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repository),
            session_repository,
            session_ttl,
        ));

        let router = create_router(auth_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("Failed to create reqwest client"),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register a user and return the parsed response body.
    pub async fn register_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> serde_json::Value {
        self.post("/register")
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute register request")
            .json()
            .await
            .expect("Failed to parse register response")
    }

    /// Log a user in and return the raw response.
    pub async fn login_user(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute login request")
    }
}
