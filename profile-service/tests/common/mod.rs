use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::TokenIssuer;
use chrono::Duration;
use chrono::Utc;
use profile_service::domain::profile::service::ProfileService;
use profile_service::domain::user::service::UserService;
use profile_service::inbound::http::router::create_router;
use profile_service::profile::errors::ProfileError;
use profile_service::profile::models::Profile;
use profile_service::profile::ports::ProfileRepository;
use profile_service::user::errors::UserError;
use profile_service::user::models::EmailAddress;
use profile_service::user::models::User;
use profile_service::user::models::UserId;
use profile_service::user::ports::UserRepository;
use tokio::sync::RwLock;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const AUTH_HEADER: &str = "x-auth-token";

/// In-memory user store backing the test server.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserError> {
        let users = self.users.read().await;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        match self.users.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(UserError::NotFound(id.to_string())),
        }
    }
}

/// In-memory profile store backing the test server.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<HashMap<UserId, Profile>>,
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileError> {
        self.profiles
            .write()
            .await
            .insert(profile.user_id, profile.clone());
        Ok(profile)
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Profile>, ProfileError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Profile>, ProfileError> {
        Ok(self.profiles.read().await.values().cloned().collect())
    }

    async fn delete_by_user(&self, user_id: &UserId) -> Result<(), ProfileError> {
        self.profiles.write().await.remove(user_id);
        Ok(())
    }
}

/// Test application that spawns a real server on a random port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
    pub users: Arc<InMemoryUserRepository>,
    pub profiles: Arc<InMemoryProfileRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let users = Arc::new(InMemoryUserRepository::default());
        let profiles = Arc::new(InMemoryProfileRepository::default());

        let user_service = Arc::new(UserService::new(Arc::clone(&users)));
        let profile_service = Arc::new(ProfileService::new(
            Arc::clone(&profiles),
            Arc::clone(&users),
        ));
        let token_issuer = Arc::new(TokenIssuer::new(TEST_SECRET, Duration::hours(24)));

        let router = create_router(
            user_service,
            profile_service,
            Arc::clone(&token_issuer),
            AUTH_HEADER,
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_issuer: TokenIssuer::new(TEST_SECRET, Duration::hours(24)),
            users,
            profiles,
        }
    }

    /// Insert a user directly into the store, bypassing password hashing,
    /// and return its id with a valid token.
    pub async fn seed_user(&self, name: &str, email: &str) -> (UserId, String) {
        let user = User {
            id: UserId::new(),
            name: name.to_string(),
            email: EmailAddress::new(email.to_string()).expect("Invalid test email"),
            password_hash: "$argon2id$unused-test-hash".to_string(),
            avatar: None,
            created_at: Utc::now(),
        };
        let id = user.id;
        self.users.create(user).await.expect("Failed to seed user");
        let token = self
            .token_issuer
            .issue(&id.to_string())
            .expect("Failed to issue test token");
        (id, token)
    }

    /// Register a user through the API and return the issued token.
    pub async fn register_user(&self, name: &str, email: &str, password: &str) -> String {
        let response = self
            .post("/api/users")
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Registration response missing token")
            .to_string()
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with auth token header
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).header(AUTH_HEADER, token)
    }

    /// Helper to make POST request with auth token header
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).header(AUTH_HEADER, token)
    }

    /// Helper to make PUT request with auth token header
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .header(AUTH_HEADER, token)
    }

    /// Helper to make DELETE request with auth token header
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .header(AUTH_HEADER, token)
    }
}
