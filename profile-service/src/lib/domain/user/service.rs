use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Argon2 hashing and verification are CPU-bound, so both run under
/// `spawn_blocking`: a slow hash computation must never stall unrelated
/// requests on the async executor. Once started they run to completion;
/// there is no cancellation or timeout on these operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let hasher = self.password_hasher;
        let password = command.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))??;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            avatar: command.avatar,
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    async fn authenticate(&self, email: &EmailAddress, password: &str) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_email(email.as_str())
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let hasher = self.password_hasher;
        let password = password.to_string();
        let stored_hash = user.password_hash.clone();
        let is_valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))?;

        if !is_valid {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    // Define mocks in the test module using mockall
    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    fn command(password: &str) -> CreateUserCommand {
        CreateUserCommand::new(
            "Test User".to_string(),
            EmailAddress::new("test@example.com".to_string()).unwrap(),
            password.to_string(),
            None,
        )
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .with(eq("test@example.com"))
            .times(1)
            .returning(|_| Ok(None));

        repository
            .expect_create()
            .withf(|user| {
                user.email.as_str() == "test@example.com"
                    && user.password_hash.starts_with("$argon2")
                    && user.password_hash != "secret_password"
            })
            .times(1)
            .returning(Ok);

        let service = UserService::new(Arc::new(repository));
        let user = service.register(command("secret_password")).await.unwrap();

        assert_eq!(user.name, "Test User");
        assert!(!user.password_hash.is_empty());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_find_by_email().times(1).returning(|_| {
            Ok(Some(User {
                id: UserId::new(),
                name: "Existing".to_string(),
                email: EmailAddress::new("test@example.com".to_string()).unwrap(),
                password_hash: "$argon2id$stored".to_string(),
                avatar: None,
                created_at: Utc::now(),
            }))
        });
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository));
        let result = service.register(command("secret_password")).await;

        assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_authenticate_round_trip() {
        let hasher = PasswordHasher::new();
        let stored_hash = hasher.hash("secret_password").unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .with(eq("test@example.com"))
            .returning(move |_| {
                Ok(Some(User {
                    id: UserId::new(),
                    name: "Test User".to_string(),
                    email: EmailAddress::new("test@example.com".to_string()).unwrap(),
                    password_hash: stored_hash.clone(),
                    avatar: None,
                    created_at: Utc::now(),
                }))
            });

        let service = UserService::new(Arc::new(repository));
        let email = EmailAddress::new("test@example.com".to_string()).unwrap();

        let user = service
            .authenticate(&email, "secret_password")
            .await
            .unwrap();
        assert_eq!(user.name, "Test User");

        let result = service.authenticate(&email, "wrong_password").await;
        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_email().returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));
        let email = EmailAddress::new("nobody@example.com".to_string()).unwrap();

        let result = service.authenticate(&email, "whatever").await;
        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_malformed_stored_hash_fails_closed() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_email().returning(|_| {
            Ok(Some(User {
                id: UserId::new(),
                name: "Test User".to_string(),
                email: EmailAddress::new("test@example.com".to_string()).unwrap(),
                password_hash: "corrupted-hash-value".to_string(),
                avatar: None,
                created_at: Utc::now(),
            }))
        });

        let service = UserService::new(Arc::new(repository));
        let email = EmailAddress::new("test@example.com".to_string()).unwrap();

        // A corrupt stored hash is treated as invalid credentials, never a crash
        let result = service.authenticate(&email, "secret_password").await;
        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }
}
