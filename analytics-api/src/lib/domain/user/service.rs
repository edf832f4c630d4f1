use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::AuthenticatedUser;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for registration, login and bearer
/// identity resolution.
///
/// Argon2 work runs on the blocking pool; token work is cheap and runs
/// inline.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password hasher and token handler
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| UserError::Unknown(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))
    }

    async fn verify_and_issue(&self, user: &User, password: String) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = user.password_hash.clone();
        let subject = user.username.as_str().to_string();

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &subject)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Password verification task failed: {}", e)))?;

        match result {
            Ok(result) => Ok(result.access_token),
            Err(AuthenticationError::InvalidCredentials) => Err(UserError::InvalidCredentials),
            Err(AuthenticationError::PasswordError(e)) => {
                tracing::error!(user_id = %user.id, error = %e, "Stored password hash is unusable");
                Err(UserError::Unknown(format!("Password verification failed: {}", e)))
            }
            Err(AuthenticationError::JwtError(e)) => {
                Err(UserError::Unknown(format!("Token generation failed: {}", e)))
            }
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(
        &self,
        command: RegisterUserCommand,
    ) -> Result<AuthenticatedUser, UserError> {
        // Best-effort pre-checks; the store's unique constraints are authoritative.
        if self
            .repository
            .find_by_username(command.username.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists(
                command.username.as_str().to_string(),
            ));
        }

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

        let password_hash = self.hash_password(command.password.expose().to_string()).await?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        let created_user = self.repository.create(user).await?;

        let token = self
            .authenticator
            .issue_token(created_user.username.as_str())
            .map_err(|e| UserError::Unknown(format!("Token generation failed: {}", e)))?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User registered"
        );

        Ok(AuthenticatedUser {
            user: created_user,
            token,
        })
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthenticatedUser, UserError> {
        let LoginCommand { username, password } = command;

        let Some(user) = self.repository.find_by_username(&username).await? else {
            tracing::warn!(username = %username, "Login rejected");
            return Err(UserError::InvalidCredentials);
        };

        let token = match self.verify_and_issue(&user, password).await {
            Err(UserError::InvalidCredentials) => {
                tracing::warn!(username = %username, "Login rejected");
                return Err(UserError::InvalidCredentials);
            }
            other => other?,
        };

        tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(AuthenticatedUser { user, token })
    }

    async fn resolve_identity(&self, token: &str) -> Result<User, UserError> {
        let subject = self.authenticator.validate_token(token).map_err(|e| {
            tracing::debug!(error = %e, "Bearer token rejected");
            UserError::Unauthorized
        })?;

        match self.repository.find_by_username(&subject).await? {
            Some(user) => Ok(user),
            None => {
                tracing::debug!("Bearer token subject has no credential record");
                Err(UserError::Unauthorized)
            }
        }
    }
}
