use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIdentity;
use auth::TokenIssuer;
use chrono::Utc;

use crate::account::errors::AuthError;
use crate::account::errors::RepositoryError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::ChangePasswordCommand;
use crate::account::models::LoginCommand;
use crate::account::models::LoginIdentifier;
use crate::account::models::RegisterCommand;
use crate::account::models::DEFAULT_ROLE;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;

/// Domain service implementation for account and credential operations.
///
/// Orchestrates the repository, the password hasher, and the token issuer;
/// holds no shared mutable state, so concurrent calls are independent.
pub struct AccountService<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
    token_issuer: Arc<TokenIssuer>,
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `token_issuer` - Configured session token issuer
    pub fn new(repository: Arc<R>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }
}

/// Wrap a storage failure, logging the underlying detail before it is
/// embedded in the response.
fn storage_failure(err: RepositoryError) -> AuthError {
    if let RepositoryError::Database(detail) = &err {
        tracing::error!(error = %detail, "Account storage failure");
    }
    AuthError::from(err)
}

#[async_trait]
impl<R> AccountServicePort for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<Account, AuthError> {
        let existing = self
            .repository
            .find_by_username_or_email(command.username.as_str(), command.email.as_str())
            .await
            .map_err(storage_failure)?;

        if existing.is_some() {
            return Err(AuthError::AlreadyRegistered);
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let account = Account {
            id: AccountId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            role: DEFAULT_ROLE.to_string(),
            created_at: Utc::now(),
            valid: false,
        };

        // The store's unique index closes the check-then-write race; a
        // duplicate landing between the check and here reports the same
        // conflict.
        self.repository.create(account).await.map_err(|e| match e {
            RepositoryError::AlreadyExists => AuthError::AlreadyRegistered,
            other => storage_failure(other),
        })
    }

    async fn login(&self, command: LoginCommand) -> Result<String, AuthError> {
        let identifier = command.identifier.trim();
        if identifier.is_empty() {
            return Err(AuthError::EmptyIdentifier);
        }

        let account = match LoginIdentifier::classify(identifier) {
            LoginIdentifier::Email => self.repository.find_by_email(identifier).await,
            LoginIdentifier::Username => self.repository.find_by_username(identifier).await,
        }
        .map_err(storage_failure)?
        .ok_or(AuthError::InvalidCredentials)?;

        let verified = self
            .password_hasher
            .verify(&command.password, &account.password_hash)?;

        if !verified {
            return Err(AuthError::InvalidCredentials);
        }

        let identity = TokenIdentity::new(account.id)
            .with_username(account.username.as_str())
            .with_email(account.email.as_str());

        Ok(self.token_issuer.issue(&identity)?)
    }

    async fn change_password(
        &self,
        id: &AccountId,
        command: ChangePasswordCommand,
    ) -> Result<bool, AuthError> {
        let Some(mut account) = self.repository.find_by_id(id).await.map_err(storage_failure)?
        else {
            return Ok(false);
        };

        let verified = self
            .password_hasher
            .verify(&command.current_password, &account.password_hash)?;

        if !verified {
            return Ok(false);
        }

        account.password_hash = self.password_hasher.hash(&command.new_password)?;
        self.repository
            .update(account)
            .await
            .map_err(storage_failure)?;

        Ok(true)
    }

    async fn get_account(&self, id: &AccountId) -> Result<Option<Account>, AuthError> {
        self.repository.find_by_id(id).await.map_err(storage_failure)
    }
}
