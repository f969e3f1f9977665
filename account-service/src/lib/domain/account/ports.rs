use async_trait::async_trait;

use crate::account::errors::AuthError;
use crate::account::errors::RepositoryError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::ChangePasswordCommand;
use crate::account::models::LoginCommand;
use crate::account::models::RegisterCommand;

/// Port for account and credential service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account with a hashed credential.
    ///
    /// Registration never issues a token; logging in is a separate step.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, and password
    ///
    /// # Returns
    /// Created account entity
    ///
    /// # Errors
    /// * `AlreadyRegistered` - Username or email is already taken
    /// * `Infrastructure` - Storage or hashing operation failed
    async fn register(&self, command: RegisterCommand) -> Result<Account, AuthError>;

    /// Authenticate by username or email and issue a session token.
    ///
    /// # Arguments
    /// * `command` - Raw identifier and plaintext password
    ///
    /// # Returns
    /// Compact signed session token
    ///
    /// # Errors
    /// * `EmptyIdentifier` - Identifier was empty or whitespace
    /// * `InvalidCredentials` - Unknown identifier or wrong password,
    ///   deliberately indistinguishable
    /// * `Infrastructure` - Storage, hashing, or token operation failed
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;

    /// Replace the stored credential after verifying the current one.
    ///
    /// # Arguments
    /// * `id` - Account to update
    /// * `command` - Current and replacement passwords
    ///
    /// # Returns
    /// `false` when the account is unknown or the current password does not
    /// match; the two cases are not distinguished. `true` on success.
    ///
    /// # Errors
    /// * `Infrastructure` - Storage or hashing operation failed
    async fn change_password(
        &self,
        id: &AccountId,
        command: ChangePasswordCommand,
    ) -> Result<bool, AuthError>;

    /// Retrieve account by unique identifier.
    ///
    /// # Returns
    /// `None` when no account has this id
    ///
    /// # Errors
    /// * `Infrastructure` - Storage operation failed
    async fn get_account(&self, id: &AccountId) -> Result<Option<Account>, AuthError>;
}

/// Persistence operations for the account aggregate.
///
/// Username and email uniqueness is the store's responsibility (unique
/// indexes); callers only react to the duplicate signal.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Errors
    /// * `AlreadyExists` - A unique index rejected the write
    /// * `Database` - Storage operation failed
    async fn create(&self, account: Account) -> Result<Account, RepositoryError>;

    /// Retrieve account by identifier.
    ///
    /// # Errors
    /// * `Database` - Storage operation failed
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, RepositoryError>;

    /// Retrieve account by exact username.
    ///
    /// # Errors
    /// * `Database` - Storage operation failed
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepositoryError>;

    /// Retrieve account by email address.
    ///
    /// # Errors
    /// * `Database` - Storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError>;

    /// Retrieve any account matching the username or the email, in a single
    /// round trip. Backs the registration existence check.
    ///
    /// # Errors
    /// * `Database` - Storage operation failed
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<Account>, RepositoryError>;

    /// Update an existing account.
    ///
    /// # Errors
    /// * `AlreadyExists` - A unique index rejected the write
    /// * `Database` - Storage operation failed or no row matched
    async fn update(&self, account: Account) -> Result<Account, RepositoryError>;
}
