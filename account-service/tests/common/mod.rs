use std::collections::HashMap;
use std::sync::Arc;

use account_service::domain::account::errors::RepositoryError;
use account_service::domain::account::models::Account;
use account_service::domain::account::models::AccountId;
use account_service::domain::account::ports::AccountRepository;
use account_service::domain::account::service::AccountService;
use async_trait::async_trait;
use auth::TokenConfig;
use auth::TokenIssuer;
use tokio::sync::RwLock;

/// In-memory account store standing in for the real database.
///
/// Enforces username/email uniqueness the way the real store's unique
/// indexes do, so duplicate writes surface the same signal.
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn stored_hash(&self, id: &AccountId) -> Option<String> {
        self.accounts
            .read()
            .await
            .get(id)
            .map(|account| account.password_hash.clone())
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, RepositoryError> {
        let mut accounts = self.accounts.write().await;

        let duplicate = accounts.values().any(|existing| {
            existing.username.as_str() == account.username.as_str()
                || existing.email.as_str() == account.email.as_str()
        });
        if duplicate {
            return Err(RepositoryError::AlreadyExists);
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, RepositoryError> {
        Ok(self.accounts.read().await.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepositoryError> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|account| account.username.as_str() == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|account| account.email.as_str() == email)
            .cloned())
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|account| {
                account.username.as_str() == username || account.email.as_str() == email
            })
            .cloned())
    }

    async fn update(&self, account: Account) -> Result<Account, RepositoryError> {
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&account.id) {
            return Err(RepositoryError::Database(format!(
                "No account row matched id {}",
                account.id
            )));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }
}

pub fn test_issuer() -> Arc<TokenIssuer> {
    Arc::new(
        TokenIssuer::new(TokenConfig {
            secret: "integration_secret_32_bytes_long!!".to_string(),
            issuer: "account-service-test".to_string(),
            audience: "content-api-test".to_string(),
        })
        .expect("Failed to build test issuer"),
    )
}

pub struct TestHarness {
    pub repository: Arc<InMemoryAccountRepository>,
    pub issuer: Arc<TokenIssuer>,
    pub service: AccountService<InMemoryAccountRepository>,
}

impl TestHarness {
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryAccountRepository::new());
        let issuer = test_issuer();
        let service = AccountService::new(Arc::clone(&repository), Arc::clone(&issuer));

        Self {
            repository,
            issuer,
            service,
        }
    }
}
