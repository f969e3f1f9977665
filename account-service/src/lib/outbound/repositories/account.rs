use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::account::errors::RepositoryError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::EmailAddress;
use crate::account::models::Username;
use crate::account::ports::AccountRepository;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(
        &self,
        query: &str,
        bind: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query(query)
            .bind(bind)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.map(|r| map_account_row(&r)).transpose()
    }
}

fn database_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::Database(err.to_string())
}

/// Rehydrate an account from a row carrying all account columns.
///
/// Stored values were validated at write time; a row that no longer parses
/// is treated as a storage fault rather than silently skipped.
fn map_account_row(row: &PgRow) -> Result<Account, RepositoryError> {
    let id: Uuid = row.try_get("id").map_err(database_error)?;
    let username: String = row.try_get("username").map_err(database_error)?;
    let email: String = row.try_get("email").map_err(database_error)?;

    Ok(Account {
        id: AccountId(id),
        username: Username::new(username)
            .map_err(|e| RepositoryError::Database(format!("Corrupt username column: {}", e)))?,
        email: EmailAddress::new(email)
            .map_err(|e| RepositoryError::Database(format!("Corrupt email column: {}", e)))?,
        password_hash: row.try_get("password_hash").map_err(database_error)?,
        role: row.try_get("role").map_err(database_error)?,
        created_at: row.try_get("created_at").map_err(database_error)?,
        valid: row.try_get("valid").map_err(database_error)?,
    })
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, username, email, password_hash, role, created_at, valid)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(account.id.0)
        .bind(account.username.as_str())
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(&account.role)
        .bind(account.created_at)
        .bind(account.valid)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return RepositoryError::AlreadyExists;
                }
            }
            database_error(e)
        })?;

        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, role, created_at, valid
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(|r| map_account_row(&r)).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepositoryError> {
        self.find_one(
            r#"
            SELECT id, username, email, password_hash, role, created_at, valid
            FROM accounts
            WHERE username = $1
            "#,
            username,
        )
        .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
        self.find_one(
            r#"
            SELECT id, username, email, password_hash, role, created_at, valid
            FROM accounts
            WHERE email = $1
            "#,
            email,
        )
        .await
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, role, created_at, valid
            FROM accounts
            WHERE username = $1 OR email = $2
            LIMIT 1
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(|r| map_account_row(&r)).transpose()
    }

    async fn update(&self, account: Account) -> Result<Account, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET username = $2, email = $3, password_hash = $4, role = $5, valid = $6
            WHERE id = $1
            "#,
        )
        .bind(account.id.0)
        .bind(account.username.as_str())
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(&account.role)
        .bind(account.valid)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return RepositoryError::AlreadyExists;
                }
            }
            database_error(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::Database(format!(
                "No account row matched id {}",
                account.id
            )));
        }

        Ok(account)
    }
}
