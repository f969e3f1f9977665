use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<ApiSuccess<GetAccountResponseData>, ApiError> {
    let account_id =
        AccountId::from_string(&account_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .account_service
        .get_account(&account_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Account not found: {}", account_id)))
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetAccountResponseData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub valid: bool,
}

impl From<&Account> for GetAccountResponseData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            username: account.username.as_str().to_string(),
            email: account.email.as_str().to_string(),
            role: account.role.clone(),
            created_at: account.created_at,
            valid: account.valid,
        }
    }
}
