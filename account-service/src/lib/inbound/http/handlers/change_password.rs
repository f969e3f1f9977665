use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::AuthError;
use crate::account::models::ChangePasswordCommand;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn change_password(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedAccount>,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<ApiSuccess<ChangePasswordResponseData>, ApiError> {
    let changed = state
        .account_service
        .change_password(
            &authenticated.account_id,
            ChangePasswordCommand {
                current_password: body.current_password,
                new_password: body.new_password,
            },
        )
        .await
        .map_err(ApiError::from)?;

    // Unknown account and wrong current password collapse into the same
    // rejection.
    if !changed {
        return Err(ApiError::Unauthorized(
            AuthError::InvalidCredentials.to_string(),
        ));
    }

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ChangePasswordResponseData { changed },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangePasswordRequest {
    current_password: String,
    new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangePasswordResponseData {
    pub changed: bool,
}
