use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::account::errors::EmailError;
use crate::domain::account::models::Account;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::SignupCommand;
use crate::domain::account::ports::SessionServicePort;
use crate::inbound::http::router::AppState;

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AccountData>), ApiError> {
    state
        .session_service
        .signup(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref account| (StatusCode::CREATED, Json(account.into())))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    confirm_password: String,
}

impl SignupRequest {
    fn try_into_command(self) -> Result<SignupCommand, EmailError> {
        let email = EmailAddress::new(self.email)?;
        Ok(SignupCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            email,
            password: self.password,
            confirm_password: self.confirm_password,
        })
    }
}

impl From<EmailError> for ApiError {
    fn from(err: EmailError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountData {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Account> for AccountData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.0,
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.as_str().to_string(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
