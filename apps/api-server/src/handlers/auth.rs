//! Registration handler.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use enroll_core::domain::UserResponse;
use enroll_shared::dto::RegisterRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body for a successful registration.
#[derive(Serialize)]
pub struct RegisterResponse {
    pub user: UserResponse,
    pub token: String,
}

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .registration
        .register(&req.email, &req.password)
        .await?;

    let token = state
        .tokens
        .issue(user.id, &user.email)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Created().json(RegisterResponse { user, token }))
}
