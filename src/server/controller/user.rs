use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::VerificationDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// Verifies the logged-in user so the bot accepts their privileged commands.
#[utoipa::path(
    post,
    path = "/api/user/verify",
    tag = USER_TAG,
    responses(
        (status = 200, description = "User verified", body = VerificationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.login_sessions, &session)
        .require(&[])
        .await?;

    let verified_until = UserService::new(&state.db)
        .verify(user.discord_id, state.verification_days)
        .await?;

    Ok((StatusCode::OK, Json(VerificationDto { verified_until })))
}
