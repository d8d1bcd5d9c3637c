use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        admin::AdminStatsDto,
        api::ErrorDto,
        user::{SetAdminDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::admin::{collect_stats, AdminService},
        state::AppState,
    },
};

pub static ADMIN_TAG: &str = "admin";

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All admin users", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admins(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.login_sessions, &session)
        .require(&[Permission::Admin])
        .await?;

    let admins = AdminService::new(&state.db).get_admins().await?;
    let dto: Vec<UserDto> = admins.into_iter().map(|user| user.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{discord_id}/admin",
    tag = ADMIN_TAG,
    params(
        ("discord_id" = u64, Path, description = "Discord ID of the target user")
    ),
    request_body = SetAdminDto,
    responses(
        (status = 204, description = "Admin status updated"),
        (status = 400, description = "Admin tried to revoke their own status", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_admin(
    State(state): State<AppState>,
    session: Session,
    Path(discord_id): Path<u64>,
    Json(payload): Json<SetAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.login_sessions, &session)
        .require(&[Permission::Admin])
        .await?;

    AdminService::new(&state.db)
        .set_admin(actor.discord_id, discord_id, payload.admin)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Live session and cache counters", body = AdminStatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.login_sessions, &session)
        .require(&[Permission::Admin])
        .await?;

    let stats = collect_stats(
        &state.reply_sessions,
        &state.login_sessions,
        &state.translation,
    )
    .await;

    Ok((StatusCode::OK, Json(stats)))
}
