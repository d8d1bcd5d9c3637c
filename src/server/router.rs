use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        admin::AdminStatsDto,
        api::ErrorDto,
        user::{SetAdminDto, UserDto, VerificationDto},
    },
    server::{
        controller::{admin, auth, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "ProEmoji", description = "ProEmoji dashboard API"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::get_user,
        user::verify_user,
        admin::get_admins,
        admin::set_admin,
        admin::get_stats,
    ),
    components(schemas(ErrorDto, UserDto, VerificationDto, SetAdminDto, AdminStatsDto)),
    tags(
        (name = "auth", description = "Discord login"),
        (name = "user", description = "User verification"),
        (name = "admin", description = "Admin panel"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/user/verify", post(user::verify_user))
        .route("/api/admin/users", get(admin::get_admins))
        .route("/api/admin/users/{discord_id}/admin", put(admin::set_admin))
        .route("/api/admin/stats", get(admin::get_stats))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
