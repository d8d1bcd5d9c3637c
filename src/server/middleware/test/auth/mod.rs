use std::time::Duration;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, auth::Permission, session::AuthSession},
    session::LoginSessionStore,
};
use test_utils::{builder::TestBuilder, factory};

mod require_admin;
mod require_login;

const LOGIN_TTL: Duration = Duration::from_secs(3600);
