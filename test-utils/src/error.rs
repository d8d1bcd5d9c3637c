use thiserror::Error;

/// Errors raised while preparing a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database, creating tables or the session table failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
