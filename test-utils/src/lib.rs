//! ProEmoji Test Utils
//!
//! Shared helpers for the backend's repository and middleware tests: an in-memory SQLite
//! database with the tables a test asks for, an optional tower-sessions session on the
//! same pool, and factories for seeding rows.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn verified_user() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_user_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::user::UserFactory::new(db).verified(true).build().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
