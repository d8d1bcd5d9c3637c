//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand
//! using defaults.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//!
//! let admin = factory::user::UserFactory::new(&db)
//!     .discord_id("987654321")
//!     .admin(true)
//!     .verified(true)
//!     .build()
//!     .await?;
//!
//! let setting = factory::create_guild_setting(&db, "123", "ko").await?;
//! ```

pub mod guild_setting;
pub mod helpers;
pub mod user;

pub use guild_setting::create_guild_setting;
pub use user::{create_user, create_verified_user};
