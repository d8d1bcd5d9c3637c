//! Short-lived in-memory session state.
//!
//! Two stores live here, both constructed once at startup and shared by handle:
//!
//! - `SessionStore` - generic key → record map with a TTL per entry, used by the bot to
//!   correlate follow-up replies with the command that asked for them
//! - `LoginSessionStore` - opaque web login tokens with one live token per Discord account
//!
//! Expiry is cooperative. Reads re-check the deadline, and a scheduled sweep (see
//! `scheduler::sweep`) compacts whatever nobody read. Nothing is persisted; a restart
//! drops every session.

pub mod login;
pub mod store;

pub use login::LoginSessionStore;
pub use store::{Expiring, SessionStore};
