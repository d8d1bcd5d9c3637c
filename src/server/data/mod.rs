//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table each and return domain models, so
//! services and bot handlers never touch entity types directly.

pub mod guild_setting;
pub mod user;

#[cfg(test)]
mod test;
