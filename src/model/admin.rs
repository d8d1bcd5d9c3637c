use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Live counters shown on the admin panel.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AdminStatsDto {
    /// Bot commands waiting for a sticker reply.
    pub reply_sessions: usize,
    /// Logged-in dashboard sessions.
    pub login_sessions: usize,
    /// Entries in the translation cache.
    pub cached_translations: usize,
}
