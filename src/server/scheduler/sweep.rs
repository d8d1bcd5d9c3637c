use std::time::Duration;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    bot::correlator::ReplySessions, error::AppError, session::LoginSessionStore,
};

/// Starts the periodic sweep of expired reply and login sessions.
///
/// Reads already ignore expired entries; the sweep only reclaims memory for sessions
/// nobody touched again.
///
/// # Arguments
/// - `reply_sessions` - Pending sticker-reply sessions
/// - `login_sessions` - Dashboard login tokens
/// - `interval` - Time between sweeps
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; jobs keep running while it is alive
/// - `Err(AppError::SchedulerErr)` - Failed to create or start the scheduler
pub async fn start_scheduler(
    reply_sessions: ReplySessions,
    login_sessions: LoginSessionStore,
    interval: Duration,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let reply_sessions = reply_sessions.clone();
        let login_sessions = login_sessions.clone();

        Box::pin(async move {
            sweep_sessions(&reply_sessions, &login_sessions).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Session sweep scheduled every {:?}", interval);

    Ok(scheduler)
}

/// Removes expired entries from both stores.
///
/// # Returns
/// - `(usize, usize)` - Reply sessions and login sessions removed
pub async fn sweep_sessions(
    reply_sessions: &ReplySessions,
    login_sessions: &LoginSessionStore,
) -> (usize, usize) {
    let replies = reply_sessions.sweep().await;
    let logins = login_sessions.sweep().await;

    tracing::debug!(
        "Session sweep removed {} reply sessions and {} login sessions",
        replies,
        logins
    );

    (replies, logins)
}
