use tokio_cron_scheduler::{Job, JobScheduler};
use tower_sessions::ExpiredDeletion;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{error::AppError, service::otp::OtpService};

/// Every minute, at second zero.
const OTP_PURGE_SCHEDULE: &str = "0 * * * * *";

/// Every five minutes, at second zero.
const SESSION_PURGE_SCHEDULE: &str = "0 */5 * * * *";

/// Starts the cleanup scheduler
///
/// Registers two jobs:
/// - Expired one-time codes are purged every minute
/// - Expired sessions are deleted from the session table every five minutes
///
/// # Arguments
/// - `otp_service`: Code store shared with the application state
/// - `session_store`: Session store backing the session layer
pub async fn start_scheduler(
    otp_service: OtpService,
    session_store: SqliteStore,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let otp_job = Job::new_async(OTP_PURGE_SCHEDULE, move |_uuid, _lock| {
        let otp_service = otp_service.clone();

        Box::pin(async move {
            let purged = otp_service.purge_expired().await;
            if purged > 0 {
                tracing::debug!("Purged {} expired one-time code(s)", purged);
            }
        })
    })?;

    let session_job = Job::new_async(SESSION_PURGE_SCHEDULE, move |_uuid, _lock| {
        let session_store = session_store.clone();

        Box::pin(async move {
            if let Err(e) = session_store.delete_expired().await {
                tracing::error!("Error deleting expired sessions: {}", e);
            }
        })
    })?;

    scheduler.add(otp_job).await?;
    scheduler.add(session_job).await?;
    scheduler.start().await?;

    tracing::info!("Cleanup scheduler started");

    Ok(scheduler)
}
