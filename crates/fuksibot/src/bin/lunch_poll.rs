use anyhow::Result;
use chrono::Local;
use dotenvy::dotenv;

use fuksibot::cli::PollCli;
use fuksibot::run_lunch_poll;
use fuksicore::init_logger;

/// Posts tomorrow's lunch poll once and exits.
///
/// # Errors
/// Returns an error (non-zero exit) on missing configuration or a failed `sendPoll`.
#[tokio::main]
async fn main() -> Result<()> {
    let _cli = PollCli::parse_args();

    // Cron usually passes env directly; a .env in the working directory also works
    let _ = dotenv();
    init_logger()?;

    let today = Local::now().date_naive();
    if let Err(e) = run_lunch_poll(|key| std::env::var(key).ok(), today).await {
        log::error!("Failed to send lunch poll: {}", e);
        return Err(e.into());
    }

    Ok(())
}
