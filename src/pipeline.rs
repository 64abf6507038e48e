use tracing::{debug, error, info};

use crate::exclusion::{get_top_chatter, load_excluded_users};
use crate::parsing::{extract_chatters, is_empty_response};
use crate::report::{is_reportable, write_top_chatter_label, RunOutcome};
use crate::stats::StatsClient;
use crate::types::Config;

/// Fetch, filter and report once. Failures are logged and returned as the
/// outcome; nothing here aborts the process.
pub async fn run(config: &Config) -> RunOutcome {
    let excluded = load_excluded_users(&config.excluded_users_path);

    let client = StatsClient::new(config);
    let stats = match client.fetch_chat_stats().await {
        Ok(stats) => stats,
        Err(e) => {
            error!("Error fetching chat stats: {}", e);
            error!("Failed to fetch chat stats");
            return RunOutcome::FetchFailed(e);
        }
    };
    debug!("Chat stats response: {}", stats);
    if is_empty_response(&stats) {
        error!("Failed to fetch chat stats: empty response body");
        return RunOutcome::EmptyResponse;
    }

    let chatters = match extract_chatters(&stats) {
        Ok(chatters) => chatters,
        Err(e) => {
            error!("{}", e);
            return RunOutcome::MalformedResponse(e);
        }
    };
    info!("Fetched {} chatters, {} excluded users", chatters.len(), excluded.len());

    let Some(top) = get_top_chatter(&chatters, &excluded) else {
        error!("No eligible chatters after applying exclusions");
        return RunOutcome::NoEligibleChatters;
    };
    if !is_reportable(&top) {
        error!("Top chatter {:?} has no name or no messages, nothing to report", top);
        return RunOutcome::Unreportable(top);
    }

    if let Err(e) = write_top_chatter_label(&config.output_path, &top) {
        error!("{:#}", e);
        return RunOutcome::WriteFailed(e);
    }
    info!(
        "Top chatter {} ({} messages) written to {}",
        top.name,
        top.amount,
        config.output_path.display()
    );
    RunOutcome::Written(top)
}
