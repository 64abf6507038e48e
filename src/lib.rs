// Public modules
pub mod types;
pub mod config;
pub mod parsing;
pub mod stats;
pub mod exclusion;
pub mod report;
pub mod pipeline;

// Re-export commonly used items
pub use types::*;
pub use config::{load_config, load_config_with_env, load_env_file, load_env_file_from, EnvironmentProvider, SystemEnvironment, MockEnvironment};
pub use parsing::{extract_chatters, is_empty_response, parse_excluded_users, ResponseError};
pub use stats::{StatsClient, FetchError};
pub use exclusion::{load_excluded_users, eligible_chatters, get_top_chatter};
pub use report::{format_label, is_reportable, write_top_chatter_label, RunOutcome};
pub use pipeline::run;
