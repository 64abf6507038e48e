use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://api.streamelements.com/kappa/v2";
pub const DEFAULT_EXCLUDED_USERS_FILE: &str = "excluded_users.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "top_chatter.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub channel: String,
    pub token: String,
    pub base_url: String,
    pub excluded_users_path: PathBuf,
    pub output_path: PathBuf,
}

impl Config {
    /// Config pointing at the public API with the default file locations.
    pub fn new<C, T>(channel: C, token: T) -> Self
    where
        C: Into<String>,
        T: Into<String>,
    {
        Self {
            channel: channel.into(),
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            excluded_users_path: PathBuf::from(DEFAULT_EXCLUDED_USERS_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// One entry of the `chatters` array. Extra fields sent by the API are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Chatter {
    pub name: String,
    pub amount: i64,
}

impl Chatter {
    pub fn new<N: Into<String>>(name: N, amount: i64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}
