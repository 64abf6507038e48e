use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{error, info};

use crate::parsing::parse_excluded_users;
use crate::types::Chatter;

/// Reads the denylist file. A missing or unreadable file yields an empty list.
pub fn load_excluded_users(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let users = parse_excluded_users(&contents);
            info!("Loaded {} excluded users from {}", users.len(), path.display());
            users
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            error!("Excluded users file not found: {}", path.display());
            Vec::new()
        }
        Err(e) => {
            error!("Failed to read excluded users file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Chatters whose name is not excluded, in API order.
pub fn eligible_chatters<'a>(chatters: &'a [Chatter], excluded: &[String]) -> Vec<&'a Chatter> {
    let excluded: HashSet<&str> = excluded.iter().map(String::as_str).collect();
    chatters
        .iter()
        .filter(|c| !excluded.contains(c.name.as_str()))
        .collect()
}

/// First eligible chatter in API order. The amount is not consulted: the API
/// ranking is taken as-is.
pub fn get_top_chatter(chatters: &[Chatter], excluded: &[String]) -> Option<Chatter> {
    eligible_chatters(chatters, excluded)
        .first()
        .map(|c| (*c).clone())
}
