use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::types::Chatter;

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("Key 'chatters' not found in the response")]
    MissingChatters,
    #[error("Invalid 'chatters' entries in the response: {0}")]
    InvalidChatters(#[from] serde_json::Error),
}

/// Pulls the ordered `chatters` list out of a chat stats response body.
pub fn extract_chatters(response: &Value) -> Result<Vec<Chatter>, ResponseError> {
    let chatters = response
        .get("chatters")
        .ok_or(ResponseError::MissingChatters)?;
    Ok(Vec::<Chatter>::deserialize(chatters)?)
}

/// True for bodies that carry nothing: `null`, `false`, `0`, `""`, `[]` or `{}`.
pub fn is_empty_response(response: &Value) -> bool {
    match response {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// One name per line, surrounding whitespace trimmed.
pub fn parse_excluded_users(contents: &str) -> Vec<String> {
    contents.lines().map(|line| line.trim().to_string()).collect()
}
