use anyhow::{Context, Result};
use std::path::Path;

use crate::parsing::ResponseError;
use crate::stats::FetchError;
use crate::types::Chatter;

pub fn format_label(name: &str) -> String {
    format!("Most interactive: {}", name)
}

/// A top chatter with an empty name or a zero count is not worth a label.
pub fn is_reportable(top: &Chatter) -> bool {
    !top.name.is_empty() && top.amount != 0
}

/// Overwrites `path` with the single-line label for `top`.
pub fn write_top_chatter_label(path: &Path, top: &Chatter) -> Result<()> {
    std::fs::write(path, format_label(&top.name))
        .with_context(|| format!("Failed to write top chatter label to {}", path.display()))
}

/// How a single run ended. Every variant still maps to a successful exit.
#[derive(Debug)]
pub enum RunOutcome {
    Written(Chatter),
    FetchFailed(FetchError),
    EmptyResponse,
    MalformedResponse(ResponseError),
    NoEligibleChatters,
    Unreportable(Chatter),
    WriteFailed(anyhow::Error),
}

impl RunOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, RunOutcome::Written(_))
    }

    pub fn top_chatter(&self) -> Option<&Chatter> {
        match self {
            RunOutcome::Written(c) => Some(c),
            _ => None,
        }
    }
}
