//! Verdict - the classifier's answer for one piece of content

use serde::{Deserialize, Serialize};

/// Reason recorded when the classifier's answer cannot be read
pub const UNPROCESSABLE_REASON: &str = "Unable to process response from AI.";

/// Token accounting reported by the completion endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

/// Spam classification outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub is_spam: bool,
    pub reason: String,
    /// Present only when the classifier answered in the expected shape
    pub usage: Option<TokenUsage>,
}

impl Verdict {
    pub fn new(is_spam: bool, reason: impl Into<String>, usage: Option<TokenUsage>) -> Self {
        Self {
            is_spam,
            reason: reason.into(),
            usage,
        }
    }

    /// Fail-open verdict used when the answer could not be interpreted
    pub fn unprocessable() -> Self {
        Self::new(false, UNPROCESSABLE_REASON, None)
    }

    /// Token usage as the JSON map stored in the record's metadata column
    pub fn metadata(&self) -> Option<serde_json::Value> {
        self.usage.and_then(|usage| serde_json::to_value(usage).ok())
    }
}
