//! Verdict extraction from a chat-completion response

use chatter_core::{TokenUsage, Verdict};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct RawVerdict {
    is_spam: bool,
    reason: String,
}

/// Models sometimes wrap the JSON answer in a markdown code fence
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map_or(trimmed, str::trim)
}

fn token_count(usage: Option<&Value>, key: &str) -> u64 {
    usage
        .and_then(|u| u.get(key))
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

/// Read `choices[0].message.content` as a `{is_spam, reason}` object.
///
/// Any other shape yields [`Verdict::unprocessable`], which is never spam.
pub fn parse_verdict(response: Option<&Value>) -> Verdict {
    let Some(response) = response else {
        return Verdict::unprocessable();
    };
    let Some(content) = response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
    else {
        return Verdict::unprocessable();
    };
    let Ok(raw) = serde_json::from_str::<RawVerdict>(strip_code_fence(content)) else {
        return Verdict::unprocessable();
    };

    let usage = response.get("usage");
    let usage = TokenUsage {
        prompt_tokens: token_count(usage, "prompt_tokens"),
        completion_tokens: token_count(usage, "completion_tokens"),
        total_tokens: token_count(usage, "total_tokens"),
    };

    Verdict::new(raw.is_spam, raw.reason, Some(usage))
}
