//! Spam classification through an OpenAI-compatible chat-completion endpoint

mod client;
mod prompt;
mod verdict;

pub use client::{AiClientError, ChatCompletions, ChatMessage, ChatRole, OpenAiClient};
pub use prompt::{build_messages, SPAM_DETECTION_PROMPT};
pub use verdict::parse_verdict;

use chatter_core::Verdict;

/// Classify one piece of text.
///
/// Transport failures are returned as errors. Anything the endpoint sends
/// back that cannot be read as a verdict becomes the fail-open
/// [`Verdict::unprocessable`].
pub async fn classify(
    completions: &dyn ChatCompletions,
    text: &str,
) -> Result<Verdict, AiClientError> {
    let messages = build_messages(text);
    let response = completions.chat_completions(&messages, None, None).await?;
    Ok(parse_verdict(response.as_ref()))
}
