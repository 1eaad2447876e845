//! System prompt for the spam classifier

use super::client::ChatMessage;

/// Instruction sent ahead of every candidate text
pub const SPAM_DETECTION_PROMPT: &str = "You are a smart spam detection system moderating a \
discussion board where insurance professionals connect with each other to find coverage options \
for hard to place markets and to discuss other insurance related topics. You will be given a \
piece of content and you must decide whether it is spam. Members routinely introduce themselves \
professionally and share their contact details so others can reach them; that alone is not spam. \
Financial scams, marketing unrelated to insurance, and repeated identical content are spam. \
Return only a valid JSON object with the keys {is_spam, reason}. is_spam must be a boolean. \
reason must be a concise string explaining the decision in one or two sentences.";

/// Conversation for one classification: the fixed instruction, then the text
pub fn build_messages(text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SPAM_DETECTION_PROMPT),
        ChatMessage::user(text),
    ]
}
