//! OpenAI-style message list adapter.
//!
//! Produces the Chat Completions `messages` array: a system message carrying
//! the augmented context, caller-supplied prior turns in their original
//! order, then the current user turn.

use crate::providers::ChatMessage;
use crate::types::AugmentationResult;

/// Build the ordered message list for an OpenAI-style chat API.
pub fn build_messages(result: &AugmentationResult, history: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(&result.system_context));
    messages.extend_from_slice(history);
    messages.push(ChatMessage::user(&result.user_prompt));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> AugmentationResult {
        AugmentationResult {
            system_context: "You are helping Alice.".to_string(),
            user_prompt: "What's next?".to_string(),
            augmented_prompt: None,
            metadata: Default::default(),
        }
    }

    #[test]
    fn test_empty_history_yields_system_then_user() {
        let messages = build_messages(&result(), &[]);

        assert_eq!(
            messages,
            vec![
                ChatMessage::system("You are helping Alice."),
                ChatMessage::user("What's next?"),
            ]
        );
    }

    #[test]
    fn test_history_preserved_in_order() {
        let history = vec![
            ChatMessage::user("first"),
            ChatMessage::assistant("second"),
            ChatMessage::user("third"),
        ];

        let messages = build_messages(&result(), &history);

        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].content, "first");
        assert_eq!(messages[2].content, "second");
        assert_eq!(messages[3].content, "third");
        assert_eq!(messages[4], ChatMessage::user("What's next?"));
    }

    #[test]
    fn test_empty_system_context_still_sent() {
        let result = AugmentationResult {
            user_prompt: "hi".to_string(),
            ..Default::default()
        };

        let messages = build_messages(&result, &[]);
        assert_eq!(messages[0], ChatMessage::system(""));
    }
}
