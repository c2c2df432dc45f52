use crate::api_connection::connection::{ApiConnectionError, Provider};
use crate::api_connection::endpoints::{ChatCompletionRequest, ChatMessage};
use crate::assistant_error::AssistantError;

const CHAT_SYSTEM_PROMPT: &str = "You are a knowledgeable nutrition assistant AI. \
Provide helpful, evidence-based answers to questions about nutrition, diet, and food. \
Keep responses concise and easy to understand. \
If you're unsure about something, acknowledge it and suggest consulting a professional. \
Focus on providing general nutrition information rather than personalized medical advice.";

/// Free-form chat. The reply is consumed as plain text, so no extraction,
/// repair, or validation applies here.
pub async fn chat_with_assistant(
    provider: &Provider,
    message: &str,
) -> Result<String, AssistantError> {
    let request = ChatCompletionRequest {
        model: provider.model().to_string(),
        messages: vec![
            ChatMessage::system(CHAT_SYSTEM_PROMPT),
            ChatMessage::user(message),
        ],
        temperature: Some(0.7),
        max_tokens: Some(1000),
    };

    let response = provider.call_chat_completion(request).await?;
    let content = response
        .first_content()
        .ok_or(AssistantError::Transport(ApiConnectionError::EmptyResponse))?;

    Ok(content.trim().to_string())
}
