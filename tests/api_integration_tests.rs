use nutri_assist::api_connection::{
    connection::{ApiConnectionError, Provider},
    endpoints::{ChatCompletionRequest, ChatMessage, DEFAULT_MODEL},
};
use nutri_assist::assistant_error::AssistantError;
use nutri_assist::nutrition_analyzer::analyze_nutrition;

use dotenv::dotenv;
use std::env;

const TEST_API_KEY_ENV_VAR: &str = "GROQ_API_KEY";

fn setup_test_environment() {
    dotenv().ok();
}

fn simple_request(content: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: DEFAULT_MODEL.to_string(),
        messages: vec![ChatMessage::user(content)],
        temperature: None,
        max_tokens: None,
    }
}

#[tokio::test]
async fn test_missing_api_key_error() {
    let provider = Provider::groq(None);
    let result = provider.call_chat_completion(simple_request("Hello")).await;
    assert!(matches!(result, Err(ApiConnectionError::MissingApiKey)));
}

#[tokio::test]
async fn test_empty_api_key_is_treated_as_missing() {
    let provider = Provider::groq(Some(String::new()));
    let result = provider.call_chat_completion(simple_request("Hello")).await;
    assert!(matches!(result, Err(ApiConnectionError::MissingApiKey)));

    let provider = Provider::groq(Some("   ".to_string()));
    let result = provider.call_chat_completion(simple_request("Hello")).await;
    assert!(matches!(result, Err(ApiConnectionError::MissingApiKey)));
}

// The credential-absent scenario must fail at the transport stage before
// any network call is attempted, with a message telling the user how to
// configure the key.
#[tokio::test]
async fn test_feature_call_without_credential_fails_at_transport() {
    let provider = Provider::groq(None);
    let result = analyze_nutrition(&provider, "2 eggs and toast").await;

    let err = result.expect_err("expected a transport failure");
    assert_eq!(err.stage(), "transport");
    assert!(matches!(
        err,
        AssistantError::Transport(ApiConnectionError::MissingApiKey)
    ));
    assert!(err.user_message().contains("GROQ_API_KEY"));
}

#[tokio::test]
#[ignore]
async fn test_successful_chat_call() {
    setup_test_environment();
    let api_key = match env::var(TEST_API_KEY_ENV_VAR) {
        Ok(key) => key,
        Err(_) => {
            println!(
                "Skipping test_successful_chat_call: {} not set.",
                TEST_API_KEY_ENV_VAR
            );
            return;
        }
    };

    let provider = Provider::groq(Some(api_key));
    let request = ChatCompletionRequest {
        model: DEFAULT_MODEL.to_string(),
        messages: vec![ChatMessage::user(
            "What is the capital of France? Respond concisely.",
        )],
        temperature: Some(0.7),
        max_tokens: Some(100),
    };

    let result = provider.call_chat_completion(request).await;
    assert!(result.is_ok(), "API call failed: {:?}", result.err());
    let response = result.unwrap();
    assert!(!response.choices.is_empty());
    assert!(!response.choices[0].message.content.is_empty());
    assert!(response.choices[0]
        .message
        .content
        .to_lowercase()
        .contains("paris"));
}

#[tokio::test]
#[ignore]
async fn test_api_error_with_invalid_key() {
    setup_test_environment();

    let provider = Provider::groq(Some(
        "this_is_a_deliberately_bad_api_key_string_for_testing".to_string(),
    ));
    let result = provider
        .call_chat_completion(simple_request("This call should fail due to invalid key."))
        .await;

    assert!(
        matches!(result, Err(ApiConnectionError::ApiError { .. })),
        "Expected ApiError, got {:?}",
        result
    );
    if let Err(ApiConnectionError::ApiError { status, .. }) = result {
        assert_eq!(
            status,
            reqwest::StatusCode::UNAUTHORIZED,
            "Expected 401 Unauthorized, got {}",
            status
        );
    }
}

#[tokio::test]
#[ignore]
async fn test_live_nutrition_analysis() {
    setup_test_environment();
    let api_key = match env::var(TEST_API_KEY_ENV_VAR) {
        Ok(key) => key,
        Err(_) => {
            println!(
                "Skipping test_live_nutrition_analysis: {} not set.",
                TEST_API_KEY_ENV_VAR
            );
            return;
        }
    };

    let provider = Provider::groq(Some(api_key));
    let result = analyze_nutrition(&provider, "2 eggs and a slice of whole wheat toast").await;
    let analysis = result.expect("live analysis should decode and validate");
    assert!(!analysis.calories.is_empty());
    assert!(!analysis.micronutrients.is_empty());
    assert!(!analysis.suggestions.is_empty());
}
