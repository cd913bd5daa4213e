use blogsmith::core::config::AppConfig;
use blogsmith::errors::BlogError;
use blogsmith::tts::{TtsClient, locale_code};

fn test_config() -> AppConfig {
    AppConfig {
        inference_url: "http://127.0.0.1:11434".to_string(),
        model: "llama2".to_string(),
        tts_url: "http://127.0.0.1:1/translate_tts".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
    }
}

#[test]
fn test_locale_lookup_matches_form_languages() {
    assert_eq!(locale_code("English"), Some("en"));
    assert_eq!(locale_code("Spanish"), Some("es"));
    assert_eq!(locale_code("French"), Some("fr"));
    assert_eq!(locale_code("German"), Some("de"));
    assert_eq!(locale_code("Italian"), None);
}

#[tokio::test]
async fn test_synthesize_rejects_unsupported_language_before_any_io() {
    let client = TtsClient::new(&test_config()).unwrap();

    // The locale check happens before any network call, so this fails fast
    // with the visible, non-fatal condition.
    let err = client.synthesize("Ciao a tutti", "Italian").await.unwrap_err();
    match err {
        BlogError::UnsupportedLanguageForAudio(language) => assert_eq!(language, "Italian"),
        other => panic!("expected UnsupportedLanguageForAudio, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unsupported_language_message_names_the_alternatives() {
    let client = TtsClient::new(&test_config()).unwrap();
    let err = client.synthesize("text", "Portuguese").await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Portuguese"));
    assert!(message.contains("English, Spanish, French, or German"));
}
