use anyhow::{bail, Result};

use super::client::{CompletionProvider, StubProvider};
use super::client_impl::{AnthropicClient, OpenAIClient};
use crate::config::Config;

/// Create a completion provider based on configuration. The API key is
/// resolved from the environment here, at construction time; nothing else
/// in the process reads it.
pub fn create_provider(config: &Config, dry_run: bool) -> Result<Box<dyn CompletionProvider>> {
    if dry_run {
        return Ok(Box::new(StubProvider::new()));
    }

    let api_key = config.get_api_key()?;
    let timeout_secs = config.llm.timeout_secs;

    match config.llm.provider.as_str() {
        "openai" => Ok(Box::new(OpenAIClient::new(
            api_key,
            config.llm.model.clone(),
            timeout_secs,
        )?)),

        "openai-compatible" => {
            let base_url = config
                .llm
                .base_url
                .clone()
                .unwrap_or_else(|| "http://localhost:11434/v1".to_string());

            Ok(Box::new(OpenAIClient::with_base_url(
                api_key,
                config.llm.model.clone(),
                base_url,
                timeout_secs,
            )?))
        }

        "anthropic" => Ok(Box::new(AnthropicClient::new(
            api_key,
            config.llm.model.clone(),
            timeout_secs,
        )?)),

        unknown => bail!("Unknown LLM provider: {}", unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_create_stub_provider_for_dry_run() {
        let config = Config::default();
        // Succeeding without an API key in the environment proves the stub
        // provider was created.
        create_provider(&config, true).unwrap();
    }

    #[test]
    fn test_create_openai_provider() {
        env::set_var("AGENTFORGE_FACTORY_OPENAI_KEY", "test_key");
        let mut config = Config::default();
        config.llm.api_key_env = Some("AGENTFORGE_FACTORY_OPENAI_KEY".to_string());
        let result = create_provider(&config, false);
        assert!(result.is_ok());
        env::remove_var("AGENTFORGE_FACTORY_OPENAI_KEY");
    }

    #[test]
    fn test_create_anthropic_provider() {
        env::set_var("AGENTFORGE_FACTORY_ANTHROPIC_KEY", "test_key");
        let mut config = Config::default();
        config.llm.provider = "anthropic".to_string();
        config.llm.model = "claude-sonnet-4-20250514".to_string();
        config.llm.api_key_env = Some("AGENTFORGE_FACTORY_ANTHROPIC_KEY".to_string());
        let result = create_provider(&config, false);
        assert!(result.is_ok());
        env::remove_var("AGENTFORGE_FACTORY_ANTHROPIC_KEY");
    }

    #[test]
    fn test_create_openai_compatible_provider_without_key() {
        let mut config = Config::default();
        config.llm.provider = "openai-compatible".to_string();
        config.llm.base_url = Some("http://localhost:11434/v1".to_string());
        config.llm.api_key_env = Some("AGENTFORGE_FACTORY_NONEXISTENT_KEY".to_string());
        let result = create_provider(&config, false);
        assert!(result.is_ok());
    }

    #[test]
    fn test_create_provider_with_unknown_provider() {
        env::set_var("AGENTFORGE_FACTORY_UNKNOWN_KEY", "test_key");
        let mut config = Config::default();
        config.llm.provider = "unknown_provider".to_string();
        config.llm.api_key_env = Some("AGENTFORGE_FACTORY_UNKNOWN_KEY".to_string());
        let result = create_provider(&config, false);
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("Unknown LLM provider"));
        }
        env::remove_var("AGENTFORGE_FACTORY_UNKNOWN_KEY");
    }

    #[test]
    fn test_create_provider_without_api_key() {
        let mut config = Config::default();
        config.llm.api_key_env = Some("AGENTFORGE_FACTORY_MISSING_KEY_99999".to_string());
        let result = create_provider(&config, false);
        assert!(
            result.is_err(),
            "Expected error when API key is missing, but got Ok(provider)"
        );
        if let Err(e) = result {
            assert!(e.to_string().contains("API key not found"));
        }
    }
}
