use tracing::{debug, info};

use crate::error::Error;
use crate::llm::client::CompletionProvider;
use crate::llm::prompts;
use crate::model::{AgentSpec, ArtifactKind, GeneratedArtifact};

/// Drives one completion call per artifact kind and collects the results.
///
/// Calls run strictly one after another; the output of one kind never feeds
/// the next. The first provider failure aborts the run: results produced
/// before it are dropped and the caller gets a single `Generation` error
/// naming the kind that failed.
pub struct ArtifactGenerator {
    provider: Box<dyn CompletionProvider>,
}

impl ArtifactGenerator {
    pub fn new(provider: Box<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Generate all four artifacts for `spec`, in the fixed kind order.
    pub async fn generate_all(&self, spec: &AgentSpec) -> Result<Vec<GeneratedArtifact>, Error> {
        let mut files = Vec::with_capacity(ArtifactKind::ALL.len());

        for kind in ArtifactKind::ALL {
            info!("Generating {} for agent '{}'", kind, spec.name);
            let prompt = prompts::build(kind, spec);
            debug!(
                "Prompt for {} is {} characters, budget {} tokens",
                kind,
                prompt.user.len(),
                prompt.max_tokens
            );

            let content = self
                .provider
                .complete(prompt.system, &prompt.user, prompt.max_tokens)
                .await
                .map_err(|err| Error::Generation {
                    kind,
                    message: format!("{:#}", err),
                })?;

            files.push(GeneratedArtifact {
                path: kind.path().to_string(),
                content: content.trim().to_string(),
            });
        }

        info!(
            "Generated {} files for agent '{}'",
            files.len(),
            spec.name
        );
        Ok(files)
    }
}
