//! Request-scoped value types: the agent description received from the
//! caller and the artifacts produced for it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Description of the agent to scaffold, as submitted by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentSpec {
    #[serde(rename = "agent_name")]
    pub name: String,
    #[serde(rename = "agent_description")]
    pub description: String,
    pub input_schema: Value,
    pub output_schema: Value,
    /// Extra free-text instructions, forwarded verbatim to the controller
    /// and prompt-file generation prompts.
    #[serde(rename = "agent_prompt", default)]
    pub extra_instructions: Option<String>,
}

/// The four artifacts generated for every agent, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Controller,
    Tests,
    Readme,
    PromptFile,
}

impl ArtifactKind {
    /// Generation order is fixed: controller, tests, README, prompt file.
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Controller,
        ArtifactKind::Tests,
        ArtifactKind::Readme,
        ArtifactKind::PromptFile,
    ];

    /// Path the artifact occupies in the generated agent's repository.
    pub fn path(&self) -> &'static str {
        match self {
            ArtifactKind::Controller => "app/controllers/agent_controller.py",
            ArtifactKind::Tests => "tests/test_main.py",
            ArtifactKind::Readme => "README.md",
            ArtifactKind::PromptFile => "agent_prompt.txt",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::Controller => "controller",
            ArtifactKind::Tests => "tests",
            ArtifactKind::Readme => "README",
            ArtifactKind::PromptFile => "prompt file",
        };
        write!(f, "{}", name)
    }
}

/// One generated file: where it belongs and what the provider produced.
/// Content is free text; nothing here validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub path: String,
    pub content: String,
}
