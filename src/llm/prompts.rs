//! Prompt templates for the four generated artifacts.
//!
//! Each artifact kind owns a fixed persona (system message), a fixed user
//! prompt template, and a fixed token budget. Templates interpolate the
//! agent name, its description, and the two schemas pretty-printed as JSON;
//! nothing here depends on prior generation results.

use crate::model::{AgentSpec, ArtifactKind};

const CONTROLLER_SYSTEM_MESSAGE: &str = "You are an expert in API development with FastAPI. \
Your task is to generate a controller.py file for an agent according to the specifications. \
The code must be well structured, commented, and follow best practices.";

const TESTS_SYSTEM_MESSAGE: &str = "You are an expert in API testing with pytest. \
Your task is to generate a test_main.py file to test an agent according to the specifications.";

const README_SYSTEM_MESSAGE: &str = "You are an expert in software documentation. \
Your task is to generate a README.md file for an agent according to the specifications.";

const PROMPT_SYSTEM_MESSAGE: &str = "You are an expert in prompts for AI. \
Your task is to generate a detailed prompt file for an agent according to the specifications.";

/// Everything one completion call needs.
pub struct Prompt {
    pub system: &'static str,
    pub user: String,
    pub max_tokens: u32,
}

/// Render the prompt for one artifact kind. Pure function of its inputs.
pub fn build(kind: ArtifactKind, spec: &AgentSpec) -> Prompt {
    match kind {
        ArtifactKind::Controller => Prompt {
            system: CONTROLLER_SYSTEM_MESSAGE,
            user: controller_prompt(spec),
            max_tokens: 2000,
        },
        ArtifactKind::Tests => Prompt {
            system: TESTS_SYSTEM_MESSAGE,
            user: tests_prompt(spec),
            max_tokens: 1500,
        },
        ArtifactKind::Readme => Prompt {
            system: README_SYSTEM_MESSAGE,
            user: readme_prompt(spec),
            max_tokens: 1000,
        },
        ArtifactKind::PromptFile => Prompt {
            system: PROMPT_SYSTEM_MESSAGE,
            user: prompt_file_prompt(spec),
            max_tokens: 1000,
        },
    }
}

/// The fixed persona string for one artifact kind.
pub fn system_message(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Controller => CONTROLLER_SYSTEM_MESSAGE,
        ArtifactKind::Tests => TESTS_SYSTEM_MESSAGE,
        ArtifactKind::Readme => README_SYSTEM_MESSAGE,
        ArtifactKind::PromptFile => PROMPT_SYSTEM_MESSAGE,
    }
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

fn controller_prompt(spec: &AgentSpec) -> String {
    let mut prompt = format!(
        r#"Create a controller.py for an agent named '{}' that {}.

The agent receives the following input data:
{}

And must return:
{}

Requirements:
- Use FastAPI to create an /execute endpoint that receives the input model and returns the output model
- Implement the business logic needed to process the input data
- Add appropriate error handling
- Use docstrings to document the code
- Do not include unnecessary imports

Return only the code, no additional explanation."#,
        spec.name,
        spec.description,
        pretty(&spec.input_schema),
        pretty(&spec.output_schema),
    );

    if let Some(ref extra) = spec.extra_instructions {
        prompt.push_str(&format!("\n\nAdditional instructions: {}", extra));
    }

    prompt
}

fn tests_prompt(spec: &AgentSpec) -> String {
    format!(
        r#"Create a test_main.py file to test an agent named '{}' that {}.

The agent receives the following input data:
{}

And returns:
{}

Requirements:
- Use pytest and FastAPI's TestClient
- Test the /health endpoint
- Test the /api/v1/execute endpoint with example data
- Validate the output schema
- Use fixtures where appropriate

Return only the code, no additional explanation."#,
        spec.name,
        spec.description,
        pretty(&spec.input_schema),
        pretty(&spec.output_schema),
    )
}

fn readme_prompt(spec: &AgentSpec) -> String {
    format!(
        r#"Create a README.md for an agent named '{}' that {}.

The agent receives the following input data:
{}

And returns:
{}

Requirements:
- Clear title and description
- Installation instructions
- Usage instructions with example input and output
- Explanation of the endpoint
- Use proper markdown

Return only the README content, no additional explanation."#,
        spec.name,
        spec.description,
        pretty(&spec.input_schema),
        pretty(&spec.output_schema),
    )
}

fn prompt_file_prompt(spec: &AgentSpec) -> String {
    let mut prompt = format!(
        r#"Create a prompt file for an agent named '{}' that {}.

The agent receives the following input data:
{}

And returns:
{}

The prompt must include:
- Description of the agent's task
- Expected behavior
- Limitations and constraints
- Example inputs and outputs
- Specific instructions about the processing

Return only the prompt content, no additional explanation."#,
        spec.name,
        spec.description,
        pretty(&spec.input_schema),
        pretty(&spec.output_schema),
    );

    if let Some(ref extra) = spec.extra_instructions {
        prompt.push_str(&format!("\n\nAdditional instructions: {}", extra));
    }

    prompt
}
