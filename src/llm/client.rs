use anyhow::Result;
use async_trait::async_trait;

/// One round trip to a text-completion service. Implementations are
/// interchangeable; failures are opaque to callers (auth, rate limit,
/// network and policy errors all surface the same way).
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str, max_tokens: u32) -> Result<String>;
}

/// Canned-output provider for `--dry-run` and tests. Picks a plausible
/// artifact body based on which persona is asking.
pub struct StubProvider;

impl Default for StubProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StubProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, system: &str, _prompt: &str, _max_tokens: u32) -> Result<String> {
        if system.contains("API development") {
            Ok(r#"from fastapi import APIRouter

router = APIRouter(prefix="/api/v1")


@router.post("/execute")
async def execute(payload: dict) -> dict:
    """Stubbed execute endpoint."""
    return {}
"#
            .to_string())
        } else if system.contains("API testing") {
            Ok(r#"from fastapi.testclient import TestClient

from app.main import app

client = TestClient(app)


def test_health():
    response = client.get("/health")
    assert response.status_code == 200
"#
            .to_string())
        } else if system.contains("software documentation") {
            Ok("# Agent\n\nStubbed README generated without a completion provider.\n".to_string())
        } else {
            Ok("Task: stubbed agent prompt generated without a completion provider.\n".to_string())
        }
    }
}
