//! Narrative generation boundary contract.

use async_trait::async_trait;
use thiserror::Error;

/// MIME type that asks the boundary for structured output.
pub const JSON_MIME_TYPE: &str = "application/json";

/// A single structured-generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Standing instruction describing the persona and output duties.
    pub system_instruction: String,
    /// Per-subject prompt text.
    pub prompt: String,
    /// Schema the response must satisfy exactly.
    pub response_schema: serde_json::Value,
    /// Requested response format.
    pub response_mime_type: String,
}

/// Every way the narrative boundary can fail. Callers treat all variants
/// alike: the boundary is unavailable for this cycle.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// No credential is configured for the service.
    #[error("narrative service credential is missing")]
    MissingCredential,

    /// The request never produced an HTTP response.
    #[error("narrative service transport failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("narrative service returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics only.
        body: String,
    },

    /// The service refused to generate (safety block or similar).
    #[error("narrative service rejected the request: {0}")]
    Rejected(String),

    /// The service answered without any text.
    #[error("narrative service returned an empty response")]
    EmptyResponse,

    /// The text could not be parsed as the expected structure.
    #[error("narrative response is malformed: {0}")]
    Malformed(String),

    /// The text parsed but violates a report invariant.
    #[error("narrative response violates schema: {0}")]
    SchemaViolation(String),
}

/// The external generative text service.
#[async_trait]
pub trait NarrativeGateway: Send + Sync {
    /// Sends one request and returns the raw response text. Implementations
    /// must not retry.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, BoundaryError>;
}
