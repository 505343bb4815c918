//! Structured film-plan generation against a hosted generative-AI model.
//!
//! The [`PlanGenerator`] trait is the seam handlers depend on; the concrete
//! [`GeminiClient`] calls the Google Generative Language API with
//! schema-constrained decoding and defensively validates the returned shape
//! before handing it back. One attempt per call -- no retry policy lives at
//! this layer.

mod client;
mod prompt;
mod schema;

pub use client::{GeminiClient, GeminiConfig};

use async_trait::async_trait;

use cineplan_core::plan::FilmPlan;

/// Errors from the generation client.
///
/// The variants are kept distinct for diagnostics; the API layer collapses
/// all of them into a single generic "generation failed" outcome.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// No provider credential is configured.
    #[error("Provider credential is missing")]
    MissingCredential,

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider error ({status}): {body}")]
    Provider {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider answered 2xx but the payload did not contain a plan
    /// conforming to the schema.
    #[error("Malformed provider response: {0}")]
    Malformed(String),
}

/// A collaborator that turns a synopsis into a structured film plan.
///
/// Injected into the application state rather than held as a global so
/// tests can substitute a fake.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Generate a plan from a non-empty synopsis.
    ///
    /// On success the returned plan is fully populated (all three fields
    /// present); empty character or scene sequences are degenerate but
    /// valid. Never touches persistent storage.
    async fn generate_plan(&self, synopsis: &str) -> Result<FilmPlan, GenAiError>;
}
