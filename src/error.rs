//! Error types shared by the model layer, the planner and the binary.

use thiserror::Error;

/// Main error type of the crate.
///
/// Running out of frontier without finding a goal is not an error, see
/// [`crate::search::SearchResult::Exhausted`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A planner or model was assembled from missing or invalid parts.
    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    /// An operation needs a capability the underlying model does not have,
    /// e.g. enumerating a transition distribution of a sample-only model.
    #[error("model capability missing: {message}")]
    ModelCapability { message: String },

    /// A transition source failed to produce a successor. This aborts the
    /// search that triggered it.
    #[error("transition failed: {message}")]
    Transition { message: String },

    #[error("failed to parse {what}: {message}")]
    Parse { what: String, message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn model_capability(message: impl Into<String>) -> Self {
        Self::ModelCapability {
            message: message.into(),
        }
    }

    pub fn transition(message: impl Into<String>) -> Self {
        Self::Transition {
            message: message.into(),
        }
    }

    pub fn parse(what: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            what: what.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
