//! Error types emitted by the Faremeter CLI.
//!
//! Every variant maps onto an [`ErrorCategory`]: failures caused by the
//! request or its arguments are invalid input, everything else is internal.

use std::sync::Arc;

use camino::Utf8PathBuf;
use faremeter_core::{ErrorCategory, RankingError, RequestValidationError};
use faremeter_data::kiwi::AdapterBuildError;
use serde::Serialize;
use thiserror::Error;

use crate::optimize::RequestSource;

/// Errors emitted by the Faremeter CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// No provider API key survived configuration merging.
    #[error("API key not configured (set --api-key or {env})")]
    MissingApiKey { env: &'static str },
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set the {field} argument or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The request path does not exist.
    #[error("request file {path:?} does not exist")]
    MissingRequestFile { path: Utf8PathBuf },
    /// The request path exists but is not a file.
    #[error("request path {path:?} exists but is not a file")]
    RequestPathNotFile { path: Utf8PathBuf },
    /// The request path could not be inspected due to an IO error.
    #[error("failed to inspect request path {path:?}: {source}")]
    InspectRequestPath {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading the request failed.
    #[error("failed to read request from {request}: {source}")]
    ReadRequest {
        request: RequestSource,
        #[source]
        source: std::io::Error,
    },
    /// Request JSON could not be decoded.
    #[error("failed to parse request JSON from {request}: {source}")]
    ParseRequest {
        request: RequestSource,
        #[source]
        source: serde_json::Error,
    },
    /// The request decoded but failed validation.
    #[error("request from {request} failed validation: {source}")]
    InvalidRequest {
        request: RequestSource,
        #[source]
        source: RequestValidationError,
    },
    /// Constructing the flight adapter failed.
    #[error("failed to build flight adapter for {base_url:?}: {source}")]
    BuildAdapter {
        base_url: String,
        #[source]
        source: AdapterBuildError,
    },
    /// The ranking run failed.
    #[error(transparent)]
    Ranking(#[from] RankingError),
    /// Serialising the result failed.
    #[error("failed to serialise result: {0}")]
    SerialiseResult(#[source] serde_json::Error),
    /// Writing the result failed.
    #[error("failed to write result: {0}")]
    WriteOutput(#[source] std::io::Error),
}

impl CliError {
    /// Classify the failure for reporting.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ArgumentParsing(_)
            | Self::MissingArgument { .. }
            | Self::MissingRequestFile { .. }
            | Self::RequestPathNotFile { .. }
            | Self::InspectRequestPath { .. }
            | Self::ReadRequest { .. }
            | Self::ParseRequest { .. }
            | Self::InvalidRequest { .. } => ErrorCategory::InvalidInput,
            Self::Ranking(source) => source.category(),
            Self::Configuration(_)
            | Self::MissingApiKey { .. }
            | Self::BuildAdapter { .. }
            | Self::SerialiseResult(_)
            | Self::WriteOutput(_) => ErrorCategory::Internal,
        }
    }

    /// Process exit code: 2 for invalid input, 1 for internal failures.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::InvalidInput => 2,
            ErrorCategory::Internal => 1,
        }
    }

    /// Machine-readable form written to standard error.
    #[must_use]
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            category: self.category(),
            message: self.to_string(),
        }
    }
}

/// JSON error payload: `{"category": "...", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Failure class.
    pub category: ErrorCategory,
    /// Human-readable description.
    pub message: String,
}
