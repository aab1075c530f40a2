//! Optimize command implementation for the Faremeter CLI.

use std::fmt;
use std::io::{Read, Write};
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use faremeter_core::{
    FlightAdapter, OptimizationRequest, OptimizationResult, find_best_price_per_km,
};
use faremeter_data::kiwi::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, KiwiAdapterConfig, KiwiFlightAdapter,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_API_KEY, ARG_BASE_URL, ARG_REQUEST, ARG_TIMEOUT_SECS, CliError, ENV_API_KEY,
    ENV_LEGACY_API_KEY, ENV_REQUEST, STDIN_PATH,
};

/// CLI arguments for the `optimize` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the destination cities of a JSON-encoded request by \
                 the cheapest one-way fare in the next 24 hours divided by \
                 the geodesic distance from the origin. The provider API \
                 key and endpoint can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Find the cheapest destination per kilometre"
)]
#[ortho_config(prefix = "FAREMETER")]
pub(crate) struct OptimizeArgs {
    /// Path to a JSON OptimizationRequest, or `-` for standard input.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Kiwi Tequila API key.
    #[arg(long = ARG_API_KEY, env = ENV_API_KEY, value_name = "key", hide_env_values = true)]
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    /// Base URL of the Tequila API.
    #[arg(long = ARG_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    /// Provider request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl OptimizeArgs {
    /// Use `fallback` as the API key when neither `--api-key` nor
    /// `FAREMETER_API_KEY` supplied one.
    pub(crate) fn with_fallback_api_key(mut self, fallback: Option<String>) -> Self {
        self.api_key = self.api_key.or(fallback);
        self
    }

    pub(crate) fn into_config(self) -> Result<OptimizeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimizeConfig::try_from(merged)
    }
}

/// Where the request JSON is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestSource {
    /// Standard input, selected with `-`.
    Stdin,
    /// A file on disk.
    File(Utf8PathBuf),
}

impl RequestSource {
    fn from_path(path: Utf8PathBuf) -> Self {
        if path.as_str() == STDIN_PATH {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}

impl fmt::Display for RequestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{path:?}"),
        }
    }
}

/// Resolved `optimize` command configuration.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct OptimizeConfig {
    pub(crate) request: RequestSource,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
}

impl fmt::Debug for OptimizeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptimizeConfig")
            .field("request", &self.request)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl TryFrom<OptimizeArgs> for OptimizeConfig {
    type Error = CliError;

    /// The API key is checked first so a misconfigured deployment is
    /// reported before anything about the request.
    fn try_from(args: OptimizeArgs) -> Result<Self, Self::Error> {
        let api_key = args
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(CliError::MissingApiKey { env: ENV_API_KEY })?;
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;
        Ok(Self {
            request: RequestSource::from_path(request_path),
            api_key,
            base_url: args.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            timeout: Duration::from_secs(args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }
}

/// Builds the flight adapter for the current invocation.
pub(crate) trait FlightAdapterBuilder {
    fn build(&self, config: &OptimizeConfig) -> Result<Box<dyn FlightAdapter>, CliError>;
}

pub(crate) struct KiwiAdapterBuilder;

impl FlightAdapterBuilder for KiwiAdapterBuilder {
    fn build(&self, config: &OptimizeConfig) -> Result<Box<dyn FlightAdapter>, CliError> {
        let adapter_config = KiwiAdapterConfig::new(config.api_key.clone())
            .with_base_url(config.base_url.clone())
            .with_timeout(config.timeout);
        let adapter =
            KiwiFlightAdapter::with_config(adapter_config).map_err(|source| {
                CliError::BuildAdapter {
                    base_url: config.base_url.clone(),
                    source,
                }
            })?;
        Ok(Box::new(adapter))
    }
}

pub(crate) fn run_optimize(args: OptimizeArgs) -> Result<(), CliError> {
    let args = args.with_fallback_api_key(std::env::var(ENV_LEGACY_API_KEY).ok());
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    run_optimize_with(args, &KiwiAdapterBuilder, &mut stdin, &mut stdout)
}

pub(crate) fn run_optimize_with(
    args: OptimizeArgs,
    builder: &dyn FlightAdapterBuilder,
    stdin: &mut dyn Read,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let result = execute_optimize(args, builder, stdin)?;
    write_result(writer, &result)
}

fn execute_optimize(
    args: OptimizeArgs,
    builder: &dyn FlightAdapterBuilder,
    stdin: &mut dyn Read,
) -> Result<OptimizationResult, CliError> {
    let config = args.into_config()?;
    let request = load_request(&config.request, stdin)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidRequest {
            request: config.request.clone(),
            source,
        })?;
    let adapter = builder.build(&config)?;
    log::info!(
        "ranking {} destinations from {}",
        request.destination_cities.len(),
        request.origin_city
    );
    let result = find_best_price_per_km(
        &request.origin_city,
        request.destination_cities.as_slice(),
        &*adapter,
    )?;
    Ok(result)
}

/// Loads a JSON-encoded [`OptimizationRequest`] from `source`.
pub(crate) fn load_request(
    source: &RequestSource,
    stdin: &mut dyn Read,
) -> Result<OptimizationRequest, CliError> {
    let payload = match source {
        RequestSource::Stdin => {
            let mut buffer = String::new();
            stdin
                .read_to_string(&mut buffer)
                .map_err(|err| CliError::ReadRequest {
                    request: source.clone(),
                    source: err,
                })?;
            buffer
        }
        RequestSource::File(path) => {
            require_request_file(path)?;
            faremeter_fs::read_utf8_file(path).map_err(|err| CliError::ReadRequest {
                request: source.clone(),
                source: err,
            })?
        }
    };
    serde_json::from_str(&payload).map_err(|err| CliError::ParseRequest {
        request: source.clone(),
        source: err,
    })
}

fn require_request_file(path: &Utf8Path) -> Result<(), CliError> {
    match faremeter_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::RequestPathNotFile {
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingRequestFile {
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectRequestPath {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write_result(writer: &mut dyn Write, result: &OptimizationResult) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(result).map_err(CliError::SerialiseResult)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OptimizeConfig, CliError> {
    let merged = OptimizeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OptimizeConfig::try_from(merged)
}
