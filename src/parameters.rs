use crate::error::SolverError;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "poisson.toml";

/// Environment variable naming an alternative settings file.
pub const CONFIG_PATH_VAR: &str = "POISSON_CONFIG";

/// Relaxation is configurable.
/// These are all the parameters, the grid size and output path
/// only come from the command line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SolverParameters {
    /// Stop once the summed absolute change of a sweep is at most this.
    pub tolerance: f64,

    /// Optional hard stop. Without it the loop only ends on convergence,
    /// so an unreachable tolerance never returns.
    #[serde(default)]
    pub max_iterations: Option<usize>,

    /// Emit a progress event every this many sweeps, 0 disables it.
    pub report_every: usize,

    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl std::default::Default for SolverParameters {
    fn default() -> Self {
        SolverParameters {
            tolerance: 0.0001,
            max_iterations: None,
            report_every: 1000,
            log_level: "warn".to_string(),
        }
    }
}

impl SolverParameters {
    /// Defaults, then the optional settings file, then `POISSON_*`
    /// environment variables.
    pub fn load() -> Result<Self, SolverError> {
        let path = std::env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    /// Same as `load`, reading the settings file at `path` if it exists.
    pub fn load_from(path: &Path) -> Result<Self, SolverError> {
        let defaults = SolverParameters::default();
        let settings = Config::builder()
            .set_default("tolerance", defaults.tolerance)?
            .set_default("report_every", defaults.report_every as u64)?
            .set_default("log_level", defaults.log_level)?
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("POISSON").try_parsing(true))
            .build()?;
        let parameters: SolverParameters = settings.try_deserialize()?;
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn validate(&self) -> Result<(), SolverError> {
        let tolerance_ok = self.tolerance.is_finite() && self.tolerance > 0.0;
        if !tolerance_ok {
            return Err(SolverError::InvalidArgument(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == Some(0) {
            return Err(SolverError::InvalidArgument(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
