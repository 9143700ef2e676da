//! Error type shared by the library and both executables.

use miette::Diagnostic;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum SolverError {
    /// Missing or unparsable user input.
    #[error("invalid argument: {0}")]
    #[diagnostic(code(poisson::invalid_argument))]
    InvalidArgument(String),

    #[error("grid dimension {n} is outside the supported range")]
    #[diagnostic(
        code(poisson::invalid_dimension),
        help("use at least 2 nodes per side, and few enough for memory and the i32 header")
    )]
    InvalidDimension { n: usize },

    #[error("I/O failure on {path:?}")]
    #[diagnostic(code(poisson::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A field file whose header and length do not agree.
    #[error("malformed field file: {0}")]
    #[diagnostic(code(poisson::malformed_field))]
    MalformedField(String),

    #[error(transparent)]
    #[diagnostic(code(poisson::config_error))]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    #[diagnostic(code(poisson::image_error))]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    #[diagnostic(code(poisson::telemetry_error))]
    Telemetry(#[from] tracing::subscriber::SetGlobalDefaultError),
}

impl SolverError {
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        SolverError::Io {
            path: path.into(),
            source,
        }
    }
}
