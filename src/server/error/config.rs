use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    ///
    /// Numeric settings such as `PORT` and `MAX_UPLOAD_MB` must hold valid numbers.
    #[error("Invalid value for environment variable: {0}")]
    InvalidEnvVar(String),
}
