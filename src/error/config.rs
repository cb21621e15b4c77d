use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot cannot start without it. `.env.example` lists every variable
    /// the application reads.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
