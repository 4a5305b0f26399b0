use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiglotError {
    #[error("Could not load config file at '{path}': {message}")]
    ConfigRead { path: String, message: String },
    #[error("Config file at '{path}' is not valid JSON: {message}")]
    ConfigParse { path: String, message: String },
    #[error("Config error: {0}")]
    Config(String),
    #[error("Could not read translation source at '{path}': {message}")]
    SourceRead { path: String, message: String },
    #[error("Translations '{first}' and '{second}' both resolve to id '{id}'")]
    IdentityCollision {
        first: String,
        second: String,
        id: String,
    },
    #[error("Reference translation id '{0}' not found among imported document sets")]
    ReferenceNotFound(String),
    #[error("Could not write output file at '{path}': {message}")]
    OutputWrite { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, DiglotError>;
