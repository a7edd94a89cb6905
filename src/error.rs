use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerationError>;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// A recorded operation does not have the documented shape
    #[error("invalid operation {index} in run '{run}': {reason}")]
    InvalidOperation {
        run: String,
        index: usize,
        reason: String,
    },

    /// Generated source could not be read back into page object metadata
    #[error("malformed page object metadata: {0}")]
    Metadata(String),

    #[error("JSON error ({context}): {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("YAML error ({context}): {source}")]
    Yaml {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },
}
