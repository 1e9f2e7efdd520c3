use thiserror::Error;

#[remain::sorted]
#[derive(Debug, Error)]
pub enum ChangelogErrors {
    #[error(transparent)]
    DoctaviousTemplatingError(#[from] doctavious_templating::TemplatingError),

    /// Error that may occur while I/O operations.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("json serialize/deserialize error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Errors that may occur when deserializing types from TOML format.
    #[error("toml deserialize error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    /// Errors that may occur when serializing types to TOML format.
    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type ChangelogResult<T> = Result<T, ChangelogErrors>;
