use thiserror::Error;

/// Failures talking to the browser. Never shown to the user.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("history update rejected: {0}")]
    History(String),
    #[error("section lookup failed: {0}")]
    Selector(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed portfolio config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("link and social ids must not be empty")]
    EmptyId,
    #[error("duplicate navigation link id `{0}`")]
    DuplicateLinkId(String),
    #[error("duplicate social link id `{0}`")]
    DuplicateSocialId(String),
}
