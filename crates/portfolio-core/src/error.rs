use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Invalid observer configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    #[error("Scroll spy has been disposed")]
    Disposed,
}
