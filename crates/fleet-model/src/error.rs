use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid part catalog: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, FleetError>;
