use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to parse analysis result: {0}")]
    Parse(String),
}
