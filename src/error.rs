use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("invalid context: {0}")]
    InvalidContext(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
