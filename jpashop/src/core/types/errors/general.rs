use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeneralError {
    #[error("Database connection failed")]
    DbConnectionError,

    #[error("{0} service is not available")]
    ServiceUnavailable(&'static str),
}
