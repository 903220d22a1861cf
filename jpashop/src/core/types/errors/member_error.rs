use salvo::http::StatusCode;
use salvo::oapi::{self, EndpointOutRegister, ToSchema};
use salvo::prelude::*;
use thiserror::Error;
use validator::ValidationErrors;

use super::general::GeneralError;
use super::{BadRequestError, ConflictError, InternalError, NotFoundError};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MemberError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Member with ID {0} not found")]
    MemberNotFound(i32),

    #[error("Member named {0} already exists")]
    DuplicateMember(String),

    #[error("An unexpected error occurred: {0}")]
    UnexpectedError(String),

    #[error("General error: {0}")]
    General(#[from] GeneralError),
}

impl From<ValidationErrors> for MemberError {
    fn from(errors: ValidationErrors) -> Self {
        MemberError::Validation(errors.to_string())
    }
}

impl MemberError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            MemberError::Validation(_) => StatusCode::BAD_REQUEST,
            MemberError::MemberNotFound(_) => StatusCode::NOT_FOUND,
            MemberError::DuplicateMember(_) => StatusCode::CONFLICT,
            MemberError::UnexpectedError(_) | MemberError::General(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[async_trait]
impl Writer for MemberError {
    async fn write(self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        res.status_code(status);
        res.render(Json(serde_json::json!({ "message": self.to_string() })));
    }
}

impl EndpointOutRegister for MemberError {
    fn register(components: &mut oapi::Components, operation: &mut oapi::Operation) {
        operation.responses.insert(
            StatusCode::BAD_REQUEST.as_str(),
            oapi::Response::new("Request failed validation")
                .add_content("application/json", BadRequestError::to_schema(components)),
        );
        operation.responses.insert(
            StatusCode::NOT_FOUND.as_str(),
            oapi::Response::new("Member not found")
                .add_content("application/json", NotFoundError::to_schema(components)),
        );
        operation.responses.insert(
            StatusCode::CONFLICT.as_str(),
            oapi::Response::new("Member already exists")
                .add_content("application/json", ConflictError::to_schema(components)),
        );
        operation.responses.insert(
            StatusCode::INTERNAL_SERVER_ERROR.as_str(),
            oapi::Response::new("Unexpected or general error")
                .add_content("application/json", InternalError::to_schema(components)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            MemberError::Validation("name".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            MemberError::MemberNotFound(7).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            MemberError::DuplicateMember("spring".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            MemberError::General(GeneralError::DbConnectionError).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            MemberError::MemberNotFound(7).to_string(),
            "Member with ID 7 not found"
        );
        assert_eq!(
            MemberError::from(GeneralError::DbConnectionError).to_string(),
            "General error: Database connection failed"
        );
    }
}
