use salvo::oapi::ToSchema;
use serde::Serialize;

pub mod general;
pub mod member_error;

#[derive(Debug, ToSchema, Serialize)]
#[salvo(schema(example = json!({"message": ""})))]
struct NotFoundError {
    message: String,
}

#[derive(Debug, ToSchema, Serialize)]
#[salvo(schema(example = json!({"message": ""})))]
struct BadRequestError {
    message: String,
}

#[derive(Debug, ToSchema, Serialize)]
#[salvo(schema(example = json!({"message": ""})))]
struct ConflictError {
    message: String,
}

#[derive(Debug, ToSchema, Serialize)]
#[salvo(schema(example = json!({"message": ""})))]
struct InternalError {
    message: String,
}
