use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

pub const BAD_REQUEST_CODE: &str = "err_bad_request";

#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable description
    pub description: String,
}

impl ErrorResponse {
    pub fn new(code: &str, description: &str) -> Self {
        Self {
            code: code.to_string(),
            description: description.to_string(),
        }
    }

    /// Body for requests rejected before reaching the service.
    pub fn bad_request(err: &poem::Error) -> Json<Self> {
        Json(Self::new(BAD_REQUEST_CODE, &err.to_string()))
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
