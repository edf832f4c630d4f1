use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::user::models::User;
use crate::user::errors::ErrorKind;
use crate::user::errors::UserError;

pub mod current_user;
pub mod health;
pub mod login;
pub mod register;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Successful response wrapped in the `{code, message, data}` envelope.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, message, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        let mut response =
            (status, Json(ApiResponseBody::<()>::new_error(status, message))).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Bearer"),
            );
        }

        response
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err.kind() {
            ErrorKind::InvalidInput => ApiError::UnprocessableEntity(err.to_string()),
            ErrorKind::ValidationConflict => ApiError::BadRequest(err.to_string()),
            ErrorKind::AuthenticationFailure | ErrorKind::TokenInvalid => {
                ApiError::Unauthorized(err.to_string())
            }
            ErrorKind::InternalFailure => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Uniform response envelope; `code` mirrors the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    code: u16,
    message: String,
    data: Option<T>,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            code: status_code.as_u16(),
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            code: status_code.as_u16(),
            message,
            data: None,
        }
    }
}

/// Public projection of a credential record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}

/// Response payload shared by register and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedResponseData {
    pub user: UserSummary,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicts_map_to_bad_request() {
        let err = ApiError::from(UserError::UsernameAlreadyExists("alice".to_string()));
        assert_eq!(
            err,
            ApiError::BadRequest("Username already exists, please choose another".to_string())
        );

        let err = ApiError::from(UserError::EmailAlreadyExists("a@x.com".to_string()));
        assert_eq!(
            err,
            ApiError::BadRequest("Email is already registered, please choose another".to_string())
        );
    }

    #[test]
    fn test_auth_failures_map_to_unauthorized() {
        assert_eq!(
            ApiError::from(UserError::InvalidCredentials),
            ApiError::Unauthorized("Incorrect username or password".to_string())
        );
        assert_eq!(
            ApiError::from(UserError::Unauthorized),
            ApiError::Unauthorized("Could not validate credentials".to_string())
        );
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let response =
            ApiError::from(UserError::DatabaseError("password=hunter2".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unauthorized_sets_challenge_header() {
        let response = ApiError::Unauthorized("Could not validate credentials".to_string())
            .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_envelope_serialization() {
        let body = ApiResponseBody::new(StatusCode::OK, "success", "payload");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"code": 200, "message": "success", "data": "payload"})
        );

        let body = ApiResponseBody::<()>::new_error(StatusCode::BAD_REQUEST, "nope".to_string());
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"code": 400, "message": "nope", "data": null})
        );
    }
}
