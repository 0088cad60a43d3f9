use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

/// Unwraps a store result, letting the caller handle the error cases it
/// knows about; anything unlisted is logged and collapsed to `Unexpected`.
#[macro_export]
macro_rules! unwrap_expect {
    { $result:expr, $($pat:pat $(if $guard:expr)? => $arm:expr),+ $(,)? } => {
        match $result {
            Ok(value) => value,
            $($pat $(if $guard)? => $arm,)+
            Err(e) => return $crate::common::error::unexpected(e),
        }
    };
}
pub use crate::unwrap_expect;

#[derive(Debug)]
pub enum AppError {
    Unexpected,
    Unauthorized,
    DecodingRequestFailed,

    UsersNotFound,
    UsersAlreadyExists,
    UsersInvalidCredentials,
    UsersInvalidUsername,
    UsersInvalidPassword,
    UsersForbidden,

    MessagesNotFound,
    MessagesNotRecipient,
    MessagesNotParticipant,
    MessagesAlreadyRead,
    MessagesInvalidLength,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",
            AppError::Unauthorized => "unauthorized",
            AppError::DecodingRequestFailed => "decoding_request_failed",

            AppError::UsersNotFound => "users.not_found",
            AppError::UsersAlreadyExists => "users.already_exists",
            AppError::UsersInvalidCredentials => "users.invalid_credentials",
            AppError::UsersInvalidUsername => "users.invalid_username",
            AppError::UsersInvalidPassword => "users.invalid_password",
            AppError::UsersForbidden => "users.forbidden",

            AppError::MessagesNotFound => "messages.not_found",
            AppError::MessagesNotRecipient => "messages.not_recipient",
            AppError::MessagesNotParticipant => "messages.not_participant",
            AppError::MessagesAlreadyRead => "messages.already_read",
            AppError::MessagesInvalidLength => "messages.invalid_length",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",
            AppError::Unauthorized => "You must be logged in to perform this action.",
            AppError::DecodingRequestFailed => "Failed to decode request",

            AppError::UsersNotFound => "This user does not exist.",
            AppError::UsersAlreadyExists => "This username is already taken.",
            AppError::UsersInvalidCredentials => {
                "You have entered an invalid username or password."
            }
            AppError::UsersInvalidUsername => {
                "Usernames must be 1-50 characters (letters, digits, `_`, `-` or `.`)."
            }
            AppError::UsersInvalidPassword => "Passwords must not be empty.",
            AppError::UsersForbidden => {
                "You do not have permission to access this user's messages."
            }

            AppError::MessagesNotFound => "This message does not exist.",
            AppError::MessagesNotRecipient => {
                "Only the recipient of a message can mark it as read."
            }
            AppError::MessagesNotParticipant => {
                "You do not have permission to view this message."
            }
            AppError::MessagesAlreadyRead => "This message has already been marked as read.",
            AppError::MessagesInvalidLength => {
                "Your message was too short/long. It has not been sent."
            }
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::DecodingRequestFailed
            | AppError::UsersInvalidUsername
            | AppError::UsersInvalidPassword
            | AppError::MessagesInvalidLength => StatusCode::BAD_REQUEST,

            AppError::Unauthorized | AppError::UsersInvalidCredentials => StatusCode::UNAUTHORIZED,

            AppError::UsersForbidden
            | AppError::MessagesNotRecipient
            | AppError::MessagesNotParticipant => StatusCode::FORBIDDEN,

            AppError::UsersNotFound | AppError::MessagesNotFound => StatusCode::NOT_FOUND,

            AppError::UsersAlreadyExists | AppError::MessagesAlreadyRead => StatusCode::CONFLICT,

            AppError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            code: self.code(),
            message: self.message(),
        };
        (status, Json(response))
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(AppError::UsersNotFound.http_status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::MessagesNotFound.http_status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::UsersAlreadyExists.http_status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::MessagesAlreadyRead.http_status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::UsersForbidden.http_status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::MessagesNotRecipient.http_status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::MessagesNotParticipant.http_status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(AppError::Unauthorized.http_status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::UsersInvalidCredentials.http_status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::DecodingRequestFailed.http_status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MessagesInvalidLength.http_status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unexpected.http_status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_bodies_carry_stable_codes() {
        let (status, Json(body)) = AppError::UsersAlreadyExists.response_parts();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.code, "users.already_exists");

        let (status, Json(body)) = AppError::MessagesNotRecipient.response_parts();
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.code, "messages.not_recipient");
    }

    #[test]
    fn store_errors_collapse_to_unexpected() {
        let e = AppError::from(sqlx::Error::PoolClosed);
        assert!(matches!(e, AppError::Unexpected));
    }
}
