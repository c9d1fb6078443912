use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::dtos::MessageOut;

/// Everything the post service can reject a request with.
///
/// The `Display` text is sent to clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostError {
    #[error("Email already registered.")]
    EmailAlreadyRegistered,
    #[error("Invalid email format.")]
    InvalidEmailFormat,
    #[error("User ID not found.")]
    UserNotFound,
    #[error("Content cannot be empty.")]
    EmptyContent,
    #[error("Post ID not found.")]
    PostNotFound,
    #[error("Unauthorized to delete this post.")]
    Unauthorized,
    #[error("No posts found for this user.")]
    NoPostsFound,
}

impl ResponseError for PostError {
    fn status_code(&self) -> StatusCode {
        match self {
            PostError::EmailAlreadyRegistered
            | PostError::InvalidEmailFormat
            | PostError::EmptyContent => StatusCode::BAD_REQUEST,
            PostError::Unauthorized => StatusCode::FORBIDDEN,
            PostError::UserNotFound | PostError::PostNotFound | PostError::NoPostsFound => {
                StatusCode::NOT_FOUND
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(MessageOut::new(status.as_u16(), self.to_string()))
    }
}
