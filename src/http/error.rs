//! Uniform error responses for the HTTP surface.
//!
//! Every handler error is funnelled into [`ApiError`] and rendered as a
//! structured JSON body:
//!
//! ```json
//! {"error": {"code": "not_found", "message": "task not found"}}
//! ```
//!
//! The `From` impls translate service-layer errors into status codes.
//! Internal failures are logged with their detail and reported to the
//! client with a generic message.

use crate::account::services::UserDirectoryError;
use crate::account::ports::UserRepositoryError;
use crate::auth::TokenError;
use crate::project::domain::ProjectDomainError;
use crate::project::ports::ProjectRepositoryError;
use crate::project::services::ProjectCatalogError;
use crate::task::ports::TaskRepositoryError;
use crate::task::services::TaskBoardError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// An error response carrying an HTTP status and a client-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400: the request was well-formed but failed validation.
    Validation(String),
    /// 401: missing or invalid credentials.
    Unauthorized(String),
    /// 403: the authenticated requester lacks permission.
    Forbidden(String),
    /// 404: the resource does not exist or is not visible.
    NotFound(String),
    /// 409: the request conflicts with current state.
    Conflict(String),
    /// 500: an unexpected internal failure, detail withheld.
    Internal,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    code: &'a str,
    message: &'a str,
}

impl ApiError {
    /// The HTTP status code for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The machine-readable error code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Unauthorized(_) => "unauthorized",
            Self::Forbidden(_) => "forbidden",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::Internal => "internal_error",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Validation(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::NotFound(msg)
            | Self::Conflict(msg) => msg,
            Self::Internal => "internal server error",
        }
    }

    fn internal(err: &dyn std::fmt::Display) -> Self {
        tracing::error!(error = %err, "internal error while handling request");
        Self::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: ErrorDetail {
                code: self.code(),
                message: self.message(),
            },
        });
        (self.status(), body).into_response()
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Issue(_) => Self::internal(&err),
            TokenError::Invalid => Self::Unauthorized(err.to_string()),
        }
    }
}

impl From<UserDirectoryError> for ApiError {
    fn from(err: UserDirectoryError) -> Self {
        match err {
            UserDirectoryError::Domain(domain) => Self::Validation(domain.to_string()),
            UserDirectoryError::Users(users) => users.into(),
            UserDirectoryError::InvalidCredentials => Self::Unauthorized(err.to_string()),
            UserDirectoryError::StaffOnly => Self::Forbidden(err.to_string()),
            UserDirectoryError::Password(_)
            | UserDirectoryError::Projects(_)
            | UserDirectoryError::Tasks(_) => Self::internal(&err),
        }
    }
}

impl From<ProjectCatalogError> for ApiError {
    fn from(err: ProjectCatalogError) -> Self {
        match err {
            ProjectCatalogError::Domain(domain) => domain.into(),
            ProjectCatalogError::Repository(projects) => projects.into(),
            ProjectCatalogError::Users(users) => match users {
                // Stale member references are an internal inconsistency,
                // not a client mistake.
                UserRepositoryError::Persistence(_) | UserRepositoryError::NotFound(_) => {
                    Self::internal(&users)
                }
                other => other.into(),
            },
            ProjectCatalogError::Board(board) => board.into(),
            ProjectCatalogError::AccessDenied(_) => Self::Forbidden(err.to_string()),
            ProjectCatalogError::UnknownUser(_) => Self::NotFound(err.to_string()),
        }
    }
}

impl From<TaskBoardError> for ApiError {
    fn from(err: TaskBoardError) -> Self {
        match err {
            TaskBoardError::Domain(domain) => Self::Validation(domain.to_string()),
            TaskBoardError::Repository(tasks) => tasks.into(),
            TaskBoardError::Projects(projects) => projects.into(),
            TaskBoardError::Users(users) => Self::internal(&users),
            TaskBoardError::UnknownProject(_) | TaskBoardError::NotVisible(_) => {
                Self::NotFound(err.to_string())
            }
            TaskBoardError::NotProjectMember(_) => Self::Forbidden(err.to_string()),
            TaskBoardError::AssigneeNotMember { .. } => Self::Validation(err.to_string()),
        }
    }
}

impl From<ProjectDomainError> for ApiError {
    fn from(err: ProjectDomainError) -> Self {
        match err {
            ProjectDomainError::AlreadyMember(_) | ProjectDomainError::NotAMember(_) => {
                Self::Conflict(err.to_string())
            }
            ProjectDomainError::EmptyProjectName | ProjectDomainError::ProjectNameTooLong(_) => {
                Self::Validation(err.to_string())
            }
        }
    }
}

impl From<UserRepositoryError> for ApiError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::DuplicateUsername(_) => Self::Validation(err.to_string()),
            UserRepositoryError::NotFound(_) => Self::NotFound(err.to_string()),
            UserRepositoryError::DuplicateUser(_) | UserRepositoryError::Persistence(_) => {
                Self::internal(&err)
            }
        }
    }
}

impl From<ProjectRepositoryError> for ApiError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound(_) => Self::NotFound(err.to_string()),
            ProjectRepositoryError::DuplicateProject(_)
            | ProjectRepositoryError::Persistence(_) => Self::internal(&err),
        }
    }
}

impl From<TaskRepositoryError> for ApiError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(_) => Self::NotFound(err.to_string()),
            TaskRepositoryError::DuplicateTask(_) | TaskRepositoryError::Persistence(_) => {
                Self::internal(&err)
            }
        }
    }
}
