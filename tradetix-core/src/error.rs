use crate::{dto::output::ErrorEnvelope, repository};
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jwt_auth::error::MissingRoleError;

///
/// Resource the error refers to
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Entity {
    User,
    Ticket,
    Event,
    Listing,
    Transaction,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} not found")]
    NotFound(Entity),

    #[error("{1}")]
    Validation(Entity, &'static str),

    #[error("{0} already exists")]
    AlreadyExists(Entity),

    #[error("ticket already sold")]
    TicketAlreadySold,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("please authenticate")]
    SessionInvalid,

    #[error("not allowed to modify this {0}")]
    Forbidden(Entity),

    #[error("auth error: {0}")]
    Auth(#[from] MissingRoleError),

    #[error("invalid request: {1}")]
    Request(StatusCode, String),

    #[error("password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    ///
    /// This error should be returned only in situations
    /// that should never occur when system is setup correctly.
    ///
    #[error("unexpected error: {0}")]
    UnexpectedError(#[from] anyhow::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Validation(_, _) => StatusCode::BAD_REQUEST,
            Error::AlreadyExists(_) => StatusCode::CONFLICT,
            Error::TicketAlreadySold => StatusCode::CONFLICT,
            Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Error::SessionInvalid => StatusCode::UNAUTHORIZED,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::Auth(_) => StatusCode::FORBIDDEN,
            Error::Request(status, _) => *status,
            Error::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn entity(&self) -> Option<Entity> {
        match self {
            Error::NotFound(entity)
            | Error::Validation(entity, _)
            | Error::AlreadyExists(entity)
            | Error::Forbidden(entity) => Some(*entity),
            Error::TicketAlreadySold => Some(Entity::Ticket),
            Error::InvalidCredentials
            | Error::SessionInvalid
            | Error::Auth(_)
            | Error::PasswordHash(_)
            | Error::Token(_) => Some(Entity::User),
            Error::Request(_, _) | Error::Database(_) | Error::UnexpectedError(_) => None,
        }
    }

    fn envelope(&self) -> ErrorEnvelope {
        let status = self.status();
        let kind = status
            .canonical_reason()
            .unwrap_or("ERROR")
            .to_uppercase()
            .replace(' ', "_");
        let message = match self.entity() {
            Some(entity) => format!("{kind}: {entity}"),
            None => kind,
        };
        let error = match status.is_server_error() {
            true => "Internal server error".to_string(),
            false => self.to_string(),
        };

        ErrorEnvelope {
            status,
            message,
            error,
        }
    }

    ///
    /// Rejections keep their status except 422
    /// which is reported as malformed request
    ///
    fn rejection_status(status: StatusCode) -> StatusCode {
        match status {
            StatusCode::UNPROCESSABLE_ENTITY => StatusCode::BAD_REQUEST,
            status => status,
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(value: JsonRejection) -> Self {
        Error::Request(Self::rejection_status(value.status()), value.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(value: PathRejection) -> Self {
        Error::Request(Self::rejection_status(value.status()), value.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(value: QueryRejection) -> Self {
        Error::Request(Self::rejection_status(value.status()), value.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        self.envelope().into_response()
    }
}
