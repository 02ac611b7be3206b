use super::User;
use crate::{auth::Role, dto::input, repository};
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Inserts user together with his first session token.
    ///
    /// ### Errors
    /// - [repository::Error::InsertUniqueViolation] when email is already taken
    ///
    #[allow(clippy::too_many_arguments)]
    async fn insert(
        &self,
        id: ObjectId,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
        token: &str,
        created_at: OffsetDateTime,
    ) -> Result<User, repository::Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<User>, repository::Error>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, repository::Error>;

    async fn find_many(&self, pagination: input::Pagination)
        -> Result<Vec<User>, repository::Error>;

    ///
    /// Stores session token, keeping only the newest sessions
    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when user does not exist
    ///
    async fn push_token(&self, id: ObjectId, token: &str) -> Result<(), repository::Error>;

    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when user does not exist
    ///
    async fn pull_token(&self, id: ObjectId, token: &str) -> Result<(), repository::Error>;

    async fn exists_with_token(&self, id: ObjectId, token: &str)
        -> Result<bool, repository::Error>;

    ///
    /// ### Returns
    /// user after update or [None] when user does not exist
    ///
    async fn update_bank_details(
        &self,
        id: ObjectId,
        account_number: &str,
        ifsc_code: &str,
        updated_at: OffsetDateTime,
    ) -> Result<Option<User>, repository::Error>;
}
