use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersService: Send + Sync {
    ///
    /// Creates user and opens his first session
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - username, email or password is missing
    ///     - email is invalid
    /// - [Error::AlreadyExists] when email is already taken
    ///
    async fn register(&self, register: input::Register) -> Result<output::UserWithToken, Error>;

    ///
    /// Opens new session of the user
    ///
    /// ### Errors
    /// - [Error::Validation] when email or password is missing
    /// - [Error::InvalidCredentials] when
    ///     - user with email does not exist
    ///     - password does not match
    ///
    async fn login(&self, login: input::Login) -> Result<output::UserWithToken, Error>;

    ///
    /// Closes session that uses the token
    ///
    async fn logout(&self, id: ObjectId, token: String) -> Result<(), Error>;

    ///
    /// Checks that the session with the token is still open
    ///
    /// ### Errors
    /// - [Error::SessionInvalid] when user does not exist or token was removed
    ///
    async fn authenticate(&self, id: ObjectId, token: String) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::NotFound] when user does not exist
    ///
    async fn find_user(&self, id: ObjectId) -> Result<output::User, Error>;

    async fn find_users(&self, pagination: input::Pagination) -> Result<Vec<output::User>, Error>;

    ///
    /// ### Errors
    /// - [Error::Validation] when account number or IFSC code is missing
    /// - [Error::NotFound] when user does not exist
    ///
    async fn add_bank_details(
        &self,
        id: ObjectId,
        bank_details: input::BankDetails,
    ) -> Result<output::User, Error>;
}
