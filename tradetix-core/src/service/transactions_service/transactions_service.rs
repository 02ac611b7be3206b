use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;
use jwt_auth::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionsService: Send + Sync {
    ///
    /// Finds transactions where user is seller or buyer.
    /// Admin sees all transactions.
    ///
    /// ### Errors
    /// - [Error::Validation] when pagination is out of range
    ///
    async fn find_transactions(
        &self,
        user: User,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Transaction>, Error>;

    ///
    /// ### Errors
    /// - [Error::NotFound] when
    ///     - transaction does not exist
    ///     - user is neither seller nor buyer and is not admin
    ///
    async fn find_transaction(
        &self,
        id: ObjectId,
        user: User,
    ) -> Result<output::Transaction, Error>;
}
