use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;
use jwt_auth::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingsService: Send + Sync {
    ///
    /// Puts ticket up for sale
    ///
    /// ### Errors
    /// - [Error::Validation] when price is missing or not positive
    /// - [Error::NotFound] when
    ///     - ticket does not exist
    ///     - ticket belongs to someone else
    ///     - ticket is not open
    /// - [Error::AlreadyExists] when ticket is already listed
    ///
    async fn create_listing(
        &self,
        ticket_id: ObjectId,
        created_by: ObjectId,
        listing: input::Listing,
    ) -> Result<output::Listing, Error>;

    ///
    /// ### Errors
    /// - [Error::NotFound] when ticket is not listed
    ///
    async fn find_ticket_listing(&self, ticket_id: ObjectId) -> Result<output::Listing, Error>;

    async fn find_open_listings(
        &self,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Listing>, Error>;

    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - no field is present
    ///     - price is not positive
    /// - [Error::NotFound] when
    ///     - listing does not exist
    ///     - listing was created by someone else
    ///     - listing was closed by a sale in the meantime
    /// - [Error::TicketAlreadySold] when listed ticket is no longer open
    ///
    async fn update_listing(
        &self,
        id: ObjectId,
        updated_by: ObjectId,
        listing: input::ListingUpdate,
    ) -> Result<output::Listing, Error>;

    ///
    /// Deletes listing of the user, admin can delete any listing
    ///
    /// ### Errors
    /// - [Error::NotFound] when nothing was deleted
    ///
    async fn delete_listing(&self, id: ObjectId, user: User) -> Result<(), Error>;
}
