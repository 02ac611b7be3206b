use super::Listing;
use crate::{
    dto::{input, ListingStatus},
    repository,
};
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingsRepository: Send + Sync {
    ///
    /// ### Errors
    /// - [repository::Error::InsertUniqueViolation] when ticket is already listed
    ///
    async fn insert(
        &self,
        ticket_id: ObjectId,
        price: i64,
        created_by: ObjectId,
        created_at: OffsetDateTime,
    ) -> Result<Listing, repository::Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Listing>, repository::Error>;

    async fn find_by_ticket(&self, ticket_id: ObjectId)
        -> Result<Option<Listing>, repository::Error>;

    async fn find_many_open(
        &self,
        pagination: input::Pagination,
    ) -> Result<Vec<Listing>, repository::Error>;

    ///
    /// Updates listing created by `updated_by` that is still in `current_status`
    ///
    /// ### Returns
    /// listing after update or [None] when nothing matched
    ///
    async fn update(
        &self,
        id: ObjectId,
        updated_by: ObjectId,
        current_status: ListingStatus,
        price: Option<i64>,
        status: Option<ListingStatus>,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Listing>, repository::Error>;

    ///
    /// Deletes listing. When `created_by` is [None]
    /// listing is deleted regardless of the creator.
    ///
    async fn delete(
        &self,
        id: ObjectId,
        created_by: Option<ObjectId>,
    ) -> Result<bool, repository::Error>;

    ///
    /// Closes open listing of the ticket
    ///
    /// ### Returns
    /// closed listing or [None] when ticket had no open listing
    ///
    async fn close_for_ticket(
        &self,
        ticket_id: ObjectId,
        updated_by: ObjectId,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Listing>, repository::Error>;
}
