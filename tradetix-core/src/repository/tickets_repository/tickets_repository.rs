use super::Ticket;
use crate::{dto::input, repository};
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    async fn insert(
        &self,
        title: String,
        description: Option<String>,
        price: i64,
        owner: ObjectId,
        event_id: Option<ObjectId>,
        expiry: OffsetDateTime,
        created_at: OffsetDateTime,
    ) -> Result<Ticket, repository::Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Ticket>, repository::Error>;

    ///
    /// Finds open tickets that expire after `now`, newest first
    ///
    async fn find_many_open(
        &self,
        now: OffsetDateTime,
        pagination: input::Pagination,
    ) -> Result<Vec<Ticket>, repository::Error>;

    async fn find_many_by_user(
        &self,
        user_id: ObjectId,
        user_type: input::TicketUserType,
        pagination: input::Pagination,
    ) -> Result<Vec<Ticket>, repository::Error>;

    async fn find_many_by_event(
        &self,
        event_id: ObjectId,
        pagination: input::Pagination,
    ) -> Result<Vec<Ticket>, repository::Error>;

    ///
    /// Updates open ticket that belongs to the owner
    ///
    /// ### Returns
    /// ticket after update or [None] when nothing matched
    ///
    #[allow(clippy::too_many_arguments)]
    async fn update(
        &self,
        id: ObjectId,
        owner: ObjectId,
        title: String,
        description: Option<String>,
        price: i64,
        expiry: OffsetDateTime,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Ticket>, repository::Error>;

    ///
    /// Deletes open ticket. When `owner` is [None]
    /// ticket is deleted regardless of the owner.
    ///
    /// ### Returns
    /// true when ticket was deleted
    ///
    async fn delete(
        &self,
        id: ObjectId,
        owner: Option<ObjectId>,
    ) -> Result<bool, repository::Error>;

    ///
    /// Atomically marks ticket as sold. Only open, not expired
    /// ticket that does not belong to the buyer can be bought.
    ///
    /// ### Returns
    /// ticket after update or [None] when nothing matched
    ///
    async fn buy(
        &self,
        id: ObjectId,
        buyer: ObjectId,
        now: OffsetDateTime,
    ) -> Result<Option<Ticket>, repository::Error>;
}
