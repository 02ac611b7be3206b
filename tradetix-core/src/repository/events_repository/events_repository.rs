use super::{Event, EventUpdate, EventsFilter, EventsSort, NewEvent};
use crate::{dto::input, repository};
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventsRepository: Send + Sync {
    async fn insert(
        &self,
        event: NewEvent,
        created_by: ObjectId,
        created_at: OffsetDateTime,
    ) -> Result<Event, repository::Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Event>, repository::Error>;

    async fn exists(&self, id: ObjectId) -> Result<bool, repository::Error>;

    async fn find_many(
        &self,
        filter: EventsFilter,
        sort: EventsSort,
        pagination: input::Pagination,
    ) -> Result<Vec<Event>, repository::Error>;

    ///
    /// Updates event created by `updated_by`
    ///
    /// ### Returns
    /// event after update or [None] when nothing matched
    ///
    async fn update(
        &self,
        id: ObjectId,
        updated_by: ObjectId,
        update: EventUpdate,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Event>, repository::Error>;

    ///
    /// Deletes event. When `created_by` is [None]
    /// event is deleted regardless of the creator.
    ///
    /// ### Returns
    /// true when event was deleted
    ///
    async fn delete(
        &self,
        id: ObjectId,
        created_by: Option<ObjectId>,
    ) -> Result<bool, repository::Error>;
}
