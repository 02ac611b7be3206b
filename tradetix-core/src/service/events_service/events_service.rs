use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;
use jwt_auth::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventsService: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - any of name, date, venue, performers, categories,
    ///       validFrom or validTo is missing
    ///     - validFrom is after validTo
    ///
    async fn create_event(
        &self,
        created_by: ObjectId,
        event: input::Event,
    ) -> Result<output::Event, Error>;

    ///
    /// ### Errors
    /// - [Error::Validation] when sort field is not supported
    ///
    async fn find_events(
        &self,
        filters: input::EventFilters,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Event>, Error>;

    ///
    /// ### Errors
    /// - [Error::NotFound] when event does not exist
    ///
    async fn find_event(&self, id: ObjectId) -> Result<output::Event, Error>;

    ///
    /// Overwrites fields present in `event`
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - no field is present
    ///     - present field is blank
    ///     - validFrom would end up after validTo
    /// - [Error::NotFound] when
    ///     - event does not exist
    ///     - event was created by someone else
    ///
    async fn update_event(
        &self,
        id: ObjectId,
        updated_by: ObjectId,
        event: input::Event,
    ) -> Result<output::Event, Error>;

    ///
    /// Deletes event of the user, admin can delete any event
    ///
    /// ### Errors
    /// - [Error::NotFound] when nothing was deleted
    ///
    async fn delete_event(&self, id: ObjectId, user: User) -> Result<(), Error>;
}
