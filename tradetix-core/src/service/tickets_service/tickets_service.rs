use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;
use jwt_auth::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Creates open ticket owned by `owner`
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - title, price or expiry is missing
    ///     - price is not positive
    ///     - expiry already passed
    /// - [Error::NotFound] when event with `event_id` does not exist
    ///
    async fn create_ticket(
        &self,
        owner: ObjectId,
        event_id: Option<ObjectId>,
        ticket: input::Ticket,
    ) -> Result<output::Ticket, Error>;

    ///
    /// Finds not expired open tickets, newest first
    ///
    async fn find_open_tickets(
        &self,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Ticket>, Error>;

    async fn find_user_tickets(
        &self,
        user_id: ObjectId,
        user_tickets: input::UserTickets,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Ticket>, Error>;

    ///
    /// ### Errors
    /// - [Error::NotFound] when event does not exist
    ///
    async fn find_event_tickets(
        &self,
        event_id: ObjectId,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Ticket>, Error>;

    ///
    /// ### Errors
    /// - [Error::NotFound] when ticket does not exist
    ///
    async fn find_ticket(&self, id: ObjectId) -> Result<output::Ticket, Error>;

    ///
    /// ### Errors
    /// - [Error::Validation] same as [TicketsService::create_ticket]
    /// - [Error::NotFound] when
    ///     - ticket does not exist
    ///     - ticket does not belong to the owner
    ///     - ticket is already sold
    ///
    async fn update_ticket(
        &self,
        id: ObjectId,
        owner: ObjectId,
        ticket: input::Ticket,
    ) -> Result<output::Ticket, Error>;

    ///
    /// Deletes open ticket of the user, admin can delete any open ticket
    ///
    /// ### Errors
    /// - [Error::NotFound] when nothing was deleted
    ///
    async fn delete_ticket(&self, id: ObjectId, user: User) -> Result<(), Error>;

    ///
    /// Sells ticket to the buyer. Closes open listing of the ticket
    /// and records the transaction.
    ///
    /// ### Errors
    /// - [Error::NotFound] when ticket does not exist
    /// - [Error::TicketAlreadySold] when ticket is already sold
    /// - [Error::Validation] when
    ///     - buyer is the owner
    ///     - ticket expired
    ///
    async fn buy_ticket(&self, id: ObjectId, buyer: ObjectId) -> Result<output::Ticket, Error>;
}
