use super::TicketsService;
use crate::{
    auth,
    dto::{input, output, TicketStatus},
    error::{Entity, Error},
    repository::{
        EventsRepository, ListingsRepository, TicketsRepository, TransactionsRepository,
    },
    service::validation,
};
use axum::async_trait;
use bson::oid::ObjectId;
use jwt_auth::User;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct TicketsServiceImpl {
    tickets_repository: Arc<dyn TicketsRepository>,
    events_repository: Arc<dyn EventsRepository>,
    listings_repository: Arc<dyn ListingsRepository>,
    transactions_repository: Arc<dyn TransactionsRepository>,
}

///
/// Ticket fields after validation
///
struct ValidTicket {
    title: String,
    description: Option<String>,
    price: i64,
    expiry: OffsetDateTime,
}

impl TicketsServiceImpl {
    pub fn new(
        tickets_repository: Arc<dyn TicketsRepository>,
        events_repository: Arc<dyn EventsRepository>,
        listings_repository: Arc<dyn ListingsRepository>,
        transactions_repository: Arc<dyn TransactionsRepository>,
    ) -> Self {
        Self {
            tickets_repository,
            events_repository,
            listings_repository,
            transactions_repository,
        }
    }

    fn validate_ticket(ticket: input::Ticket) -> Result<ValidTicket, Error> {
        let title = validation::required_string(Entity::Ticket, ticket.title, "title is required")?;
        let price = validation::required(Entity::Ticket, ticket.price, "price is required")?;
        let price = validation::positive_price(Entity::Ticket, price)?;
        let expiry = validation::required(Entity::Ticket, ticket.expiry, "expiry is required")?;
        if expiry <= OffsetDateTime::now_utc() {
            return Err(Error::Validation(Entity::Ticket, "expiry already passed"));
        }
        let description = ticket
            .description
            .map(|description| description.trim().to_string())
            .filter(|description| !description.is_empty());

        Ok(ValidTicket {
            title,
            description,
            price,
            expiry,
        })
    }

    ///
    /// Finds out why conditional buy did not match any ticket
    ///
    async fn buy_rejection(&self, id: ObjectId, buyer: ObjectId, now: OffsetDateTime) -> Error {
        let ticket = match self.tickets_repository.find(id).await {
            Ok(Some(ticket)) => ticket,
            Ok(None) => return Error::NotFound(Entity::Ticket),
            Err(err) => return Error::Database(err),
        };

        if ticket.status == TicketStatus::Sold {
            Error::TicketAlreadySold
        } else if ticket.owner == buyer {
            Error::Validation(Entity::Ticket, "cannot buy your own ticket")
        } else if ticket.expiry <= now {
            Error::Validation(Entity::Ticket, "ticket expired")
        } else {
            // ticket changed between buy and find
            Error::TicketAlreadySold
        }
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn create_ticket(
        &self,
        owner: ObjectId,
        event_id: Option<ObjectId>,
        ticket: input::Ticket,
    ) -> Result<output::Ticket, Error> {
        tracing::info!("creating ticket");
        tracing::trace!(?ticket, ?event_id);

        let ticket = Self::validate_ticket(ticket)?;

        if let Some(event_id) = event_id {
            if !self.events_repository.exists(event_id).await? {
                return Err(Error::NotFound(Entity::Event));
            }
        }

        let ticket = self
            .tickets_repository
            .insert(
                ticket.title,
                ticket.description,
                ticket.price,
                owner,
                event_id,
                ticket.expiry,
                OffsetDateTime::now_utc(),
            )
            .await?;
        tracing::info!(id = %ticket.id, "created ticket");

        Ok(ticket.into())
    }

    async fn find_open_tickets(
        &self,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Ticket>, Error> {
        tracing::info!("finding open tickets");
        tracing::trace!(?pagination);

        validation::pagination(Entity::Ticket, &pagination)?;

        let tickets = self
            .tickets_repository
            .find_many_open(OffsetDateTime::now_utc(), pagination)
            .await?;
        tracing::info!(count = tickets.len(), "found tickets");

        Ok(tickets.into_iter().map(output::Ticket::from).collect())
    }

    async fn find_user_tickets(
        &self,
        user_id: ObjectId,
        user_tickets: input::UserTickets,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Ticket>, Error> {
        tracing::info!("finding user tickets");
        tracing::trace!(?user_tickets, ?pagination);

        validation::pagination(Entity::Ticket, &pagination)?;

        let tickets = self
            .tickets_repository
            .find_many_by_user(user_id, user_tickets.user_type, pagination)
            .await?;
        tracing::info!(count = tickets.len(), "found tickets");

        Ok(tickets.into_iter().map(output::Ticket::from).collect())
    }

    async fn find_event_tickets(
        &self,
        event_id: ObjectId,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Ticket>, Error> {
        tracing::info!(%event_id, "finding event tickets");
        tracing::trace!(?pagination);

        validation::pagination(Entity::Ticket, &pagination)?;

        if !self.events_repository.exists(event_id).await? {
            return Err(Error::NotFound(Entity::Event));
        }

        let tickets = self
            .tickets_repository
            .find_many_by_event(event_id, pagination)
            .await?;
        tracing::info!(count = tickets.len(), "found tickets");

        Ok(tickets.into_iter().map(output::Ticket::from).collect())
    }

    async fn find_ticket(&self, id: ObjectId) -> Result<output::Ticket, Error> {
        tracing::info!(%id, "finding ticket");

        let ticket = self
            .tickets_repository
            .find(id)
            .await?
            .ok_or(Error::NotFound(Entity::Ticket))?;

        Ok(ticket.into())
    }

    async fn update_ticket(
        &self,
        id: ObjectId,
        owner: ObjectId,
        ticket: input::Ticket,
    ) -> Result<output::Ticket, Error> {
        tracing::info!(%id, "updating ticket");
        tracing::trace!(?ticket);

        let ticket = Self::validate_ticket(ticket)?;

        let ticket = self
            .tickets_repository
            .update(
                id,
                owner,
                ticket.title,
                ticket.description,
                ticket.price,
                ticket.expiry,
                OffsetDateTime::now_utc(),
            )
            .await?
            .ok_or(Error::NotFound(Entity::Ticket))?;
        tracing::info!(%id, "updated ticket");

        Ok(ticket.into())
    }

    async fn delete_ticket(&self, id: ObjectId, user: User) -> Result<(), Error> {
        tracing::info!(%id, "deleting ticket");

        let owner = match auth::is_admin(&user) {
            true => None,
            false => Some(user.id),
        };

        match self.tickets_repository.delete(id, owner).await? {
            true => {
                tracing::info!(%id, "deleted ticket");
                Ok(())
            }
            false => Err(Error::NotFound(Entity::Ticket)),
        }
    }

    async fn buy_ticket(&self, id: ObjectId, buyer: ObjectId) -> Result<output::Ticket, Error> {
        tracing::info!(%id, "buying ticket");

        let now = OffsetDateTime::now_utc();
        let Some(ticket) = self.tickets_repository.buy(id, buyer, now).await? else {
            return Err(self.buy_rejection(id, buyer, now).await);
        };
        tracing::info!(%id, "sold ticket");

        let listing = self
            .listings_repository
            .close_for_ticket(id, buyer, now)
            .await
            .inspect_err(|err| {
                tracing::error!(%id, %buyer, %err, "ticket sold but closing listing failed");
            })?;
        if let Some(listing) = &listing {
            tracing::info!(id = %listing.id, "closed listing");
        }

        let sale_price = listing
            .as_ref()
            .map(|listing| listing.price)
            .unwrap_or(ticket.price);
        let transaction = self
            .transactions_repository
            .insert(
                id,
                listing.map(|listing| listing.id),
                ticket.owner,
                buyer,
                sale_price,
                now,
            )
            .await
            .inspect_err(|err| {
                tracing::error!(
                    %id,
                    %buyer,
                    sale_price,
                    %err,
                    "ticket sold but recording transaction failed",
                );
            })?;
        tracing::info!(id = %transaction.id, "recorded transaction");

        Ok(ticket.into())
    }
}
