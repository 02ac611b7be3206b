use crate::{
    application::ApplicationState,
    dto::{
        input,
        output::{self, Envelope},
    },
    error::Error,
    extract::{Json, Path, Query},
    service::{listings_service::ListingsService, tickets_service::TicketsService},
};
use axum::{
    extract::State,
    routing::{get, patch, post},
    Extension, Router,
};
use jwt_auth::User;
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/", post(create_ticket))
        .route("/open", get(get_open_tickets))
        .route("/me", get(get_my_tickets))
        .route(
            "/:id",
            get(get_ticket).put(update_ticket).delete(delete_ticket),
        )
        .route("/:id/buy", patch(buy_ticket))
        .route("/:id/listing", post(create_listing).get(get_listing))
}

async fn create_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Json(ticket): Json<input::Ticket>,
) -> Result<Envelope<output::Ticket>, Error> {
    let ticket = tickets_service.create_ticket(user.id, None, ticket).await?;

    Ok(Envelope::created("TICKET_CREATED", ticket))
}

async fn get_open_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Query(pagination): Query<input::Pagination>,
) -> Result<Envelope<Vec<output::Ticket>>, Error> {
    let tickets = tickets_service.find_open_tickets(pagination).await?;

    Ok(Envelope::ok("TICKETS_FETCHED", tickets))
}

async fn get_my_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Query(user_tickets): Query<input::UserTickets>,
    Query(pagination): Query<input::Pagination>,
) -> Result<Envelope<Vec<output::Ticket>>, Error> {
    let tickets = tickets_service
        .find_user_tickets(user.id, user_tickets, pagination)
        .await?;

    Ok(Envelope::ok("TICKETS_FETCHED", tickets))
}

async fn get_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(input::Id(id)): Path<input::Id>,
) -> Result<Envelope<output::Ticket>, Error> {
    let ticket = tickets_service.find_ticket(id).await?;

    Ok(Envelope::ok("TICKET_FETCHED", ticket))
}

async fn update_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(input::Id(id)): Path<input::Id>,
    Json(ticket): Json<input::Ticket>,
) -> Result<Envelope<output::Ticket>, Error> {
    let ticket = tickets_service.update_ticket(id, user.id, ticket).await?;

    Ok(Envelope::ok("TICKET_UPDATED", ticket))
}

async fn delete_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(input::Id(id)): Path<input::Id>,
) -> Result<Envelope<()>, Error> {
    tickets_service.delete_ticket(id, user).await?;

    Ok(Envelope::ok("TICKET_DELETED", ()))
}

async fn buy_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(input::Id(id)): Path<input::Id>,
) -> Result<Envelope<output::Ticket>, Error> {
    let ticket = tickets_service.buy_ticket(id, user.id).await?;

    Ok(Envelope::ok("TICKET_BOUGHT", ticket))
}

async fn create_listing(
    State(listings_service): State<Arc<dyn ListingsService>>,
    Extension(user): Extension<User>,
    Path(input::Id(ticket_id)): Path<input::Id>,
    Json(listing): Json<input::Listing>,
) -> Result<Envelope<output::Listing>, Error> {
    let listing = listings_service
        .create_listing(ticket_id, user.id, listing)
        .await?;

    Ok(Envelope::created("LISTING_CREATED", listing))
}

async fn get_listing(
    State(listings_service): State<Arc<dyn ListingsService>>,
    Path(input::Id(ticket_id)): Path<input::Id>,
) -> Result<Envelope<output::Listing>, Error> {
    let listing = listings_service.find_ticket_listing(ticket_id).await?;

    Ok(Envelope::ok("LISTING_FETCHED", listing))
}
