use crate::{
    application::ApplicationState,
    dto::{
        input,
        output::{self, Envelope},
    },
    error::Error,
    extract::{Json, Path, Query},
    service::{events_service::EventsService, tickets_service::TicketsService},
};
use axum::{extract::State, routing::get, Extension, Router};
use jwt_auth::User;
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/", get(get_events).post(create_event))
        .route(
            "/:id",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route(
            "/:id/tickets",
            get(get_event_tickets).post(create_event_ticket),
        )
}

async fn create_event(
    State(events_service): State<Arc<dyn EventsService>>,
    Extension(user): Extension<User>,
    Json(event): Json<input::Event>,
) -> Result<Envelope<output::Event>, Error> {
    let event = events_service.create_event(user.id, event).await?;

    Ok(Envelope::created("EVENT_CREATED", event))
}

async fn get_events(
    State(events_service): State<Arc<dyn EventsService>>,
    Query(filters): Query<input::EventFilters>,
    Query(pagination): Query<input::Pagination>,
) -> Result<Envelope<Vec<output::Event>>, Error> {
    let events = events_service.find_events(filters, pagination).await?;

    Ok(Envelope::ok("EVENTS_FETCHED", events))
}

async fn get_event(
    State(events_service): State<Arc<dyn EventsService>>,
    Path(input::Id(id)): Path<input::Id>,
) -> Result<Envelope<output::Event>, Error> {
    let event = events_service.find_event(id).await?;

    Ok(Envelope::ok("EVENT_FETCHED", event))
}

async fn update_event(
    State(events_service): State<Arc<dyn EventsService>>,
    Extension(user): Extension<User>,
    Path(input::Id(id)): Path<input::Id>,
    Json(event): Json<input::Event>,
) -> Result<Envelope<output::Event>, Error> {
    let event = events_service.update_event(id, user.id, event).await?;

    Ok(Envelope::ok("EVENT_UPDATED", event))
}

async fn delete_event(
    State(events_service): State<Arc<dyn EventsService>>,
    Extension(user): Extension<User>,
    Path(input::Id(id)): Path<input::Id>,
) -> Result<Envelope<()>, Error> {
    events_service.delete_event(id, user).await?;

    Ok(Envelope::ok("EVENT_DELETED", ()))
}

async fn create_event_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(input::Id(event_id)): Path<input::Id>,
    Json(ticket): Json<input::Ticket>,
) -> Result<Envelope<output::Ticket>, Error> {
    let ticket = tickets_service
        .create_ticket(user.id, Some(event_id), ticket)
        .await?;

    Ok(Envelope::created("TICKET_CREATED", ticket))
}

async fn get_event_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(input::Id(event_id)): Path<input::Id>,
    Query(pagination): Query<input::Pagination>,
) -> Result<Envelope<Vec<output::Ticket>>, Error> {
    let tickets = tickets_service
        .find_event_tickets(event_id, pagination)
        .await?;

    Ok(Envelope::ok("TICKETS_FETCHED", tickets))
}
