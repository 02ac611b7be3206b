use crate::{
    application::ApplicationState,
    dto::{
        input,
        output::{self, Envelope},
    },
    error::Error,
    extract::{Json, Path, Query},
    service::listings_service::ListingsService,
};
use axum::{
    extract::State,
    routing::{get, put},
    Extension, Router,
};
use jwt_auth::User;
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/", get(get_open_listings))
        .route("/:id", put(update_listing).delete(delete_listing))
}

async fn get_open_listings(
    State(listings_service): State<Arc<dyn ListingsService>>,
    Query(pagination): Query<input::Pagination>,
) -> Result<Envelope<Vec<output::Listing>>, Error> {
    let listings = listings_service.find_open_listings(pagination).await?;

    Ok(Envelope::ok("LISTINGS_FETCHED", listings))
}

async fn update_listing(
    State(listings_service): State<Arc<dyn ListingsService>>,
    Extension(user): Extension<User>,
    Path(input::Id(id)): Path<input::Id>,
    Json(listing): Json<input::ListingUpdate>,
) -> Result<Envelope<output::Listing>, Error> {
    let listing = listings_service
        .update_listing(id, user.id, listing)
        .await?;

    Ok(Envelope::ok("LISTING_UPDATED", listing))
}

async fn delete_listing(
    State(listings_service): State<Arc<dyn ListingsService>>,
    Extension(user): Extension<User>,
    Path(input::Id(id)): Path<input::Id>,
) -> Result<Envelope<()>, Error> {
    listings_service.delete_listing(id, user).await?;

    Ok(Envelope::ok("LISTING_DELETED", ()))
}
