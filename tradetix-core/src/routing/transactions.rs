use crate::{
    application::ApplicationState,
    dto::{
        input,
        output::{self, Envelope},
    },
    error::Error,
    extract::{Path, Query},
    service::transactions_service::TransactionsService,
};
use axum::{extract::State, routing::get, Extension, Router};
use jwt_auth::User;
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/", get(get_transactions))
        .route("/:id", get(get_transaction))
}

async fn get_transactions(
    State(transactions_service): State<Arc<dyn TransactionsService>>,
    Extension(user): Extension<User>,
    Query(pagination): Query<input::Pagination>,
) -> Result<Envelope<Vec<output::Transaction>>, Error> {
    let transactions = transactions_service
        .find_transactions(user, pagination)
        .await?;

    Ok(Envelope::ok("TRANSACTIONS_FETCHED", transactions))
}

async fn get_transaction(
    State(transactions_service): State<Arc<dyn TransactionsService>>,
    Extension(user): Extension<User>,
    Path(input::Id(id)): Path<input::Id>,
) -> Result<Envelope<output::Transaction>, Error> {
    let transaction = transactions_service.find_transaction(id, user).await?;

    Ok(Envelope::ok("TRANSACTION_FETCHED", transaction))
}
