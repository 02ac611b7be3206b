use super::ApplicationEnv;
use crate::{
    repository::{
        EventsRepositoryImpl, ListingsRepositoryImpl, TicketsRepositoryImpl,
        TransactionsRepositoryImpl, UsersRepositoryImpl,
    },
    service::{
        events_service::{EventsService, EventsServiceImpl},
        listings_service::{ListingsService, ListingsServiceImpl},
        tickets_service::{TicketsService, TicketsServiceImpl},
        transactions_service::{TransactionsService, TransactionsServiceImpl},
        users_service::{UsersService, UsersServiceConfig, UsersServiceImpl},
    },
};
use anyhow::anyhow;
use axum::extract::FromRef;
use jwt_auth::JwtEncoder;
use mongodb::{options::ClientOptions, Client};
use std::{sync::Arc, time::Instant};

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub users_service: Arc<dyn UsersService>,
    pub tickets_service: Arc<dyn TicketsService>,
    pub events_service: Arc<dyn EventsService>,
    pub listings_service: Arc<dyn ListingsService>,
    pub transactions_service: Arc<dyn TransactionsService>,

    /// moment the server started, used to report uptime
    pub started_at: Instant,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    let started_at = Instant::now();

    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let users_repository = Arc::new(UsersRepositoryImpl::new(db.clone()).await?);
    let tickets_repository = Arc::new(TicketsRepositoryImpl::new(db.clone()).await?);
    let events_repository = Arc::new(EventsRepositoryImpl::new(db.clone()).await?);
    let listings_repository = Arc::new(ListingsRepositoryImpl::new(db.clone()).await?);
    let transactions_repository = Arc::new(TransactionsRepositoryImpl::new(db).await?);

    tracing::info!("creating services");
    let jwt_algorithm = *env
        .jwt_algorithms
        .first()
        .ok_or(anyhow!("missing jwt algorithm"))?;
    let encoder = JwtEncoder::new(
        env.jwt_encoding_key.clone(),
        jwt_algorithm,
        env.jwt_token_lifespan,
    );
    let config = UsersServiceConfig {
        password_hash_cost: env.password_hash_cost,
    };
    let users_service = UsersServiceImpl::new(config, encoder, users_repository);
    let users_service = Arc::new(users_service);

    let tickets_service = TicketsServiceImpl::new(
        tickets_repository.clone(),
        events_repository.clone(),
        listings_repository.clone(),
        transactions_repository.clone(),
    );
    let tickets_service = Arc::new(tickets_service);

    let events_service = EventsServiceImpl::new(events_repository);
    let events_service = Arc::new(events_service);

    let listings_service = ListingsServiceImpl::new(listings_repository, tickets_repository);
    let listings_service = Arc::new(listings_service);

    let transactions_service = TransactionsServiceImpl::new(transactions_repository);
    let transactions_service = Arc::new(transactions_service);

    Ok((
        ApplicationState {
            users_service,
            tickets_service,
            events_service,
            listings_service,
            transactions_service,
            started_at,
        },
        ApplicationStateToClose { db_client },
    ))
}
