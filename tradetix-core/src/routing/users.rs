use crate::{
    application::ApplicationState,
    auth::{self, Role},
    dto::{
        input,
        output::{self, Envelope},
    },
    error::{Entity, Error},
    extract::{Json, Path, Query},
    service::users_service::UsersService,
};
use axum::{
    extract::State,
    routing::{get, post},
    Extension, Router,
};
use jwt_auth::User;
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/", get(get_users))
        .route("/logout", post(logout))
        .route("/me", get(get_me))
        .route("/:id", get(get_user))
        .route("/:id/bank-details", post(add_bank_details))
}

pub async fn register(
    State(users_service): State<Arc<dyn UsersService>>,
    Json(register): Json<input::Register>,
) -> Result<Envelope<output::UserWithToken>, Error> {
    let user = users_service.register(register).await?;

    Ok(Envelope::created("USER_REGISTERED", user))
}

pub async fn login(
    State(users_service): State<Arc<dyn UsersService>>,
    Json(login): Json<input::Login>,
) -> Result<Envelope<output::UserWithToken>, Error> {
    let user = users_service.login(login).await?;

    Ok(Envelope::ok("USER_LOGGED_IN", user))
}

async fn logout(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
) -> Result<Envelope<&'static str>, Error> {
    users_service.logout(user.id, user.token.clone()).await?;

    Ok(Envelope::ok("USER_LOGGED_OUT", "Logged out"))
}

async fn get_me(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
) -> Result<Envelope<output::User>, Error> {
    let user = users_service.find_user(user.id).await?;

    Ok(Envelope::ok("USER_FETCHED", user))
}

async fn get_user(
    State(users_service): State<Arc<dyn UsersService>>,
    Path(input::Id(id)): Path<input::Id>,
) -> Result<Envelope<output::User>, Error> {
    let user = users_service.find_user(id).await?;

    Ok(Envelope::ok("USER_FETCHED", user))
}

async fn get_users(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
    Query(pagination): Query<input::Pagination>,
) -> Result<Envelope<Vec<output::User>>, Error> {
    jwt_auth::require_role(&user, Role::Admin.as_ref())?;

    let users = users_service.find_users(pagination).await?;

    Ok(Envelope::ok("USERS_FETCHED", users))
}

async fn add_bank_details(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
    Path(input::Id(id)): Path<input::Id>,
    Json(bank_details): Json<input::BankDetails>,
) -> Result<Envelope<output::User>, Error> {
    if user.id != id && !auth::is_admin(&user) {
        return Err(Error::Forbidden(Entity::User));
    }

    let user = users_service.add_bank_details(id, bank_details).await?;

    Ok(Envelope::ok("BANK_DETAILS_ADDED", user))
}
