use super::{UsersService, UsersServiceConfig};
use crate::{
    auth::Role,
    dto::{input, output},
    error::{Entity, Error},
    repository::{self, UsersRepository},
    service::validation,
};
use axum::async_trait;
use bson::oid::ObjectId;
use jwt_auth::JwtEncoder;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct UsersServiceImpl {
    config: UsersServiceConfig,
    encoder: JwtEncoder,
    repository: Arc<dyn UsersRepository>,
}

impl UsersServiceImpl {
    pub fn new(
        config: UsersServiceConfig,
        encoder: JwtEncoder,
        repository: Arc<dyn UsersRepository>,
    ) -> Self {
        Self {
            config,
            encoder,
            repository,
        }
    }

    fn validate_email(email: Option<String>) -> Result<String, Error> {
        let email = validation::required_string(Entity::User, email, "email is required")?;
        if !email.contains('@') || email.contains(char::is_whitespace) {
            return Err(Error::Validation(Entity::User, "email is invalid"));
        }

        Ok(email.to_lowercase())
    }

    fn validate_password(password: Option<String>) -> Result<String, Error> {
        validation::required_string(Entity::User, password, "password is required")
    }

    async fn hash_password(&self, password: String) -> Result<String, Error> {
        let cost = self.config.password_hash_cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(anyhow::Error::from)??;

        Ok(hash)
    }

    async fn verify_password(password: String, hash: String) -> Result<bool, Error> {
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(anyhow::Error::from)??;

        Ok(matches)
    }
}

#[async_trait]
impl UsersService for UsersServiceImpl {
    async fn register(&self, register: input::Register) -> Result<output::UserWithToken, Error> {
        tracing::info!("registering user");

        let username =
            validation::required_string(Entity::User, register.username, "username is required")?;
        let email = Self::validate_email(register.email)?;
        let password = Self::validate_password(register.password)?;
        tracing::trace!(%username, %email);

        let password = self.hash_password(password).await?;

        let id = ObjectId::new();
        let role = Role::User;
        let token = self.encoder.encode(id, role.as_ref())?;

        let user = self
            .repository
            .insert(
                id,
                &username,
                &email,
                &password,
                role,
                &token,
                OffsetDateTime::now_utc(),
            )
            .await
            .map_err(|err| match err {
                repository::Error::InsertUniqueViolation => Error::AlreadyExists(Entity::User),
                err => Error::Database(err),
            })?;
        tracing::info!(%id, "registered user");

        Ok(output::UserWithToken {
            user: user.into(),
            token,
        })
    }

    async fn login(&self, login: input::Login) -> Result<output::UserWithToken, Error> {
        tracing::info!("logging in user");

        let email = validation::required_string(Entity::User, login.email, "email is required")?
            .to_lowercase();
        let password = Self::validate_password(login.password)?;

        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(Error::InvalidCredentials)?;

        if !Self::verify_password(password, user.password.clone()).await? {
            return Err(Error::InvalidCredentials);
        }

        let token = self.encoder.encode(user.id, user.role.as_ref())?;
        self.repository
            .push_token(user.id, &token)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::InvalidCredentials,
                err => Error::Database(err),
            })?;
        tracing::info!(id = %user.id, "logged in user");

        Ok(output::UserWithToken {
            user: user.into(),
            token,
        })
    }

    async fn logout(&self, id: ObjectId, token: String) -> Result<(), Error> {
        tracing::info!("logging out user");

        match self.repository.pull_token(id, &token).await {
            Ok(()) => {
                tracing::info!("logged out user");
                Ok(())
            }
            Err(repository::Error::NoDocumentUpdated) => Err(Error::SessionInvalid),
            Err(err) => Err(Error::Database(err)),
        }
    }

    async fn authenticate(&self, id: ObjectId, token: String) -> Result<(), Error> {
        match self.repository.exists_with_token(id, &token).await? {
            true => Ok(()),
            false => Err(Error::SessionInvalid),
        }
    }

    async fn find_user(&self, id: ObjectId) -> Result<output::User, Error> {
        tracing::info!(%id, "finding user");

        let user = self
            .repository
            .find(id)
            .await?
            .ok_or(Error::NotFound(Entity::User))?;

        Ok(user.into())
    }

    async fn find_users(&self, pagination: input::Pagination) -> Result<Vec<output::User>, Error> {
        tracing::info!("finding users");
        tracing::trace!(?pagination);

        validation::pagination(Entity::User, &pagination)?;

        let users = self.repository.find_many(pagination).await?;
        tracing::info!(count = users.len(), "found users");

        Ok(users.into_iter().map(output::User::from).collect())
    }

    async fn add_bank_details(
        &self,
        id: ObjectId,
        bank_details: input::BankDetails,
    ) -> Result<output::User, Error> {
        tracing::info!(%id, "adding bank details");

        let account_number = validation::required_string(
            Entity::User,
            bank_details.account_number,
            "accountNumber is required",
        )?;
        let ifsc_code = validation::required_string(
            Entity::User,
            bank_details.ifsc_code,
            "IFSCCode is required",
        )?;

        let user = self
            .repository
            .update_bank_details(id, &account_number, &ifsc_code, OffsetDateTime::now_utc())
            .await?
            .ok_or(Error::NotFound(Entity::User))?;
        tracing::info!(%id, "added bank details");

        Ok(user.into())
    }
}
