use super::TransactionsService;
use crate::{
    auth,
    dto::{input, output},
    error::{Entity, Error},
    repository::TransactionsRepository,
    service::validation,
};
use axum::async_trait;
use bson::oid::ObjectId;
use jwt_auth::User;
use std::sync::Arc;

pub struct TransactionsServiceImpl {
    repository: Arc<dyn TransactionsRepository>,
}

impl TransactionsServiceImpl {
    pub fn new(repository: Arc<dyn TransactionsRepository>) -> Self {
        Self { repository }
    }

    fn participant(user: &User) -> Option<ObjectId> {
        match auth::is_admin(user) {
            true => None,
            false => Some(user.id),
        }
    }
}

#[async_trait]
impl TransactionsService for TransactionsServiceImpl {
    async fn find_transactions(
        &self,
        user: User,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Transaction>, Error> {
        tracing::info!(user_id = %user.id, "finding transactions");
        tracing::trace!(?pagination);

        validation::pagination(Entity::Transaction, &pagination)?;

        let transactions = self
            .repository
            .find_many(Self::participant(&user), pagination)
            .await?;
        tracing::info!(count = transactions.len(), "found transactions");

        Ok(transactions
            .into_iter()
            .map(output::Transaction::from)
            .collect())
    }

    async fn find_transaction(
        &self,
        id: ObjectId,
        user: User,
    ) -> Result<output::Transaction, Error> {
        tracing::info!(%id, user_id = %user.id, "finding transaction");

        let transaction = self
            .repository
            .find(id, Self::participant(&user))
            .await?
            .ok_or(Error::NotFound(Entity::Transaction))?;

        Ok(transaction.into())
    }
}
