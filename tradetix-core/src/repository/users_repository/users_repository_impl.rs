use super::{
    entity::{UserFindEntity, UserInsertEntity, UserTokenEntity},
    User, UsersRepository,
};
use crate::{
    auth::Role,
    dto::input,
    repository::{self, Error},
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{
    options::{IndexOptions, ReturnDocument},
    Database, IndexModel,
};
use time::OffsetDateTime;

const USERS: &str = "users";
const INDEX_NAME_UNIQUE_EMAIL: &str = "unique_email";
const MAX_SESSIONS: i32 = 10;

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        repository::create_collection_if_not_exists(&database, USERS).await?;

        let collection = database.collection::<Document>(USERS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_EMAIL.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "email": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_UNIQUE_EMAIL.to_string())
                                .unique(true)
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = USERS,
                index = INDEX_NAME_UNIQUE_EMAIL,
                "created index"
            );
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn insert(
        &self,
        id: ObjectId,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
        token: &str,
        created_at: OffsetDateTime,
    ) -> Result<User, repository::Error> {
        let created_at = DateTime::from(created_at);
        let insert_entity = UserInsertEntity {
            _id: id,
            username,
            email,
            password,
            role,
            tokens: vec![UserTokenEntity { token }],
            created_at,
            updated_at: created_at,
        };

        self.database
            .collection::<UserInsertEntity>(USERS)
            .insert_one(&insert_entity)
            .await
            .map_err(Error::from_insert)?;

        Ok(User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
            account_number: None,
            ifsc_code: None,
            created_at: created_at.into(),
            updated_at: created_at.into(),
        })
    }

    async fn find(&self, id: ObjectId) -> Result<Option<User>, repository::Error> {
        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! {
                "_id": id,
            })
            .await?
            .map(User::from);

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, repository::Error> {
        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! {
                "email": email,
            })
            .await?
            .map(User::from);

        Ok(user)
    }

    async fn find_many(
        &self,
        pagination: input::Pagination,
    ) -> Result<Vec<User>, repository::Error> {
        let users = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .skip(pagination.skip())
            .limit(i64::from(pagination.limit))
            .await?
            .map_ok(User::from)
            .try_collect::<Vec<_>>()
            .await?;

        Ok(users)
    }

    async fn push_token(&self, id: ObjectId, token: &str) -> Result<(), repository::Error> {
        let update_result = self
            .database
            .collection::<Document>(USERS)
            .update_one(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$push": {
                        "tokens": {
                            "$each": [{ "token": token }],
                            "$slice": -MAX_SESSIONS,
                        },
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn pull_token(&self, id: ObjectId, token: &str) -> Result<(), repository::Error> {
        let update_result = self
            .database
            .collection::<Document>(USERS)
            .update_one(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$pull": {
                        "tokens": { "token": token },
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn exists_with_token(
        &self,
        id: ObjectId,
        token: &str,
    ) -> Result<bool, repository::Error> {
        let count = self
            .database
            .collection::<Document>(USERS)
            .count_documents(doc! {
                "_id": id,
                "tokens.token": token,
            })
            .limit(1)
            .await?;

        Ok(count > 0)
    }

    async fn update_bank_details(
        &self,
        id: ObjectId,
        account_number: &str,
        ifsc_code: &str,
        updated_at: OffsetDateTime,
    ) -> Result<Option<User>, repository::Error> {
        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one_and_update(
                doc! {
                    "_id": id,
                },
                doc! {
                    "$set": {
                        "account_number": account_number,
                        "ifsc_code": ifsc_code,
                        "updated_at": DateTime::from(updated_at),
                    }
                },
            )
            .return_document(ReturnDocument::After)
            .await?
            .map(User::from);

        Ok(user)
    }
}
