use super::{
    entity::{TicketFindEntity, TicketInsertEntity},
    Ticket, TicketsRepository,
};
use crate::{
    dto::{input, TicketStatus},
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

const TICKETS: &str = "tickets";
const INDEX_NAME_STATUS_EXPIRY: &str = "index_status_expiry";
const INDEX_NAME_EVENT_ID: &str = "index_event_id";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        repository::create_collection_if_not_exists(&database, TICKETS).await?;

        let collection = database.collection::<Document>(TICKETS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_STATUS_EXPIRY.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "status": 1,
                            "expiry": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_STATUS_EXPIRY.to_string())
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = TICKETS,
                index = INDEX_NAME_STATUS_EXPIRY,
                "created index"
            );
        }
        if !index_names.contains(&INDEX_NAME_EVENT_ID.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "event_id": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_EVENT_ID.to_string())
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = TICKETS,
                index = INDEX_NAME_EVENT_ID,
                "created index"
            );
        }

        Ok(Self { database })
    }

    async fn find_many_by_filter(
        &self,
        filter: Document,
        pagination: input::Pagination,
    ) -> Result<Vec<Ticket>, repository::Error> {
        let tickets = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .skip(pagination.skip())
            .limit(i64::from(pagination.limit))
            .await?
            .map_ok(Ticket::from)
            .try_collect::<Vec<_>>()
            .await?;

        Ok(tickets)
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(
        &self,
        title: String,
        description: Option<String>,
        price: i64,
        owner: ObjectId,
        event_id: Option<ObjectId>,
        expiry: OffsetDateTime,
        created_at: OffsetDateTime,
    ) -> Result<Ticket, repository::Error> {
        let created_at = DateTime::from(created_at);
        let insert_entity = TicketInsertEntity {
            title,
            description,
            price,
            status: TicketStatus::Open,
            owner,
            buyer: None,
            event_id,
            expiry: DateTime::from(expiry),
            created_at,
            updated_at: created_at,
        };

        let insert_result = self
            .database
            .collection::<TicketInsertEntity>(TICKETS)
            .insert_one(&insert_entity)
            .await
            .map_err(Error::from_insert)?;
        let id = repository::inserted_object_id(insert_result.inserted_id)?;

        Ok(Ticket {
            id,
            title: insert_entity.title,
            description: insert_entity.description,
            price: insert_entity.price,
            status: insert_entity.status,
            owner: insert_entity.owner,
            buyer: insert_entity.buyer,
            event_id: insert_entity.event_id,
            expiry: insert_entity.expiry.into(),
            created_at: insert_entity.created_at.into(),
            updated_at: insert_entity.updated_at.into(),
        })
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Ticket>, repository::Error> {
        let ticket = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! {
                "_id": id,
            })
            .await?
            .map(Ticket::from);

        Ok(ticket)
    }

    async fn find_many_open(
        &self,
        now: OffsetDateTime,
        pagination: input::Pagination,
    ) -> Result<Vec<Ticket>, repository::Error> {
        let filter = doc! {
            "status": TicketStatus::Open.as_ref(),
            "expiry": { "$gt": DateTime::from(now) },
        };

        self.find_many_by_filter(filter, pagination).await
    }

    async fn find_many_by_user(
        &self,
        user_id: ObjectId,
        user_type: input::TicketUserType,
        pagination: input::Pagination,
    ) -> Result<Vec<Ticket>, repository::Error> {
        let filter = match user_type {
            input::TicketUserType::Owner => doc! { "owner": user_id },
            input::TicketUserType::Buyer => doc! { "buyer": user_id },
        };

        self.find_many_by_filter(filter, pagination).await
    }

    async fn find_many_by_event(
        &self,
        event_id: ObjectId,
        pagination: input::Pagination,
    ) -> Result<Vec<Ticket>, repository::Error> {
        self.find_many_by_filter(doc! { "event_id": event_id }, pagination)
            .await
    }

    async fn update(
        &self,
        id: ObjectId,
        owner: ObjectId,
        title: String,
        description: Option<String>,
        price: i64,
        expiry: OffsetDateTime,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Ticket>, repository::Error> {
        let ticket = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one_and_update(
                doc! {
                    "_id": id,
                    "owner": owner,
                    "status": TicketStatus::Open.as_ref(),
                },
                doc! {
                    "$set": {
                        "title": title,
                        "description": description,
                        "price": price,
                        "expiry": DateTime::from(expiry),
                        "updated_at": DateTime::from(updated_at),
                    }
                },
            )
            .return_document(ReturnDocument::After)
            .await?
            .map(Ticket::from);

        Ok(ticket)
    }

    async fn delete(
        &self,
        id: ObjectId,
        owner: Option<ObjectId>,
    ) -> Result<bool, repository::Error> {
        let mut filter = doc! {
            "_id": id,
            "status": TicketStatus::Open.as_ref(),
        };
        if let Some(owner) = owner {
            filter.insert("owner", owner);
        }

        let delete_result = self
            .database
            .collection::<Document>(TICKETS)
            .delete_one(filter)
            .await?;

        Ok(delete_result.deleted_count == 1)
    }

    async fn buy(
        &self,
        id: ObjectId,
        buyer: ObjectId,
        now: OffsetDateTime,
    ) -> Result<Option<Ticket>, repository::Error> {
        let now = DateTime::from(now);

        let ticket = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one_and_update(
                doc! {
                    "_id": id,
                    "status": TicketStatus::Open.as_ref(),
                    "owner": { "$ne": buyer },
                    "expiry": { "$gt": now },
                },
                doc! {
                    "$set": {
                        "status": TicketStatus::Sold.as_ref(),
                        "buyer": buyer,
                        "updated_at": now,
                    }
                },
            )
            .return_document(ReturnDocument::After)
            .await?
            .map(Ticket::from);

        Ok(ticket)
    }
}
