use super::{
    entity::{EventFindEntity, EventInsertEntity},
    Event, EventUpdate, EventsFilter, EventsRepository, EventsSort, NewEvent,
};
use crate::{
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

const EVENTS: &str = "events";
const INDEX_NAME_DATE: &str = "index_date";

pub struct EventsRepositoryImpl {
    database: Database,
}

impl EventsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        repository::create_collection_if_not_exists(&database, EVENTS).await?;

        let collection = database.collection::<Document>(EVENTS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_DATE.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "date": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_DATE.to_string())
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(collection = EVENTS, index = INDEX_NAME_DATE, "created index");
        }

        Ok(Self { database })
    }

    fn update_document(update: EventUpdate, updated_by: ObjectId, updated_at: DateTime) -> Document {
        let mut set = doc! {
            "updated_by": updated_by,
            "updated_at": updated_at,
        };
        if let Some(name) = update.name {
            set.insert("name", name);
        }
        if let Some(date) = update.date {
            set.insert("date", DateTime::from(date));
        }
        if let Some(venue) = update.venue {
            set.insert("venue", venue);
        }
        if let Some(performers) = update.performers {
            set.insert("performers", performers);
        }
        if let Some(categories) = update.categories {
            set.insert("categories", categories);
        }
        if let Some(is_available) = update.is_available {
            set.insert("is_available", is_available);
        }
        if let Some(valid_from) = update.valid_from {
            set.insert("valid_from", DateTime::from(valid_from));
        }
        if let Some(valid_to) = update.valid_to {
            set.insert("valid_to", DateTime::from(valid_to));
        }

        doc! { "$set": set }
    }
}

#[async_trait]
impl EventsRepository for EventsRepositoryImpl {
    async fn insert(
        &self,
        event: NewEvent,
        created_by: ObjectId,
        created_at: OffsetDateTime,
    ) -> Result<Event, repository::Error> {
        let created_at = DateTime::from(created_at);
        let insert_entity = EventInsertEntity {
            name: event.name,
            date: DateTime::from(event.date),
            venue: event.venue,
            performers: event.performers,
            categories: event.categories,
            is_available: event.is_available,
            valid_from: DateTime::from(event.valid_from),
            valid_to: DateTime::from(event.valid_to),
            created_by,
            updated_by: created_by,
            created_at,
            updated_at: created_at,
        };

        let insert_result = self
            .database
            .collection::<EventInsertEntity>(EVENTS)
            .insert_one(&insert_entity)
            .await
            .map_err(Error::from_insert)?;
        let id = repository::inserted_object_id(insert_result.inserted_id)?;

        Ok(Event {
            id,
            name: insert_entity.name,
            date: insert_entity.date.into(),
            venue: insert_entity.venue,
            performers: insert_entity.performers,
            categories: insert_entity.categories,
            is_available: insert_entity.is_available,
            valid_from: insert_entity.valid_from.into(),
            valid_to: insert_entity.valid_to.into(),
            created_by,
            updated_by: created_by,
            created_at: created_at.into(),
            updated_at: created_at.into(),
        })
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Event>, repository::Error> {
        let event = self
            .database
            .collection::<EventFindEntity>(EVENTS)
            .find_one(doc! {
                "_id": id,
            })
            .await?
            .map(Event::from);

        Ok(event)
    }

    async fn exists(&self, id: ObjectId) -> Result<bool, repository::Error> {
        let count = self
            .database
            .collection::<Document>(EVENTS)
            .count_documents(doc! {
                "_id": id,
            })
            .limit(1)
            .await?;

        Ok(count > 0)
    }

    async fn find_many(
        &self,
        filter: EventsFilter,
        sort: EventsSort,
        pagination: input::Pagination,
    ) -> Result<Vec<Event>, repository::Error> {
        let events = self
            .database
            .collection::<EventFindEntity>(EVENTS)
            .find(filter.as_document())
            .sort(sort.as_document())
            .skip(pagination.skip())
            .limit(i64::from(pagination.limit))
            .await?
            .map_ok(Event::from)
            .try_collect::<Vec<_>>()
            .await?;

        Ok(events)
    }

    async fn update(
        &self,
        id: ObjectId,
        updated_by: ObjectId,
        update: EventUpdate,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Event>, repository::Error> {
        let update = Self::update_document(update, updated_by, DateTime::from(updated_at));

        let event = self
            .database
            .collection::<EventFindEntity>(EVENTS)
            .find_one_and_update(
                doc! {
                    "_id": id,
                    "created_by": updated_by,
                },
                update,
            )
            .return_document(ReturnDocument::After)
            .await?
            .map(Event::from);

        Ok(event)
    }

    async fn delete(
        &self,
        id: ObjectId,
        created_by: Option<ObjectId>,
    ) -> Result<bool, repository::Error> {
        let mut filter = doc! {
            "_id": id,
        };
        if let Some(created_by) = created_by {
            filter.insert("created_by", created_by);
        }

        let delete_result = self
            .database
            .collection::<Document>(EVENTS)
            .delete_one(filter)
            .await?;

        Ok(delete_result.deleted_count == 1)
    }
}
