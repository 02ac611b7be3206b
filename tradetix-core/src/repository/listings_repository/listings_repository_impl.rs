use super::{
    entity::{ListingFindEntity, ListingInsertEntity},
    Listing, ListingsRepository,
};
use crate::{
    dto::{input, ListingStatus},
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

const LISTINGS: &str = "listings";
const INDEX_NAME_UNIQUE_TICKET_ID: &str = "unique_ticket_id";

pub struct ListingsRepositoryImpl {
    database: Database,
}

impl ListingsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        repository::create_collection_if_not_exists(&database, LISTINGS).await?;

        let collection = database.collection::<Document>(LISTINGS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_TICKET_ID.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "ticket_id": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_UNIQUE_TICKET_ID.to_string())
                                .unique(true)
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = LISTINGS,
                index = INDEX_NAME_UNIQUE_TICKET_ID,
                "created index"
            );
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl ListingsRepository for ListingsRepositoryImpl {
    async fn insert(
        &self,
        ticket_id: ObjectId,
        price: i64,
        created_by: ObjectId,
        created_at: OffsetDateTime,
    ) -> Result<Listing, repository::Error> {
        let created_at = DateTime::from(created_at);
        let insert_entity = ListingInsertEntity {
            ticket_id,
            price,
            status: ListingStatus::Open,
            created_by,
            updated_by: created_by,
            created_at,
            updated_at: created_at,
        };

        let insert_result = self
            .database
            .collection::<ListingInsertEntity>(LISTINGS)
            .insert_one(&insert_entity)
            .await
            .map_err(Error::from_insert)?;
        let id = repository::inserted_object_id(insert_result.inserted_id)?;

        Ok(Listing {
            id,
            ticket_id,
            price,
            status: insert_entity.status,
            created_by,
            updated_by: created_by,
            created_at: created_at.into(),
            updated_at: created_at.into(),
        })
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Listing>, repository::Error> {
        let listing = self
            .database
            .collection::<ListingFindEntity>(LISTINGS)
            .find_one(doc! {
                "_id": id,
            })
            .await?
            .map(Listing::from);

        Ok(listing)
    }

    async fn find_by_ticket(
        &self,
        ticket_id: ObjectId,
    ) -> Result<Option<Listing>, repository::Error> {
        let listing = self
            .database
            .collection::<ListingFindEntity>(LISTINGS)
            .find_one(doc! {
                "ticket_id": ticket_id,
            })
            .await?
            .map(Listing::from);

        Ok(listing)
    }

    async fn find_many_open(
        &self,
        pagination: input::Pagination,
    ) -> Result<Vec<Listing>, repository::Error> {
        let listings = self
            .database
            .collection::<ListingFindEntity>(LISTINGS)
            .find(doc! {
                "status": ListingStatus::Open.as_ref(),
            })
            .sort(doc! { "created_at": -1 })
            .skip(pagination.skip())
            .limit(i64::from(pagination.limit))
            .await?
            .map_ok(Listing::from)
            .try_collect::<Vec<_>>()
            .await?;

        Ok(listings)
    }

    async fn update(
        &self,
        id: ObjectId,
        updated_by: ObjectId,
        current_status: ListingStatus,
        price: Option<i64>,
        status: Option<ListingStatus>,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Listing>, repository::Error> {
        let mut set = doc! {
            "updated_by": updated_by,
            "updated_at": DateTime::from(updated_at),
        };
        if let Some(price) = price {
            set.insert("price", price);
        }
        if let Some(status) = status {
            set.insert("status", status.as_ref());
        }

        let listing = self
            .database
            .collection::<ListingFindEntity>(LISTINGS)
            .find_one_and_update(
                doc! {
                    "_id": id,
                    "created_by": updated_by,
                    "status": current_status.as_ref(),
                },
                doc! {
                    "$set": set,
                },
            )
            .return_document(ReturnDocument::After)
            .await?
            .map(Listing::from);

        Ok(listing)
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
            .collection::<Document>(LISTINGS)
            .delete_one(filter)
            .await?;

        Ok(delete_result.deleted_count == 1)
    }

    async fn close_for_ticket(
        &self,
        ticket_id: ObjectId,
        updated_by: ObjectId,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Listing>, repository::Error> {
        let listing = self
            .database
            .collection::<ListingFindEntity>(LISTINGS)
            .find_one_and_update(
                doc! {
                    "ticket_id": ticket_id,
                    "status": ListingStatus::Open.as_ref(),
                },
                doc! {
                    "$set": {
                        "status": ListingStatus::Closed.as_ref(),
                        "updated_by": updated_by,
                        "updated_at": DateTime::from(updated_at),
                    }
                },
            )
            .return_document(ReturnDocument::After)
            .await?
            .map(Listing::from);

        Ok(listing)
    }
}
