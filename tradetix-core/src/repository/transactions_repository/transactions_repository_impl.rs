use super::{
    entity::{TransactionFindEntity, TransactionInsertEntity},
    Transaction, TransactionsRepository,
};
use crate::{
    dto::input,
    repository::{self, Error},
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Database, IndexModel};
use time::OffsetDateTime;

const TRANSACTIONS: &str = "transactions";
const INDEX_NAME_SELLER_ID: &str = "index_seller_id";
const INDEX_NAME_BUYER_ID: &str = "index_buyer_id";

pub struct TransactionsRepositoryImpl {
    database: Database,
}

impl TransactionsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        repository::create_collection_if_not_exists(&database, TRANSACTIONS).await?;

        let collection = database.collection::<Document>(TRANSACTIONS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        for (index_name, key) in [
            (INDEX_NAME_SELLER_ID, "seller_id"),
            (INDEX_NAME_BUYER_ID, "buyer_id"),
        ] {
            if index_names.contains(&index_name.to_string()) {
                continue;
            }

            let mut keys = Document::new();
            keys.insert(key, 1);

            collection
                .create_index(
                    IndexModel::builder()
                        .keys(keys)
                        .options(
                            IndexOptions::builder()
                                .name(index_name.to_string())
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(collection = TRANSACTIONS, index = index_name, "created index");
        }

        Ok(Self { database })
    }

    fn participant_filter(participant: Option<ObjectId>) -> Document {
        match participant {
            Some(participant) => doc! {
                "$or": [
                    { "seller_id": participant },
                    { "buyer_id": participant },
                ]
            },
            None => Document::new(),
        }
    }
}

#[async_trait]
impl TransactionsRepository for TransactionsRepositoryImpl {
    async fn insert(
        &self,
        ticket_id: ObjectId,
        listing_id: Option<ObjectId>,
        seller_id: ObjectId,
        buyer_id: ObjectId,
        sale_price: i64,
        created_at: OffsetDateTime,
    ) -> Result<Transaction, repository::Error> {
        let created_at = DateTime::from(created_at);
        let insert_entity = TransactionInsertEntity {
            ticket_id,
            listing_id,
            seller_id,
            buyer_id,
            sale_price,
            created_at,
        };

        let insert_result = self
            .database
            .collection::<TransactionInsertEntity>(TRANSACTIONS)
            .insert_one(&insert_entity)
            .await
            .map_err(Error::from_insert)?;
        let id = repository::inserted_object_id(insert_result.inserted_id)?;

        Ok(Transaction {
            id,
            ticket_id,
            listing_id,
            seller_id,
            buyer_id,
            sale_price,
            created_at: created_at.into(),
        })
    }

    async fn find(
        &self,
        id: ObjectId,
        participant: Option<ObjectId>,
    ) -> Result<Option<Transaction>, repository::Error> {
        let mut filter = Self::participant_filter(participant);
        filter.insert("_id", id);

        let transaction = self
            .database
            .collection::<TransactionFindEntity>(TRANSACTIONS)
            .find_one(filter)
            .await?
            .map(Transaction::from);

        Ok(transaction)
    }

    async fn find_many(
        &self,
        participant: Option<ObjectId>,
        pagination: input::Pagination,
    ) -> Result<Vec<Transaction>, repository::Error> {
        let transactions = self
            .database
            .collection::<TransactionFindEntity>(TRANSACTIONS)
            .find(Self::participant_filter(participant))
            .sort(doc! { "created_at": -1 })
            .skip(pagination.skip())
            .limit(i64::from(pagination.limit))
            .await?
            .map_ok(Transaction::from)
            .try_collect::<Vec<_>>()
            .await?;

        Ok(transactions)
    }
}
