use super::ListingsService;
use crate::{
    auth,
    dto::{input, output, TicketStatus},
    error::{Entity, Error},
    repository::{self, ListingsRepository, TicketsRepository},
    service::validation,
};
use axum::async_trait;
use bson::oid::ObjectId;
use jwt_auth::User;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct ListingsServiceImpl {
    listings_repository: Arc<dyn ListingsRepository>,
    tickets_repository: Arc<dyn TicketsRepository>,
}

impl ListingsServiceImpl {
    pub fn new(
        listings_repository: Arc<dyn ListingsRepository>,
        tickets_repository: Arc<dyn TicketsRepository>,
    ) -> Self {
        Self {
            listings_repository,
            tickets_repository,
        }
    }
}

#[async_trait]
impl ListingsService for ListingsServiceImpl {
    async fn create_listing(
        &self,
        ticket_id: ObjectId,
        created_by: ObjectId,
        listing: input::Listing,
    ) -> Result<output::Listing, Error> {
        tracing::info!(%ticket_id, "creating listing");
        tracing::trace!(?listing);

        let price = validation::required(Entity::Listing, listing.price, "price is required")?;
        let price = validation::positive_price(Entity::Listing, price)?;

        let ticket = self
            .tickets_repository
            .find(ticket_id)
            .await?
            .filter(|ticket| ticket.owner == created_by && ticket.status == TicketStatus::Open)
            .ok_or(Error::NotFound(Entity::Ticket))?;

        let listing = self
            .listings_repository
            .insert(ticket.id, price, created_by, OffsetDateTime::now_utc())
            .await
            .map_err(|err| match err {
                repository::Error::InsertUniqueViolation => Error::AlreadyExists(Entity::Listing),
                err => Error::Database(err),
            })?;
        tracing::info!(id = %listing.id, "created listing");

        Ok(listing.into())
    }

    async fn find_ticket_listing(&self, ticket_id: ObjectId) -> Result<output::Listing, Error> {
        tracing::info!(%ticket_id, "finding ticket listing");

        let listing = self
            .listings_repository
            .find_by_ticket(ticket_id)
            .await?
            .ok_or(Error::NotFound(Entity::Listing))?;

        Ok(listing.into())
    }

    async fn find_open_listings(
        &self,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Listing>, Error> {
        tracing::info!("finding open listings");
        tracing::trace!(?pagination);

        validation::pagination(Entity::Listing, &pagination)?;

        let listings = self.listings_repository.find_many_open(pagination).await?;
        tracing::info!(count = listings.len(), "found listings");

        Ok(listings.into_iter().map(output::Listing::from).collect())
    }

    async fn update_listing(
        &self,
        id: ObjectId,
        updated_by: ObjectId,
        listing: input::ListingUpdate,
    ) -> Result<output::Listing, Error> {
        tracing::info!(%id, "updating listing");
        tracing::trace!(?listing);

        if listing.price.is_none() && listing.status.is_none() {
            return Err(Error::Validation(Entity::Listing, "nothing to update"));
        }
        let price = listing
            .price
            .map(|price| validation::positive_price(Entity::Listing, price))
            .transpose()?;

        let current = self
            .listings_repository
            .find(id)
            .await?
            .filter(|current| current.created_by == updated_by)
            .ok_or(Error::NotFound(Entity::Listing))?;

        let ticket = self
            .tickets_repository
            .find(current.ticket_id)
            .await?
            .ok_or(Error::NotFound(Entity::Ticket))?;
        if ticket.status != TicketStatus::Open {
            return Err(Error::TicketAlreadySold);
        }

        let listing = self
            .listings_repository
            .update(
                id,
                updated_by,
                current.status,
                price,
                listing.status,
                OffsetDateTime::now_utc(),
            )
            .await?
            .ok_or(Error::NotFound(Entity::Listing))?;
        tracing::info!(%id, "updated listing");

        Ok(listing.into())
    }

    async fn delete_listing(&self, id: ObjectId, user: User) -> Result<(), Error> {
        tracing::info!(%id, "deleting listing");

        let created_by = match auth::is_admin(&user) {
            true => None,
            false => Some(user.id),
        };

        match self.listings_repository.delete(id, created_by).await? {
            true => {
                tracing::info!(%id, "deleted listing");
                Ok(())
            }
            false => Err(Error::NotFound(Entity::Listing)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        auth::Role,
        dto::ListingStatus,
        repository::{MockListingsRepository, MockTicketsRepository},
    };
    use std::time::Duration;

    fn repository_ticket(id: ObjectId, owner: ObjectId, status: TicketStatus) -> repository::Ticket {
        repository::Ticket {
            id,
            title: "Arijit Singh Concert".to_string(),
            description: None,
            price: 1000,
            status,
            owner,
            buyer: None,
            event_id: None,
            expiry: OffsetDateTime::now_utc() + Duration::from_secs(3600),
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    fn repository_listing(
        ticket_id: ObjectId,
        price: i64,
        created_by: ObjectId,
    ) -> repository::Listing {
        repository::Listing {
            id: ObjectId::new(),
            ticket_id,
            price,
            status: ListingStatus::Open,
            created_by,
            updated_by: created_by,
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    fn create_service(
        listings_repository: MockListingsRepository,
        tickets_repository: MockTicketsRepository,
    ) -> ListingsServiceImpl {
        ListingsServiceImpl::new(Arc::new(listings_repository), Arc::new(tickets_repository))
    }

    #[tokio::test]
    async fn create_listing_missing_price() {
        let service = create_service(MockListingsRepository::new(), MockTicketsRepository::new());

        let create_result = service
            .create_listing(
                ObjectId::new(),
                ObjectId::new(),
                input::Listing { price: None },
            )
            .await;

        assert!(matches!(
            create_result,
            Err(Error::Validation(Entity::Listing, _))
        ));
    }

    #[tokio::test]
    async fn create_listing_not_owner() {
        let mut tickets_repository = MockTicketsRepository::new();
        tickets_repository.expect_find().returning(|id| {
            Ok(Some(repository_ticket(
                id,
                ObjectId::new(),
                TicketStatus::Open,
            )))
        });
        let service = create_service(MockListingsRepository::new(), tickets_repository);

        let create_result = service
            .create_listing(
                ObjectId::new(),
                ObjectId::new(),
                input::Listing { price: Some(1500) },
            )
            .await;

        assert!(matches!(create_result, Err(Error::NotFound(Entity::Ticket))));
    }

    #[tokio::test]
    async fn create_listing_ticket_sold() {
        let owner = ObjectId::new();
        let mut tickets_repository = MockTicketsRepository::new();
        tickets_repository
            .expect_find()
            .returning(move |id| Ok(Some(repository_ticket(id, owner, TicketStatus::Sold))));
        let service = create_service(MockListingsRepository::new(), tickets_repository);

        let create_result = service
            .create_listing(ObjectId::new(), owner, input::Listing { price: Some(1500) })
            .await;

        assert!(matches!(create_result, Err(Error::NotFound(Entity::Ticket))));
    }

    #[tokio::test]
    async fn create_listing_already_listed() {
        let owner = ObjectId::new();
        let mut tickets_repository = MockTicketsRepository::new();
        tickets_repository
            .expect_find()
            .returning(move |id| Ok(Some(repository_ticket(id, owner, TicketStatus::Open))));
        let mut listings_repository = MockListingsRepository::new();
        listings_repository
            .expect_insert()
            .returning(|_, _, _, _| Err(repository::Error::InsertUniqueViolation));
        let service = create_service(listings_repository, tickets_repository);

        let create_result = service
            .create_listing(ObjectId::new(), owner, input::Listing { price: Some(1500) })
            .await;

        assert!(matches!(
            create_result,
            Err(Error::AlreadyExists(Entity::Listing))
        ));
    }

    #[tokio::test]
    async fn create_listing_ok() {
        let owner = ObjectId::new();
        let mut tickets_repository = MockTicketsRepository::new();
        tickets_repository
            .expect_find()
            .returning(move |id| Ok(Some(repository_ticket(id, owner, TicketStatus::Open))));
        let mut listings_repository = MockListingsRepository::new();
        listings_repository
            .expect_insert()
            .returning(|ticket_id, price, created_by, _| {
                Ok(repository_listing(ticket_id, price, created_by))
            });
        let service = create_service(listings_repository, tickets_repository);

        let ticket_id = ObjectId::new();
        let listing = service
            .create_listing(ticket_id, owner, input::Listing { price: Some(1500) })
            .await
            .unwrap();

        assert_eq!(listing.ticket_id, ticket_id.to_hex());
        assert_eq!(listing.price, 1500);
        assert_eq!(listing.status, ListingStatus::Open);
    }

    #[tokio::test]
    async fn update_listing_nothing_to_update() {
        let service = create_service(MockListingsRepository::new(), MockTicketsRepository::new());

        let update_result = service
            .update_listing(
                ObjectId::new(),
                ObjectId::new(),
                input::ListingUpdate {
                    price: None,
                    status: None,
                },
            )
            .await;

        assert!(matches!(
            update_result,
            Err(Error::Validation(Entity::Listing, _))
        ));
    }

    #[tokio::test]
    async fn update_listing_not_exist() {
        let mut listings_repository = MockListingsRepository::new();
        listings_repository.expect_find().returning(|_| Ok(None));
        listings_repository.expect_update().never();
        let service = create_service(listings_repository, MockTicketsRepository::new());

        let update_result = service
            .update_listing(
                ObjectId::new(),
                ObjectId::new(),
                input::ListingUpdate {
                    price: Some(2000),
                    status: None,
                },
            )
            .await;

        assert!(matches!(
            update_result,
            Err(Error::NotFound(Entity::Listing))
        ));
    }

    #[tokio::test]
    async fn update_listing_of_someone_else() {
        let mut listings_repository = MockListingsRepository::new();
        listings_repository.expect_find().returning(|_| {
            Ok(Some(repository_listing(
                ObjectId::new(),
                1000,
                ObjectId::new(),
            )))
        });
        listings_repository.expect_update().never();
        let service = create_service(listings_repository, MockTicketsRepository::new());

        let update_result = service
            .update_listing(
                ObjectId::new(),
                ObjectId::new(),
                input::ListingUpdate {
                    price: Some(2000),
                    status: None,
                },
            )
            .await;

        assert!(matches!(
            update_result,
            Err(Error::NotFound(Entity::Listing))
        ));
    }

    #[tokio::test]
    async fn update_listing_reopen_after_ticket_sold() {
        let seller = ObjectId::new();
        let mut listings_repository = MockListingsRepository::new();
        listings_repository.expect_find().returning(move |_| {
            let mut listing = repository_listing(ObjectId::new(), 1000, seller);
            listing.status = ListingStatus::Closed;
            Ok(Some(listing))
        });
        listings_repository.expect_update().never();
        let mut tickets_repository = MockTicketsRepository::new();
        tickets_repository.expect_find().returning(|id| {
            Ok(Some(repository_ticket(
                id,
                ObjectId::new(),
                TicketStatus::Sold,
            )))
        });
        let service = create_service(listings_repository, tickets_repository);

        let update_result = service
            .update_listing(
                ObjectId::new(),
                seller,
                input::ListingUpdate {
                    price: None,
                    status: Some(ListingStatus::Open),
                },
            )
            .await;

        assert!(matches!(update_result, Err(Error::TicketAlreadySold)));
    }

    #[tokio::test]
    async fn update_listing_closed_by_sale_in_the_meantime() {
        let seller = ObjectId::new();
        let mut listings_repository = MockListingsRepository::new();
        listings_repository
            .expect_find()
            .returning(move |_| Ok(Some(repository_listing(ObjectId::new(), 1000, seller))));
        listings_repository
            .expect_update()
            .returning(|_, _, current_status, _, _, _| {
                assert_eq!(current_status, ListingStatus::Open);
                Ok(None)
            });
        let mut tickets_repository = MockTicketsRepository::new();
        tickets_repository
            .expect_find()
            .returning(move |id| Ok(Some(repository_ticket(id, seller, TicketStatus::Open))));
        let service = create_service(listings_repository, tickets_repository);

        let update_result = service
            .update_listing(
                ObjectId::new(),
                seller,
                input::ListingUpdate {
                    price: Some(2000),
                    status: None,
                },
            )
            .await;

        assert!(matches!(
            update_result,
            Err(Error::NotFound(Entity::Listing))
        ));
    }

    #[tokio::test]
    async fn update_listing_reopen_open_ticket() {
        let seller = ObjectId::new();
        let mut listings_repository = MockListingsRepository::new();
        listings_repository.expect_find().returning(move |id| {
            let mut listing = repository_listing(ObjectId::new(), 1000, seller);
            listing.id = id;
            listing.status = ListingStatus::Closed;
            Ok(Some(listing))
        });
        listings_repository.expect_update().returning(
            move |id, updated_by, current_status, price, status, _| {
                assert_eq!(current_status, ListingStatus::Closed);
                assert_eq!(price, None);

                let mut listing = repository_listing(ObjectId::new(), 1000, updated_by);
                listing.id = id;
                listing.status = status.unwrap_or(current_status);
                Ok(Some(listing))
            },
        );
        let mut tickets_repository = MockTicketsRepository::new();
        tickets_repository
            .expect_find()
            .returning(move |id| Ok(Some(repository_ticket(id, seller, TicketStatus::Open))));
        let service = create_service(listings_repository, tickets_repository);

        let listing = service
            .update_listing(
                ObjectId::new(),
                seller,
                input::ListingUpdate {
                    price: None,
                    status: Some(ListingStatus::Open),
                },
            )
            .await
            .unwrap();

        assert_eq!(listing.status, ListingStatus::Open);
    }

    #[tokio::test]
    async fn delete_listing_admin_any_creator() {
        let admin = User::new(
            ObjectId::new(),
            Role::Admin.as_ref().to_string(),
            "token".to_string(),
        );
        let mut listings_repository = MockListingsRepository::new();
        listings_repository
            .expect_delete()
            .returning(|_, created_by| {
                assert_eq!(created_by, None);
                Ok(true)
            });
        let service = create_service(listings_repository, MockTicketsRepository::new());

        service
            .delete_listing(ObjectId::new(), admin)
            .await
            .unwrap();
    }
}
