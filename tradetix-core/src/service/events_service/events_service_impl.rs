use super::EventsService;
use crate::{
    auth,
    dto::{input, output},
    error::{Entity, Error},
    repository::{
        EventUpdate, EventsFilter, EventsRepository, EventsSort, EventsSortField, NewEvent,
    },
    service::validation,
};
use axum::async_trait;
use bson::oid::ObjectId;
use jwt_auth::User;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct EventsServiceImpl {
    repository: Arc<dyn EventsRepository>,
}

impl EventsServiceImpl {
    pub fn new(repository: Arc<dyn EventsRepository>) -> Self {
        Self { repository }
    }

    fn validate_create_event(event: input::Event) -> Result<NewEvent, Error> {
        let name = validation::required_string(Entity::Event, event.name, "name is required")?;
        let date = validation::required(Entity::Event, event.date, "date is required")?;
        let venue = validation::required_string(Entity::Event, event.venue, "venue is required")?;
        let performers = Self::validate_names(
            validation::required(Entity::Event, event.performers, "performers are required")?,
            "performers are required",
        )?;
        let categories = Self::validate_names(
            validation::required(Entity::Event, event.categories, "categories are required")?,
            "categories are required",
        )?;
        let valid_from =
            validation::required(Entity::Event, event.valid_from, "validFrom is required")?;
        let valid_to = validation::required(Entity::Event, event.valid_to, "validTo is required")?;
        Self::validate_validity(valid_from, valid_to)?;

        Ok(NewEvent {
            name,
            date,
            venue,
            performers,
            categories,
            is_available: event.is_available.unwrap_or(false),
            valid_from,
            valid_to,
        })
    }

    fn validate_update_event(event: input::Event) -> Result<EventUpdate, Error> {
        if event.is_empty() {
            return Err(Error::Validation(Entity::Event, "nothing to update"));
        }

        let name = event
            .name
            .map(|name| validation::required_string(Entity::Event, Some(name), "name is blank"))
            .transpose()?;
        let venue = event
            .venue
            .map(|venue| validation::required_string(Entity::Event, Some(venue), "venue is blank"))
            .transpose()?;
        let performers = event
            .performers
            .map(|performers| Self::validate_names(performers, "performers are required"))
            .transpose()?;
        let categories = event
            .categories
            .map(|categories| Self::validate_names(categories, "categories are required"))
            .transpose()?;
        if let (Some(valid_from), Some(valid_to)) = (event.valid_from, event.valid_to) {
            Self::validate_validity(valid_from, valid_to)?;
        }

        Ok(EventUpdate {
            name,
            date: event.date,
            venue,
            performers,
            categories,
            is_available: event.is_available,
            valid_from: event.valid_from,
            valid_to: event.valid_to,
        })
    }

    fn validate_names(names: Vec<String>, message: &'static str) -> Result<Vec<String>, Error> {
        let names = names
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>();

        match names.is_empty() {
            true => Err(Error::Validation(Entity::Event, message)),
            false => Ok(names),
        }
    }

    fn validate_validity(
        valid_from: OffsetDateTime,
        valid_to: OffsetDateTime,
    ) -> Result<(), Error> {
        match valid_from <= valid_to {
            true => Ok(()),
            false => Err(Error::Validation(
                Entity::Event,
                "validFrom must not be after validTo",
            )),
        }
    }

    fn parse_sort(sort: Option<&str>) -> Result<EventsSort, Error> {
        let Some(sort) = sort else {
            return Ok(EventsSort::default());
        };

        let (field, descending) = match sort.strip_prefix('-') {
            Some(field) => (field, true),
            None => (sort, false),
        };
        let field = match field {
            "createdAt" => EventsSortField::CreatedAt,
            "date" => EventsSortField::Date,
            "name" => EventsSortField::Name,
            _ => return Err(Error::Validation(Entity::Event, "unsupported sort field")),
        };

        Ok(EventsSort { field, descending })
    }
}

#[async_trait]
impl EventsService for EventsServiceImpl {
    async fn create_event(
        &self,
        created_by: ObjectId,
        event: input::Event,
    ) -> Result<output::Event, Error> {
        tracing::info!("creating event");
        tracing::trace!(?event);

        let event = Self::validate_create_event(event)?;

        let event = self
            .repository
            .insert(event, created_by, OffsetDateTime::now_utc())
            .await?;
        tracing::info!(id = %event.id, "created event");

        Ok(event.into())
    }

    async fn find_events(
        &self,
        filters: input::EventFilters,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Event>, Error> {
        tracing::info!("finding events");
        tracing::trace!(?filters, ?pagination);

        validation::pagination(Entity::Event, &pagination)?;
        let sort = Self::parse_sort(filters.sort.as_deref())?;
        let filter = EventsFilter {
            venue: filters.venue,
            category: filters.category,
            performer: filters.performer,
            is_available: filters.is_available,
        };

        let events = self.repository.find_many(filter, sort, pagination).await?;
        tracing::info!(count = events.len(), "found events");

        Ok(events.into_iter().map(output::Event::from).collect())
    }

    async fn find_event(&self, id: ObjectId) -> Result<output::Event, Error> {
        tracing::info!(%id, "finding event");

        let event = self
            .repository
            .find(id)
            .await?
            .ok_or(Error::NotFound(Entity::Event))?;

        Ok(event.into())
    }

    async fn update_event(
        &self,
        id: ObjectId,
        updated_by: ObjectId,
        event: input::Event,
    ) -> Result<output::Event, Error> {
        tracing::info!(%id, "updating event");
        tracing::trace!(?event);

        let update = Self::validate_update_event(event)?;

        if update.valid_from.is_some() != update.valid_to.is_some() {
            let current = self
                .repository
                .find(id)
                .await?
                .ok_or(Error::NotFound(Entity::Event))?;
            Self::validate_validity(
                update.valid_from.unwrap_or(current.valid_from),
                update.valid_to.unwrap_or(current.valid_to),
            )?;
        }

        let event = self
            .repository
            .update(id, updated_by, update, OffsetDateTime::now_utc())
            .await?
            .ok_or(Error::NotFound(Entity::Event))?;
        tracing::info!(%id, "updated event");

        Ok(event.into())
    }

    async fn delete_event(&self, id: ObjectId, user: User) -> Result<(), Error> {
        tracing::info!(%id, "deleting event");

        let created_by = match auth::is_admin(&user) {
            true => None,
            false => Some(user.id),
        };

        match self.repository.delete(id, created_by).await? {
            true => {
                tracing::info!(%id, "deleted event");
                Ok(())
            }
            false => Err(Error::NotFound(Entity::Event)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::{self, MockEventsRepository};
    use time::macros::datetime;

    fn input_event() -> input::Event {
        input::Event {
            name: Some("Sunburn".to_string()),
            date: Some(datetime!(2030-12-28 18:00 UTC)),
            venue: Some("Goa".to_string()),
            performers: Some(vec!["Martin Garrix".to_string()]),
            categories: Some(vec!["edm".to_string()]),
            is_available: None,
            valid_from: Some(datetime!(2030-11-01 00:00 UTC)),
            valid_to: Some(datetime!(2030-12-28 18:00 UTC)),
        }
    }

    fn empty_input_event() -> input::Event {
        input::Event {
            name: None,
            date: None,
            venue: None,
            performers: None,
            categories: None,
            is_available: None,
            valid_from: None,
            valid_to: None,
        }
    }

    fn repository_event(id: ObjectId, created_by: ObjectId, event: NewEvent) -> repository::Event {
        repository::Event {
            id,
            name: event.name,
            date: event.date,
            venue: event.venue,
            performers: event.performers,
            categories: event.categories,
            is_available: event.is_available,
            valid_from: event.valid_from,
            valid_to: event.valid_to,
            created_by,
            updated_by: created_by,
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn parse_sort_default() {
        let sort = EventsServiceImpl::parse_sort(None).unwrap();

        assert_eq!(sort, EventsSort::default());
    }

    #[test]
    fn parse_sort_descending_date() {
        let sort = EventsServiceImpl::parse_sort(Some("-date")).unwrap();

        assert_eq!(
            sort,
            EventsSort {
                field: EventsSortField::Date,
                descending: true,
            }
        );
    }

    #[test]
    fn parse_sort_unsupported_field() {
        let sort = EventsServiceImpl::parse_sort(Some("password"));

        assert!(matches!(sort, Err(Error::Validation(Entity::Event, _))));
    }

    #[tokio::test]
    async fn create_event_missing_venue() {
        let service = EventsServiceImpl::new(Arc::new(MockEventsRepository::new()));
        let mut event = input_event();
        event.venue = None;

        let create_result = service.create_event(ObjectId::new(), event).await;

        assert!(matches!(
            create_result,
            Err(Error::Validation(Entity::Event, _))
        ));
    }

    #[tokio::test]
    async fn create_event_valid_from_after_valid_to() {
        let service = EventsServiceImpl::new(Arc::new(MockEventsRepository::new()));
        let mut event = input_event();
        event.valid_from = Some(datetime!(2031-01-01 00:00 UTC));

        let create_result = service.create_event(ObjectId::new(), event).await;

        assert!(matches!(
            create_result,
            Err(Error::Validation(Entity::Event, _))
        ));
    }

    #[tokio::test]
    async fn create_event_not_available_by_default() {
        let mut repository = MockEventsRepository::new();
        repository
            .expect_insert()
            .returning(|event, created_by, _| {
                assert!(!event.is_available);
                Ok(repository_event(ObjectId::new(), created_by, event))
            });
        let service = EventsServiceImpl::new(Arc::new(repository));

        let event = service
            .create_event(ObjectId::new(), input_event())
            .await
            .unwrap();

        assert!(!event.is_available);
        assert_eq!(event.venue, "Goa");
    }

    #[tokio::test]
    async fn find_events_passes_typed_filters() {
        let mut repository = MockEventsRepository::new();
        repository
            .expect_find_many()
            .returning(|filter, sort, _| {
                assert_eq!(filter.venue.as_deref(), Some("Goa"));
                assert_eq!(filter.is_available, Some(true));
                assert_eq!(sort.field, EventsSortField::Name);
                assert!(!sort.descending);
                Ok(vec![])
            });
        let service = EventsServiceImpl::new(Arc::new(repository));

        let events = service
            .find_events(
                input::EventFilters {
                    sort: Some("name".to_string()),
                    venue: Some("Goa".to_string()),
                    is_available: Some(true),
                    ..Default::default()
                },
                input::Pagination::default(),
            )
            .await
            .unwrap();

        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn update_event_empty() {
        let service = EventsServiceImpl::new(Arc::new(MockEventsRepository::new()));

        let update_result = service
            .update_event(ObjectId::new(), ObjectId::new(), empty_input_event())
            .await;

        assert!(matches!(
            update_result,
            Err(Error::Validation(Entity::Event, _))
        ));
    }

    #[tokio::test]
    async fn update_event_not_creator() {
        let mut repository = MockEventsRepository::new();
        repository
            .expect_update()
            .returning(|_, _, _, _| Ok(None));
        let service = EventsServiceImpl::new(Arc::new(repository));
        let mut event = empty_input_event();
        event.name = Some("Sunburn Arena".to_string());

        let update_result = service
            .update_event(ObjectId::new(), ObjectId::new(), event)
            .await;

        assert!(matches!(update_result, Err(Error::NotFound(Entity::Event))));
    }

    #[tokio::test]
    async fn update_event_valid_to_before_current_valid_from() {
        let mut repository = MockEventsRepository::new();
        repository.expect_find().returning(|id| {
            let event = EventsServiceImpl::validate_create_event(input_event()).unwrap();
            Ok(Some(repository_event(id, ObjectId::new(), event)))
        });
        repository.expect_update().never();
        let service = EventsServiceImpl::new(Arc::new(repository));
        let mut event = empty_input_event();
        event.valid_to = Some(datetime!(2030-10-01 00:00 UTC));

        let update_result = service
            .update_event(ObjectId::new(), ObjectId::new(), event)
            .await;

        assert!(matches!(
            update_result,
            Err(Error::Validation(Entity::Event, _))
        ));
    }

    #[tokio::test]
    async fn find_event_not_exist() {
        let mut repository = MockEventsRepository::new();
        repository.expect_find().returning(|_| Ok(None));
        let service = EventsServiceImpl::new(Arc::new(repository));

        let find_result = service.find_event(ObjectId::new()).await;

        assert!(matches!(find_result, Err(Error::NotFound(Entity::Event))));
    }
}
