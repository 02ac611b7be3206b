use crate::repository::events_repository::entity::EventFindEntity;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct Event {
    pub id: ObjectId,

    pub name: String,
    pub date: OffsetDateTime,
    pub venue: String,
    pub performers: Vec<String>,
    pub categories: Vec<String>,
    pub is_available: bool,

    pub valid_from: OffsetDateTime,
    pub valid_to: OffsetDateTime,

    pub created_by: ObjectId,
    pub updated_by: ObjectId,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<EventFindEntity> for Event {
    fn from(value: EventFindEntity) -> Self {
        Self {
            id: value._id,
            name: value.name,
            date: value.date.into(),
            venue: value.venue,
            performers: value.performers,
            categories: value.categories,
            is_available: value.is_available,
            valid_from: value.valid_from.into(),
            valid_to: value.valid_to.into(),
            created_by: value.created_by,
            updated_by: value.updated_by,
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        }
    }
}
