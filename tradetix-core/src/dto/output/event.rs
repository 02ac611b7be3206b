use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub venue: String,
    pub performers: Vec<String>,
    pub categories: Vec<String>,
    pub is_available: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub valid_from: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub valid_to: OffsetDateTime,
    pub created_by: String,
    pub updated_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<repository::Event> for Event {
    fn from(value: repository::Event) -> Self {
        Self {
            id: value.id.to_hex(),
            name: value.name,
            date: value.date,
            venue: value.venue,
            performers: value.performers,
            categories: value.categories,
            is_available: value.is_available,
            valid_from: value.valid_from,
            valid_to: value.valid_to,
            created_by: value.created_by.to_hex(),
            updated_by: value.updated_by.to_hex(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
