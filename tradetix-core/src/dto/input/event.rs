use serde::Deserialize;
use time::OffsetDateTime;

///
/// Body of event creation and partial event update
///
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub name: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
    pub venue: Option<String>,
    pub performers: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub is_available: Option<bool>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub valid_from: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub valid_to: Option<OffsetDateTime>,
}

impl Event {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.venue.is_none()
            && self.performers.is_none()
            && self.categories.is_none()
            && self.is_available.is_none()
            && self.valid_from.is_none()
            && self.valid_to.is_none()
    }
}
