use time::OffsetDateTime;

///
/// Validated fields of the new event
///
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub name: String,
    pub date: OffsetDateTime,
    pub venue: String,
    pub performers: Vec<String>,
    pub categories: Vec<String>,
    pub is_available: bool,
    pub valid_from: OffsetDateTime,
    pub valid_to: OffsetDateTime,
}

///
/// Fields of the event to overwrite, [None] leaves field unchanged
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EventUpdate {
    pub name: Option<String>,
    pub date: Option<OffsetDateTime>,
    pub venue: Option<String>,
    pub performers: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub is_available: Option<bool>,
    pub valid_from: Option<OffsetDateTime>,
    pub valid_to: Option<OffsetDateTime>,
}
