use serde::Deserialize;

///
/// Query parameters narrowing the list of events.
///
/// `sort` is a field name optionally prefixed with `-`
/// for descending order
///
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilters {
    pub sort: Option<String>,
    pub venue: Option<String>,
    pub category: Option<String>,
    pub performer: Option<String>,
    pub is_available: Option<bool>,
}
