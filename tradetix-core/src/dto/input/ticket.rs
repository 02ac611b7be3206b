use serde::Deserialize;
use time::OffsetDateTime;

///
/// Body of ticket creation and ticket update
///
#[derive(Debug, Deserialize)]
pub struct Ticket {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub expiry: Option<OffsetDateTime>,
}
