use serde::{Deserialize, Serialize};
use strum::AsRefStr;

///
/// Ticket can be sold only once, so the only
/// transition is [TicketStatus::Open] -> [TicketStatus::Sold]
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TicketStatus {
    Open,
    Sold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ListingStatus {
    Open,
    Closed,
}
