use crate::dto::ListingStatus;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Listing {
    pub price: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ListingUpdate {
    pub price: Option<i64>,
    pub status: Option<ListingStatus>,
}
