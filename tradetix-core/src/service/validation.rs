//!
//! Validation helpers shared by services
//!

use crate::{
    dto::input::{self, MAX_LIMIT},
    error::{Entity, Error},
};

///
/// Returns trimmed value or an error when value is missing or blank
///
pub fn required_string(
    entity: Entity,
    value: Option<String>,
    message: &'static str,
) -> Result<String, Error> {
    match value.map(|value| value.trim().to_string()) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Validation(entity, message)),
    }
}

pub fn required<T>(entity: Entity, value: Option<T>, message: &'static str) -> Result<T, Error> {
    value.ok_or(Error::Validation(entity, message))
}

pub fn positive_price(entity: Entity, price: i64) -> Result<i64, Error> {
    match price > 0 {
        true => Ok(price),
        false => Err(Error::Validation(entity, "price must be greater than 0")),
    }
}

pub fn pagination(entity: Entity, pagination: &input::Pagination) -> Result<(), Error> {
    if pagination.limit == 0 || pagination.limit > MAX_LIMIT {
        return Err(Error::Validation(entity, "limit must be between 1 and 100"));
    }
    if pagination.page == 0 {
        return Err(Error::Validation(entity, "page must be greater than 0"));
    }

    Ok(())
}
