use bson::{oid::ObjectId, Bson};
use mongodb::error::{ErrorKind, WriteFailure};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("insert unique violation")]
    InsertUniqueViolation,

    #[error("no document updated")]
    NoDocumentUpdated,

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

impl Error {
    ///
    /// Maps error returned by insert so that
    /// duplicate key becomes [Error::InsertUniqueViolation]
    ///
    pub fn from_insert(err: mongodb::error::Error) -> Self {
        let ErrorKind::Write(ref write_failure) = *err.kind else {
            return Error::Mongo(err);
        };

        let WriteFailure::WriteError(write_error) = write_failure else {
            return Error::Mongo(err);
        };

        const DUPLICATE_KEY_CODE: i32 = 11000;
        match write_error.code == DUPLICATE_KEY_CODE {
            true => Error::InsertUniqueViolation,
            false => Error::Mongo(err),
        }
    }
}

pub fn inserted_object_id(inserted_id: Bson) -> Result<ObjectId, Error> {
    match inserted_id {
        Bson::ObjectId(id) => Ok(id),
        _ => {
            tracing::error!("invalid type of inserted '_id'");
            Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
            ))
        }
    }
}
