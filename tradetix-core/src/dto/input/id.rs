use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer};

///
/// ObjectId passed in URI as a hex string
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id(pub ObjectId);

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let string = String::deserialize(d)?;
        let id = ObjectId::parse_str(&string)
            .map_err(|_| serde::de::Error::custom(format!("invalid id: {string}")))?;

        Ok(Self(id))
    }
}
