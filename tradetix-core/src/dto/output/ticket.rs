use crate::{dto::TicketStatus, repository};
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub status: TicketStatus,
    pub owner: String,
    pub buyer: Option<String>,
    pub event_id: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub expiry: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<repository::Ticket> for Ticket {
    fn from(value: repository::Ticket) -> Self {
        Self {
            id: value.id.to_hex(),
            title: value.title,
            description: value.description,
            price: value.price,
            status: value.status,
            owner: value.owner.to_hex(),
            buyer: value.buyer.map(|buyer| buyer.to_hex()),
            event_id: value.event_id.map(|event_id| event_id.to_hex()),
            expiry: value.expiry,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bson::oid::ObjectId;
    use serde_json::Value;
    use time::macros::datetime;

    #[test]
    fn ticket_json_serialize_ok() {
        let owner = ObjectId::new();
        let ticket = Ticket::from(repository::Ticket {
            id: ObjectId::new(),
            title: "Arijit Singh Concert".to_string(),
            description: None,
            price: 1000,
            status: TicketStatus::Open,
            owner,
            buyer: None,
            event_id: None,
            expiry: datetime!(2030-12-31 00:00 UTC),
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        });

        let json = serde_json::to_value(&ticket).unwrap();

        assert_eq!(json.get("owner"), Some(&Value::from(owner.to_hex())));
        assert_eq!(json.get("status"), Some(&Value::from("open")));
        assert_eq!(json.get("expiry"), Some(&Value::from("2030-12-31T00:00:00Z")));
        assert_eq!(json.get("buyer"), Some(&Value::Null));
    }
}
