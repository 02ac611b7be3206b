use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UserTickets {
    #[serde(default, rename = "userType")]
    pub user_type: TicketUserType,
}

///
/// Relation between the user and tickets he is looking for
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketUserType {
    #[default]
    Owner,
    Buyer,
}
