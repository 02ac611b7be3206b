use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BankDetails {
    #[serde(rename = "accountNumber")]
    pub account_number: Option<String>,
    #[serde(rename = "IFSCCode")]
    pub ifsc_code: Option<String>,
}
