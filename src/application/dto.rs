// src/application/dto.rs
use crate::domain::{NamingConvention, account::Account};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Spelling of every payload field, matching the `rename_all` attributes on
/// the request and response types. Problem payloads must use the same one.
pub const PAYLOAD_NAMING: NamingConvention = NamingConvention::CamelCase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: u64,
    pub email: String,
    pub display_name: String,
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.0,
            email: account.email,
            display_name: account.display_name,
        }
    }
}
