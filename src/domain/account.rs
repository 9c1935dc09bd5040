// src/domain/account.rs
use super::{
    errors::{DomainError, DomainResult},
    field_errors::FieldErrors,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub display_name: String,
}

/// Unvalidated registration input, spelled the way clients send it.
#[derive(Debug, Clone, Default)]
pub struct AccountDraft {
    pub email: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: String,
    pub display_name: String,
}

const MIN_DISPLAY_NAME: usize = 3;
const MAX_DISPLAY_NAME: usize = 64;

impl AccountDraft {
    /// Check every field and report all problems at once as an `Invalid`
    /// error with per-field messages.
    pub fn validate(self) -> DomainResult<NewAccount> {
        let mut errors = FieldErrors::new();

        let email = self.email.trim().to_ascii_lowercase();
        if email.is_empty() {
            errors.add("Email", "is required");
        } else if !is_plausible_email(&email) {
            errors.add("Email", "must be a valid email address");
        }

        let display_name = self.display_name.trim().to_owned();
        let len = display_name.chars().count();
        if len == 0 {
            errors.add("DisplayName", "is required");
        } else if len < MIN_DISPLAY_NAME {
            errors.add("DisplayName", format!("must be at least {MIN_DISPLAY_NAME} characters"));
        } else if len > MAX_DISPLAY_NAME {
            errors.add("DisplayName", format!("must be at most {MAX_DISPLAY_NAME} characters"));
        }

        if !errors.is_empty() {
            return Err(DomainError::invalid("One or more validation errors occurred.")
                .with_field_store(errors));
        }

        Ok(NewAccount {
            email,
            display_name,
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    })
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn insert(&self, account: NewAccount) -> DomainResult<Account>;
    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>>;
    /// Returns whether an account was removed.
    async fn delete(&self, id: AccountId) -> DomainResult<bool>;
}
