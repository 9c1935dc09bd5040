// src/application/accounts.rs
use crate::application::{dto::AccountDto, ext::OptionExt};
use crate::domain::{
    DomainError, Outcome,
    account::{AccountDraft, AccountId, AccountRepository},
};
use std::sync::Arc;

pub struct RegisterAccountCommand {
    pub email: String,
    pub display_name: String,
}

pub struct AccountService {
    repo: Arc<dyn AccountRepository>,
}

impl AccountService {
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }

    pub async fn register(&self, command: RegisterAccountCommand) -> Outcome<AccountDto> {
        self.try_register(command).await.into()
    }

    async fn try_register(&self, command: RegisterAccountCommand) -> Result<AccountDto, DomainError> {
        let draft = AccountDraft {
            email: command.email,
            display_name: command.display_name,
        };
        let account = draft.validate()?;

        if self.repo.find_by_email(&account.email).await?.is_some() {
            tracing::debug!(email = %account.email, "duplicate registration rejected");
            return Err(DomainError::conflict("Email already registered")
                .with_field_error("Email", "already in use"));
        }

        let created = self.repo.insert(account).await?;
        tracing::info!(account_id = created.id.0, "account registered");
        Ok(created.into())
    }

    pub async fn get(&self, id: AccountId) -> Outcome<AccountDto> {
        match self.repo.find_by_id(id).await {
            Ok(found) => found
                .or_not_found(Some(&format!("account {} was not found", id.0)))
                .map(AccountDto::from),
            Err(err) => Outcome::fail(err),
        }
    }

    pub async fn delete(&self, id: AccountId) -> Outcome {
        match self.repo.delete(id).await {
            Ok(true) => Outcome::success(),
            Ok(false) => Outcome::fail(DomainError::not_found(format!(
                "account {} was not found",
                id.0
            ))),
            Err(err) => Outcome::fail(err),
        }
    }
}
