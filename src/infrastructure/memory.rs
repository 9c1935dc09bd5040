// src/infrastructure/memory.rs
use crate::domain::{
    DomainError, DomainResult,
    account::{Account, AccountId, AccountRepository, NewAccount},
};
use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    next_id: u64,
    accounts: IndexMap<u64, Account>,
}

/// Process-local account store used by the demo server and tests.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    inner: RwLock<Inner>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, account: NewAccount) -> DomainResult<Account> {
        let mut inner = self.inner.write().await;
        if inner.accounts.values().any(|a| a.email == account.email) {
            return Err(DomainError::conflict("Email already registered")
                .with_field_error("Email", "already in use"));
        }
        inner.next_id = inner
            .next_id
            .checked_add(1)
            .ok_or_else(|| DomainError::internal("account id space exhausted"))?;
        let id = AccountId(inner.next_id);
        let created = Account {
            id,
            email: account.email,
            display_name: account.display_name,
        };
        inner.accounts.insert(id.0, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        Ok(self.inner.read().await.accounts.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>> {
        let inner = self.inner.read().await;
        Ok(inner.accounts.values().find(|a| a.email == email).cloned())
    }

    async fn delete(&self, id: AccountId) -> DomainResult<bool> {
        Ok(self.inner.write().await.accounts.shift_remove(&id.0).is_some())
    }
}
