// src/application/services.rs
use crate::application::accounts::AccountService;
use crate::domain::account::AccountRepository;
use std::sync::Arc;

pub struct ApplicationServices {
    pub accounts: AccountService,
}

impl ApplicationServices {
    pub fn new(account_repo: Arc<dyn AccountRepository>) -> Self {
        Self {
            accounts: AccountService::new(account_repo),
        }
    }
}
