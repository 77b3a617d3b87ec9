use async_trait::async_trait;

use models::user::Account;

use super::errors::AuthError;

/// Repository abstraction for account persistence, keyed by email.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AuthError>;
    /// Fails with `Conflict` if the email is already registered.
    async fn insert(&self, account: Account) -> Result<(), AuthError>;
}

/// In-memory account store for development and tests.
pub mod in_memory {
    use std::collections::HashMap;

    use tokio::sync::RwLock;

    use super::*;

    #[derive(Default)]
    pub struct InMemoryAccounts {
        accounts: RwLock<HashMap<String, Account>>,
    }

    #[async_trait]
    impl AuthRepository for InMemoryAccounts {
        async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AuthError> {
            let accounts = self.accounts.read().await;
            Ok(accounts.get(email).cloned())
        }

        async fn insert(&self, account: Account) -> Result<(), AuthError> {
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(&account.email) {
                return Err(AuthError::Conflict);
            }
            accounts.insert(account.email.clone(), account);
            Ok(())
        }
    }
}
