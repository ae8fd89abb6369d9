use std::cell::RefCell;

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub accounts: RefCell<Vec<Account>>,
    /// Simulates a unique constraint violation caused by
    /// a concurrent insert.
    pub conflict_on_create: bool,
}

impl AccountRepo for MockDb {
    fn create_account(&self, account: &Account) -> RepoResult<()> {
        if self.conflict_on_create {
            return Err(RepoError::AlreadyExists);
        }
        let mut accounts = self.accounts.borrow_mut();
        if accounts
            .iter()
            .any(|a| a.id == account.id || a.email == account.email)
        {
            return Err(RepoError::AlreadyExists);
        }
        accounts.push(account.clone());
        Ok(())
    }

    fn get_account(&self, id: &str) -> RepoResult<Account> {
        self.accounts
            .borrow()
            .iter()
            .find(|a| a.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_account_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        Ok(self
            .accounts
            .borrow()
            .iter()
            .find(|a| a.email.as_str() == email)
            .cloned())
    }

    fn count_accounts(&self) -> RepoResult<usize> {
        Ok(self.accounts.borrow().len())
    }
}
