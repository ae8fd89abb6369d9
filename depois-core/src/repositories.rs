// Low-level database access traits.
// Each repository is responsible for a single entity.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait AccountRepo {
    /// Inserts a new account.
    ///
    /// Fails with [`Error::AlreadyExists`] if an account with
    /// the same id or e-mail address has already been stored.
    fn create_account(&self, account: &Account) -> Result<()>;

    fn get_account(&self, id: &str) -> Result<Account>;
    fn try_get_account_by_email(&self, email: &str) -> Result<Option<Account>>;

    fn count_accounts(&self) -> Result<usize>;
}
