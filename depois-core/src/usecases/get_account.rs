use super::prelude::*;

pub fn get_account<R>(repo: &R, id: &str) -> Result<Account>
where
    R: AccountRepo,
{
    Ok(repo.get_account(id)?)
}
