use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub is_passenger: bool,
    pub is_driver: bool,
    pub car_plate: Option<String>,
}

/// Validates and stores a new account.
///
/// The checks are done one after another and the first
/// failing check determines the returned error.
/// A car plate is only validated and stored for drivers.
pub fn sign_up<R: AccountRepo>(repo: &R, new_account: NewAccount) -> Result<Account> {
    let NewAccount {
        name,
        email,
        cpf,
        is_passenger,
        is_driver,
        car_plate,
    } = new_account;
    if repo.try_get_account_by_email(&email)?.is_some() {
        return Err(Error::EmailExists);
    }
    if !validate::is_valid_name(&name) {
        return Err(Error::Name);
    }
    if !validate::is_valid_email(&email) {
        return Err(Error::Email);
    }
    if !validate::is_valid_cpf(&cpf) {
        return Err(Error::Cpf);
    }
    let car_plate = if is_driver {
        match car_plate {
            Some(plate) if validate::is_valid_car_plate(&plate) => {
                Some(CarPlate::new_unchecked(plate))
            }
            _ => return Err(Error::CarPlate),
        }
    } else {
        None
    };
    let account = Account {
        id: Id::new(),
        name,
        email: EmailAddress::new_unchecked(email),
        cpf: Cpf::new_unchecked(cpf),
        car_plate,
        is_passenger,
        is_driver,
    };
    debug_assert!(account.is_consistent());
    log::debug!("Creating new account: email = {}", account.email);
    // Concurrent requests with the same e-mail address might
    // all pass the check above. Only one of them is stored.
    repo.create_account(&account).map_err(|err| match err {
        RepoError::AlreadyExists => Error::EmailExists,
        err => Error::Repo(err),
    })?;
    Ok(account)
}
