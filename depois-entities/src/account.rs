use crate::{car_plate::CarPlate, cpf::Cpf, email::EmailAddress, id::Id};

/// A registered passenger and/or driver.
///
/// Accounts are never modified after they have been created.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id           : Id,
    pub name         : String,
    pub email        : EmailAddress,
    pub cpf          : Cpf,
    /// Only drivers have a car plate.
    pub car_plate    : Option<CarPlate>,
    pub is_passenger : bool,
    pub is_driver    : bool,
}

impl Account {
    /// Checks that a car plate is present if and only if
    /// the account belongs to a driver.
    pub const fn is_consistent(&self) -> bool {
        self.car_plate.is_some() == self.is_driver
    }
}
