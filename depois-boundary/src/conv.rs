use super::*;
use depois_entities as e;

impl From<e::account::Account> for Account {
    fn from(from: e::account::Account) -> Self {
        let e::account::Account {
            id,
            name,
            email,
            cpf,
            car_plate,
            is_passenger,
            is_driver,
        } = from;
        Self {
            account_id: id.to_string(),
            name,
            email: email.into_string(),
            cpf: cpf.into_string(),
            car_plate: car_plate.map(e::car_plate::CarPlate::into_string),
            is_passenger,
            is_driver,
        }
    }
}

impl From<&e::account::Account> for SignupResponse {
    fn from(from: &e::account::Account) -> Self {
        Self {
            account_id: from.id.to_string(),
        }
    }
}
