pub use depois_boundary::*;

use depois_core::usecases;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_account(from: NewAccount) -> usecases::NewAccount {
        let NewAccount {
            name,
            email,
            cpf,
            is_passenger,
            is_driver,
            car_plate,
        } = from;
        usecases::NewAccount {
            name,
            email,
            cpf,
            is_passenger: is_passenger.unwrap_or(false),
            is_driver: is_driver.unwrap_or(false),
            car_plate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_flags_are_false() {
        let new_account = from_json::new_account(NewAccount {
            name: "John Doe".into(),
            email: "a@b".into(),
            cpf: "87748248800".into(),
            is_passenger: None,
            is_driver: Some(true),
            car_plate: Some("ABC1234".into()),
        });
        assert!(!new_account.is_passenger);
        assert!(new_account.is_driver);
        assert_eq!(Some("ABC1234".to_string()), new_account.car_plate);
    }
}
