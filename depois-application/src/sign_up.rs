use super::*;

pub fn sign_up(
    connections: &sqlite::Connections,
    new_account: usecases::NewAccount,
) -> Result<Account> {
    let account = {
        let db = connections.exclusive()?;
        usecases::sign_up(&db, new_account).map_err(|err| {
            debug!("Signup failed: {err}");
            err
        })?
    };
    info!(
        "Created new account {} (passenger = {}, driver = {})",
        account.id, account.is_passenger, account.is_driver
    );
    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn new_passenger(email: &str) -> usecases::NewAccount {
        usecases::NewAccount {
            name: "John Doe".into(),
            email: email.into(),
            cpf: "87748248800".into(),
            is_passenger: true,
            is_driver: false,
            car_plate: None,
        }
    }

    #[test]
    fn sign_up_and_load_passenger() {
        let fixture = BackendFixture::new();
        let account = flows::sign_up(&fixture.db_connections, new_passenger("a@b.tld")).unwrap();
        let stored = fixture.try_get_account(account.id.as_str()).unwrap();
        assert_eq!(account, stored);
        assert!(stored.car_plate.is_none());
        assert!(!stored.is_driver);
    }

    #[test]
    fn sign_up_and_load_driver() {
        let fixture = BackendFixture::new();
        let new_account = usecases::NewAccount {
            name: "John Doe Driver".into(),
            email: "driver@gmail.com".into(),
            cpf: "12371093025".into(),
            is_passenger: false,
            is_driver: true,
            car_plate: Some("ABC1234".into()),
        };
        let account = flows::sign_up(&fixture.db_connections, new_account).unwrap();
        let stored = fixture.try_get_account(account.id.as_str()).unwrap();
        assert_eq!(Some("ABC1234"), stored.car_plate.as_ref().map(CarPlate::as_str));
        assert!(stored.is_driver);
        assert!(!stored.is_passenger);
    }

    #[test]
    fn sign_up_twice_with_same_email() {
        let fixture = BackendFixture::new();
        assert!(flows::sign_up(&fixture.db_connections, new_passenger("a@b.tld")).is_ok());
        let err = flows::sign_up(&fixture.db_connections, new_passenger("a@b.tld")).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::EmailExists))
        ));
        assert_eq!(1, fixture.count_accounts());
    }

    #[test]
    fn invalid_input_is_not_stored() {
        let fixture = BackendFixture::new();
        let new_account = usecases::NewAccount {
            cpf: "87748248801".into(),
            ..new_passenger("a@b.tld")
        };
        let err = flows::sign_up(&fixture.db_connections, new_account).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Cpf))
        ));
        assert_eq!(0, fixture.count_accounts());
    }
}
