pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::account_builder::*;

pub mod account_builder {

    use super::*;
    use crate::{account::*, car_plate::*, cpf::*, email::*, id::*};

    #[derive(Debug)]
    pub struct AccountBuild {
        account: Account,
    }

    impl AccountBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.account.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.account.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.account.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn cpf(mut self, cpf: &str) -> Self {
            self.account.cpf = Cpf::new_unchecked(cpf.into());
            self
        }
        pub fn passenger(mut self, is_passenger: bool) -> Self {
            self.account.is_passenger = is_passenger;
            self
        }
        pub fn driver(mut self, car_plate: &str) -> Self {
            self.account.is_driver = true;
            self.account.car_plate = Some(CarPlate::new_unchecked(car_plate.into()));
            self
        }
        pub fn finish(self) -> Account {
            self.account
        }
    }

    impl Builder for Account {
        type Build = AccountBuild;
        fn build() -> AccountBuild {
            AccountBuild {
                account: Account {
                    id: Id::new(),
                    name: "John Doe".into(),
                    email: EmailAddress::new_unchecked("john.doe@gmail.com".into()),
                    cpf: Cpf::new_unchecked("87748248800".into()),
                    car_plate: None,
                    is_passenger: true,
                    is_driver: false,
                },
            }
        }
    }
}
