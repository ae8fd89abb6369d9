use super::*;

impl<'a> AccountRepo for DbReadOnly<'a> {
    fn create_account(&self, _account: &Account) -> Result<()> {
        Err(read_only_err())
    }

    fn get_account(&self, id: &str) -> Result<Account> {
        get_account(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_account_by_email(&self, email: &str) -> Result<Option<Account>> {
        try_get_account_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn count_accounts(&self) -> Result<usize> {
        count_accounts(&mut self.conn.borrow_mut())
    }
}

impl<'a> AccountRepo for DbReadWrite<'a> {
    fn create_account(&self, account: &Account) -> Result<()> {
        create_account(&mut self.conn.borrow_mut(), account)
    }

    fn get_account(&self, id: &str) -> Result<Account> {
        get_account(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_account_by_email(&self, email: &str) -> Result<Option<Account>> {
        try_get_account_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn count_accounts(&self) -> Result<usize> {
        count_accounts(&mut self.conn.borrow_mut())
    }
}

impl<'a> From<&'a Account> for models::NewAccount<'a> {
    fn from(from: &'a Account) -> Self {
        let Account {
            id,
            name,
            email,
            cpf,
            car_plate,
            is_passenger,
            is_driver,
        } = from;
        Self {
            account_id: id.as_str(),
            name: name.as_str(),
            email: email.as_str(),
            cpf: cpf.as_str(),
            car_plate: car_plate.as_ref().map(CarPlate::as_str),
            is_passenger: *is_passenger,
            is_driver: *is_driver,
        }
    }
}

impl From<models::AccountEntity> for Account {
    fn from(from: models::AccountEntity) -> Self {
        let models::AccountEntity {
            account_id,
            name,
            email,
            cpf,
            car_plate,
            is_passenger,
            is_driver,
        } = from;
        Self {
            id: account_id.into(),
            name,
            email: EmailAddress::new_unchecked(email),
            cpf: Cpf::new_unchecked(cpf),
            car_plate: car_plate.map(CarPlate::new_unchecked),
            is_passenger,
            is_driver,
        }
    }
}

fn create_account(conn: &mut SqliteConnection, a: &Account) -> Result<()> {
    let new_account = models::NewAccount::from(a);
    diesel::insert_into(schema::account::table)
        .values(&new_account)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_account(conn: &mut SqliteConnection, id: &str) -> Result<Account> {
    use schema::account::dsl;
    Ok(dsl::account
        .filter(dsl::account_id.eq(id))
        .first::<models::AccountEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_account_by_email(conn: &mut SqliteConnection, email: &str) -> Result<Option<Account>> {
    use schema::account::dsl;
    Ok(dsl::account
        .filter(dsl::email.eq(email))
        .first::<models::AccountEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn count_accounts(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::account::dsl;
    Ok(dsl::account
        .select(diesel::dsl::count(dsl::account_id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
