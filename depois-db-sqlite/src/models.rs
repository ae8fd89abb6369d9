#![allow(clippy::extra_unused_lifetimes)]

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = account)]
pub struct NewAccount<'a> {
    pub account_id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub cpf: &'a str,
    pub car_plate: Option<&'a str>,
    pub is_passenger: bool,
    pub is_driver: bool,
}

#[derive(Queryable)]
pub struct AccountEntity {
    pub account_id: String,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub car_plate: Option<String>,
    pub is_passenger: bool,
    pub is_driver: bool,
}
