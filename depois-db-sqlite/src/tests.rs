use depois_core::{
    entities::*,
    repositories::{Error as RepoError, *},
};
use depois_entities::builders::*;

use super::*;

fn setup() -> Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    connections
}

#[test]
fn create_and_load_passenger() {
    let connections = setup();
    let account = Account::build().finish();
    connections
        .exclusive()
        .unwrap()
        .create_account(&account)
        .unwrap();
    let db = connections.shared().unwrap();
    assert_eq!(account, db.get_account(account.id.as_str()).unwrap());
    assert_eq!(1, db.count_accounts().unwrap());
}

#[test]
fn create_and_load_driver() {
    let connections = setup();
    let account = Account::build()
        .passenger(false)
        .driver("ABC1234")
        .email("driver@gmail.com")
        .finish();
    let db = connections.exclusive().unwrap();
    db.create_account(&account).unwrap();
    let loaded = db.get_account(account.id.as_str()).unwrap();
    assert_eq!(account, loaded);
    assert_eq!(Some("ABC1234"), loaded.car_plate.as_ref().map(CarPlate::as_str));
}

#[test]
fn find_account_by_email() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let account = Account::build().email("foo@bar.tld").finish();
    db.create_account(&account).unwrap();
    assert_eq!(
        Some(account),
        db.try_get_account_by_email("foo@bar.tld").unwrap()
    );
    assert!(db.try_get_account_by_email("bar@foo.tld").unwrap().is_none());
}

#[test]
fn missing_account() {
    let connections = setup();
    let db = connections.shared().unwrap();
    assert!(matches!(db.get_account("foo"), Err(RepoError::NotFound)));
    assert_eq!(0, db.count_accounts().unwrap());
}

#[test]
fn reject_duplicate_email() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    db.create_account(&Account::build().email("foo@bar.tld").finish())
        .unwrap();
    let duplicate = Account::build().email("foo@bar.tld").finish();
    assert!(matches!(
        db.create_account(&duplicate),
        Err(RepoError::AlreadyExists)
    ));
    assert_eq!(1, db.count_accounts().unwrap());
}

#[test]
fn reject_duplicate_id() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    db.create_account(&Account::build().id("foo").email("a@b").finish())
        .unwrap();
    let duplicate = Account::build().id("foo").email("b@a").finish();
    assert!(matches!(
        db.create_account(&duplicate),
        Err(RepoError::AlreadyExists)
    ));
}

#[test]
fn no_write_access_with_read_only_connection() {
    let connections = setup();
    let db = connections.shared().unwrap();
    assert!(matches!(
        db.create_account(&Account::build().finish()),
        Err(RepoError::Other(_))
    ));
}

#[test]
fn migrations_are_idempotent() {
    let connections = setup();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
}
