use lazy_static::lazy_static;
use regex::Regex;

pub use super::cpf::is_valid_cpf;

lazy_static! {
    // At least two name components, e.g. "John Doe".
    static ref NAME_REGEX: Regex = Regex::new(r"[a-zA-Z] [a-zA-Z]+").unwrap();
    static ref EMAIL_REGEX: Regex = Regex::new(r"^(.+)@(.+)$").unwrap();
    // Three uppercase letters followed by four digits, e.g. "ABC1234".
    static ref CAR_PLATE_REGEX: Regex = Regex::new(r"[A-Z]{3}[0-9]{4}").unwrap();
}

pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_car_plate(car_plate: &str) -> bool {
    CAR_PLATE_REGEX.is_match(car_plate)
}
