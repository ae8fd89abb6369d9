use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name         : String,
    pub email        : String,
    pub cpf          : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_passenger : Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_driver    : Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_plate    : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub account_id: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id   : String,
    pub name         : String,
    pub email        : String,
    pub cpf          : String,
    pub car_plate    : Option<String>,
    pub is_passenger : bool,
    pub is_driver    : bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    pub error: String,
}
