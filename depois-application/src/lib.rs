#[macro_use]
extern crate log;

mod get_account;
mod sign_up;

pub mod prelude {
    pub use super::{get_account::*, sign_up::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use depois_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use depois_db_sqlite::Connections;
}
