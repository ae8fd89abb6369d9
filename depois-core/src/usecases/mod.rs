mod error;
mod get_account;
mod sign_up;

#[cfg(test)]
pub mod tests;

pub use self::{error::Error, get_account::*, sign_up::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{AccountRepo, Error as RepoError},
    };
}
