use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Email already exists")]
    EmailExists,
    #[error("Invalid name")]
    Name,
    #[error("Invalid email")]
    Email,
    #[error("Invalid CPF")]
    Cpf,
    #[error("Invalid car plate")]
    CarPlate,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
