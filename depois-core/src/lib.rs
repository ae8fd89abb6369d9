pub mod entities {
    pub use depois_entities::{account::*, car_plate::*, cpf::*, email::*, id::*};
}

pub mod repositories;
pub mod usecases;
pub mod util;
