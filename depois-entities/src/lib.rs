#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # depois-entities
//!
//! Reusable, agnostic domain entities for depois.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod account;
pub mod car_plate;
pub mod cpf;
pub mod email;
pub mod id;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
