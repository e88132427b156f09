#![no_std]

//! Wire types, errors and the client interface shared by the condominium contract and
//! the adapter that forwards calls to it.

mod errors;
mod interface;
mod types;

pub use crate::errors::{ContractErrors, ErrorKind};
pub use crate::interface::{CondominiumClient, CondominiumInterface};
pub use crate::types::*;

#[cfg(test)]
mod test;
