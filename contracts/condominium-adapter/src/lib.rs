#![no_std]

#[cfg(test)]
extern crate std;

mod contract;
mod errors;
mod events;
mod storage;
mod utils;

mod tests;

pub use crate::contract::{CondominiumAdapter, CondominiumAdapterClient};
pub use crate::errors::AdapterErrors;
