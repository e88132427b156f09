#![no_std]

#[cfg(test)]
extern crate std;

mod contract;
mod events;
mod storage;
mod utils;

mod tests;

pub use crate::contract::{CondominiumContract, CondominiumContractClient};
