pub mod access;
pub mod core;
pub mod payments;
pub mod residents;
pub mod topics;
pub mod treasury;
pub mod votes;
