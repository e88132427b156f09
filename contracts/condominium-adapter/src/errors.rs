use soroban_sdk::contracterror;

/// Codes start at 1000 so they never collide with the ones relayed from the implementation.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AdapterErrors {
    NotInitialized = 1000,
    NotManager = 1001,
    EmptyAddressNotAllowed = 1002,
}
