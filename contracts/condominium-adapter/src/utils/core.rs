use crate::errors::AdapterErrors;
use crate::storage::core::{CoreDataKeys, CoreStorageFunc};
use condominium_interface::CondominiumClient;
use log::warn;
use soroban_sdk::{panic_with_error, Address, Env};

/// Requires `caller` to be the adapter manager and to have signed the call
pub fn validate_manager(e: &Env, caller: &Address) {
    let manager: Address = e
        ._core()
        .address(&CoreDataKeys::Manager)
        .unwrap_or_else(|| {
            panic_with_error!(&e, &AdapterErrors::NotInitialized);
        });

    caller.require_auth();

    if caller != &manager {
        warn!("{:?} is not the adapter manager", caller);
        panic_with_error!(&e, &AdapterErrors::NotManager);
    }
}

pub fn get_implementation(e: &Env) -> Address {
    e._core()
        .address(&CoreDataKeys::Implementation)
        .unwrap_or_else(|| {
            panic_with_error!(&e, &AdapterErrors::NotInitialized);
        })
}

pub fn implementation(e: &Env) -> CondominiumClient<'_> {
    CondominiumClient::new(e, &get_implementation(e))
}
