use crate::storage::core::CoreStorageFunc;
use condominium_interface::{CondominiumConfig, ContractErrors};
use log::warn;
use soroban_sdk::{panic_with_error, Address, Env};

pub fn can_init_contract(e: &Env) {
    if e._core().config().is_some() {
        panic_with_error!(&e, &ContractErrors::AlreadyInitialized);
    }
}

pub fn validate_config(e: &Env, config: &CondominiumConfig) {
    if !config.layout.is_valid() {
        warn!("rejected layout {:?}", config.layout);
        panic_with_error!(&e, &ContractErrors::InvalidLayout);
    }

    if !config.quorum.is_valid() {
        warn!("rejected quorum rules {:?}", config.quorum);
        panic_with_error!(&e, &ContractErrors::InvalidQuorum);
    }

    if i128::try_from(config.quota).is_err() {
        warn!("rejected quota {}", config.quota);
        panic_with_error!(&e, &ContractErrors::InvalidAmount);
    }
}

pub fn check_initialized(e: &Env) {
    if e._core().config().is_none() {
        panic_with_error!(&e, &ContractErrors::NotInitialized);
    }
}

pub fn get_config(e: &Env) -> CondominiumConfig {
    e._core().config().unwrap_or_else(|| {
        panic_with_error!(&e, &ContractErrors::NotInitialized);
    })
}

pub fn get_manager(e: &Env) -> Address {
    e._core().manager().unwrap_or_else(|| {
        panic_with_error!(&e, &ContractErrors::NotInitialized);
    })
}

/// Index range of a 1-indexed page, `None` when the page holds nothing
pub fn page_bounds(total: u32, page: u32, page_size: u32) -> Option<(u32, u32)> {
    if page == 0 || page_size == 0 {
        return None;
    }

    let start: u32 = (page - 1).checked_mul(page_size)?;
    if start >= total {
        return None;
    }

    let end: u32 = start.saturating_add(page_size).min(total);
    Some((start, end))
}
