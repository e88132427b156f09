use crate::storage::payments::PaymentsStorageFunc;
use condominium_interface::{CondominiumConfig, ContractErrors};
use log::{debug, warn};
use soroban_sdk::{panic_with_error, token, Address, Env};

/// A payment covers the thirty days after it was made
pub const PAYMENT_WINDOW: u64 = 30 * 24 * 60 * 60;

/// True while `now` is inside the window opened by `last_payment`
pub fn is_within_window(now: u64, last_payment: Option<u64>) -> bool {
    match last_payment {
        Some(timestamp) => now < timestamp.saturating_add(PAYMENT_WINDOW),
        None => false,
    }
}

pub fn is_compliant(e: &Env, residence_id: u32) -> bool {
    is_within_window(
        e.ledger().timestamp(),
        e._payments().last_payment(residence_id),
    )
}

pub fn next_payment(e: &Env, residence_id: u32) -> u64 {
    match e._payments().last_payment(residence_id) {
        Some(timestamp) => timestamp.saturating_add(PAYMENT_WINDOW),
        None => 0,
    }
}

pub fn validate_payment(e: &Env, config: &CondominiumConfig, residence_id: u32, amount: u128) {
    if !config.layout.contains(residence_id) {
        panic_with_error!(&e, &ContractErrors::UnknownResidence);
    }

    if amount != config.quota {
        warn!("payment of {} rejected, quota is {}", amount, config.quota);
        panic_with_error!(&e, &ContractErrors::InvalidAmount);
    }

    if is_compliant(e, residence_id) {
        panic_with_error!(&e, &ContractErrors::AlreadyPaidThisWindow);
    }
}

pub fn collect_payment(e: &Env, config: &CondominiumConfig, payer: &Address, amount: u128) {
    let result = token::Client::new(&e, &config.token).try_transfer(
        payer,
        &e.current_contract_address(),
        &(amount as i128),
    );

    if result.is_err() {
        panic_with_error!(&e, &ContractErrors::PaymentFailed);
    }

    debug!("collected {} from {:?}", amount, payer);
}
