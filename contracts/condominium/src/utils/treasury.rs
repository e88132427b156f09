use condominium_interface::{Category, CondominiumConfig, ContractErrors, Topic, TopicStatus};
use log::debug;
use soroban_sdk::{panic_with_error, token, Address, Env};

pub fn fund_balance(e: &Env, config: &CondominiumConfig) -> i128 {
    token::Client::new(&e, &config.token).balance(&e.current_contract_address())
}

pub fn validate_spend(e: &Env, config: &CondominiumConfig, topic: &Topic, amount: u128) {
    if topic.category != Category::Spend || topic.status != TopicStatus::Approved {
        panic_with_error!(&e, &ContractErrors::WrongCategoryOrStatus);
    }

    if amount > topic.amount {
        panic_with_error!(&e, &ContractErrors::AmountExceedsApproved);
    }

    if fund_balance(e, config) < amount as i128 {
        panic_with_error!(&e, &ContractErrors::InsufficientBalance);
    }
}

pub fn pay_out(e: &Env, config: &CondominiumConfig, recipient: &Address, amount: u128) {
    let result = token::Client::new(&e, &config.token).try_transfer(
        &e.current_contract_address(),
        recipient,
        &(amount as i128),
    );

    if result.is_err() {
        panic_with_error!(&e, &ContractErrors::TransferFailed);
    }

    debug!("paid {} to {:?}", amount, recipient);
}
