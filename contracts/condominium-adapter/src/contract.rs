use crate::errors::AdapterErrors;
use crate::events::emit_closing_effects;
use crate::storage::core::{CoreDataKeys, CoreStorageFunc};
use crate::utils::core::{get_implementation, implementation, validate_manager};
use condominium_interface::{
    is_empty_address, CondominiumConfig, Resident, ResidentPage, Topic, TopicPage, Vote,
    VoteOption,
};
use log::info;
use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, Address, Env, String, Symbol, Vec,
};

pub const CONTRACT_DESCRIPTION: Symbol = symbol_short!("CondoAdp");
pub const CONTRACT_VERSION: Symbol = symbol_short!("0_1_0");

/// Stable entry point of the condominium. Calls are relayed unchanged to the implementation
/// set by the adapter manager, so the implementation can be replaced without moving users.
pub trait CondominiumAdapterTrait {
    fn version(e: Env) -> (Symbol, Symbol);
    /// The first call is open to anyone, deployers make it in the same transaction that
    /// deploys the adapter
    fn set_manager(e: Env, address: Address);
    fn init(e: Env, caller: Address, implementation: Address);
    fn get_implementation(e: Env) -> Address;

    fn get_manager(e: Env) -> Address;
    fn get_config(e: Env) -> CondominiumConfig;

    fn add_resident(e: Env, caller: Address, wallet: Address, residence_id: u32);
    fn remove_resident(e: Env, caller: Address, wallet: Address);
    fn set_counselor(e: Env, caller: Address, wallet: Address, enabled: bool);
    fn get_resident(e: Env, wallet: Address) -> Resident;
    fn get_residents(e: Env, page: u32, page_size: u32) -> ResidentPage;
    fn is_resident(e: Env, wallet: Address) -> bool;
    fn residence_exists(e: Env, residence_id: u32) -> bool;

    fn pay_quota(e: Env, payer: Address, residence_id: u32, amount: u128);
    fn get_quota(e: Env) -> u128;
    fn get_payment(e: Env, residence_id: u32) -> Option<u64>;
    fn is_compliant(e: Env, residence_id: u32) -> bool;

    fn add_topic(
        e: Env,
        caller: Address,
        title: String,
        description: String,
        category: u32,
        amount: u128,
        responsible: Address,
    );
    fn edit_topic(
        e: Env,
        caller: Address,
        title: String,
        description: String,
        amount: u128,
        responsible: Option<Address>,
    );
    fn remove_topic(e: Env, caller: Address, title: String);
    fn open_voting(e: Env, caller: Address, title: String);
    fn get_topic(e: Env, title: String) -> Topic;
    fn get_topics(e: Env, page: u32, page_size: u32) -> TopicPage;
    fn topic_exists(e: Env, title: String) -> bool;

    fn vote(e: Env, caller: Address, title: String, option: VoteOption);
    fn close_voting(e: Env, caller: Address, title: String);
    fn get_votes(e: Env, title: String) -> Vec<Vote>;
    fn vote_count(e: Env, title: String) -> u32;

    fn transfer(e: Env, caller: Address, title: String, amount: u128);
    fn get_balance(e: Env) -> i128;
}

#[contract]
pub struct CondominiumAdapter;

#[contractimpl]
impl CondominiumAdapterTrait for CondominiumAdapter {
    fn version(_e: Env) -> (Symbol, Symbol) {
        (CONTRACT_DESCRIPTION, CONTRACT_VERSION)
    }

    fn set_manager(e: Env, address: Address) {
        if let Some(v) = e._core().address(&CoreDataKeys::Manager) {
            v.require_auth();
        }

        e._core().set_address(&CoreDataKeys::Manager, &address);
        e._core().bump();
    }

    fn init(e: Env, caller: Address, implementation: Address) {
        validate_manager(&e, &caller);

        if is_empty_address(&e, &implementation) {
            panic_with_error!(&e, &AdapterErrors::EmptyAddressNotAllowed);
        }

        e._core()
            .set_address(&CoreDataKeys::Implementation, &implementation);
        info!("implementation set to {:?}", implementation);
        e._core().bump();
    }

    fn get_implementation(e: Env) -> Address {
        e._core().bump();
        get_implementation(&e)
    }

    fn get_manager(e: Env) -> Address {
        e._core().bump();
        implementation(&e).get_manager()
    }

    fn get_config(e: Env) -> CondominiumConfig {
        e._core().bump();
        implementation(&e).get_config()
    }

    fn add_resident(e: Env, caller: Address, wallet: Address, residence_id: u32) {
        caller.require_auth();
        implementation(&e).add_resident(&caller, &wallet, &residence_id);
        e._core().bump();
    }

    fn remove_resident(e: Env, caller: Address, wallet: Address) {
        caller.require_auth();
        implementation(&e).remove_resident(&caller, &wallet);
        e._core().bump();
    }

    fn set_counselor(e: Env, caller: Address, wallet: Address, enabled: bool) {
        caller.require_auth();
        implementation(&e).set_counselor(&caller, &wallet, &enabled);
        e._core().bump();
    }

    fn get_resident(e: Env, wallet: Address) -> Resident {
        e._core().bump();
        implementation(&e).get_resident(&wallet)
    }

    fn get_residents(e: Env, page: u32, page_size: u32) -> ResidentPage {
        e._core().bump();
        implementation(&e).get_residents(&page, &page_size)
    }

    fn is_resident(e: Env, wallet: Address) -> bool {
        e._core().bump();
        implementation(&e).is_resident(&wallet)
    }

    fn residence_exists(e: Env, residence_id: u32) -> bool {
        e._core().bump();
        implementation(&e).residence_exists(&residence_id)
    }

    fn pay_quota(e: Env, payer: Address, residence_id: u32, amount: u128) {
        payer.require_auth();
        implementation(&e).pay_quota(&payer, &residence_id, &amount);
        e._core().bump();
    }

    fn get_quota(e: Env) -> u128 {
        e._core().bump();
        implementation(&e).get_quota()
    }

    fn get_payment(e: Env, residence_id: u32) -> Option<u64> {
        e._core().bump();
        implementation(&e).get_payment(&residence_id)
    }

    fn is_compliant(e: Env, residence_id: u32) -> bool {
        e._core().bump();
        implementation(&e).is_compliant(&residence_id)
    }

    fn add_topic(
        e: Env,
        caller: Address,
        title: String,
        description: String,
        category: u32,
        amount: u128,
        responsible: Address,
    ) {
        caller.require_auth();
        implementation(&e).add_topic(
            &caller,
            &title,
            &description,
            &category,
            &amount,
            &responsible,
        );
        e._core().bump();
    }

    fn edit_topic(
        e: Env,
        caller: Address,
        title: String,
        description: String,
        amount: u128,
        responsible: Option<Address>,
    ) {
        caller.require_auth();
        implementation(&e).edit_topic(&caller, &title, &description, &amount, &responsible);
        e._core().bump();
    }

    fn remove_topic(e: Env, caller: Address, title: String) {
        caller.require_auth();
        implementation(&e).remove_topic(&caller, &title);
        e._core().bump();
    }

    fn open_voting(e: Env, caller: Address, title: String) {
        caller.require_auth();
        implementation(&e).open_voting(&caller, &title);
        e._core().bump();
    }

    fn get_topic(e: Env, title: String) -> Topic {
        e._core().bump();
        implementation(&e).get_topic(&title)
    }

    fn get_topics(e: Env, page: u32, page_size: u32) -> TopicPage {
        e._core().bump();
        implementation(&e).get_topics(&page, &page_size)
    }

    fn topic_exists(e: Env, title: String) -> bool {
        e._core().bump();
        implementation(&e).topic_exists(&title)
    }

    fn vote(e: Env, caller: Address, title: String, option: VoteOption) {
        caller.require_auth();
        implementation(&e).vote(&caller, &title, &option);
        e._core().bump();
    }

    fn close_voting(e: Env, caller: Address, title: String) {
        caller.require_auth();
        let condominium = implementation(&e);
        condominium.close_voting(&caller, &title);
        emit_closing_effects(&e, &condominium, &title);
        e._core().bump();
    }

    fn get_votes(e: Env, title: String) -> Vec<Vote> {
        e._core().bump();
        implementation(&e).get_votes(&title)
    }

    fn vote_count(e: Env, title: String) -> u32 {
        e._core().bump();
        implementation(&e).vote_count(&title)
    }

    fn transfer(e: Env, caller: Address, title: String, amount: u128) {
        caller.require_auth();
        implementation(&e).transfer(&caller, &title, &amount);
        e._core().bump();
    }

    fn get_balance(e: Env) -> i128 {
        e._core().bump();
        implementation(&e).get_balance()
    }
}
