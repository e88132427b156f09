use crate::types::{
    CondominiumConfig, Resident, ResidentPage, Topic, TopicPage, Vote, VoteOption,
};
use soroban_sdk::{contractclient, Address, Env, String, Symbol, Vec};

/// Every entry point of the condominium contract. Mutating calls take the acting
/// `caller` explicitly and require its authorization.
#[contractclient(name = "CondominiumClient")]
pub trait CondominiumInterface {
    fn init(e: Env, manager: Address, config: CondominiumConfig);
    fn version(e: Env) -> (Symbol, Symbol);
    fn get_config(e: Env) -> CondominiumConfig;
    fn get_manager(e: Env) -> Address;

    // Residents
    fn add_resident(e: Env, caller: Address, wallet: Address, residence_id: u32);
    fn remove_resident(e: Env, caller: Address, wallet: Address);
    fn set_counselor(e: Env, caller: Address, wallet: Address, enabled: bool);
    fn get_resident(e: Env, wallet: Address) -> Resident;
    fn get_residents(e: Env, page: u32, page_size: u32) -> ResidentPage;
    fn is_resident(e: Env, wallet: Address) -> bool;
    fn residence_exists(e: Env, residence_id: u32) -> bool;

    // Quotas
    fn pay_quota(e: Env, payer: Address, residence_id: u32, amount: u128);
    fn get_quota(e: Env) -> u128;
    fn get_payment(e: Env, residence_id: u32) -> Option<u64>;
    fn is_compliant(e: Env, residence_id: u32) -> bool;

    // Topics
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

    // Voting
    fn vote(e: Env, caller: Address, title: String, option: VoteOption);
    fn close_voting(e: Env, caller: Address, title: String);
    fn get_votes(e: Env, title: String) -> Vec<Vote>;
    fn vote_count(e: Env, title: String) -> u32;

    // Treasury
    fn transfer(e: Env, caller: Address, title: String, amount: u128);
    fn get_balance(e: Env) -> i128;
}
