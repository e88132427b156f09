use crate::events::{emit_topic_closed, emit_topic_spent};
use crate::storage::core::CoreStorageFunc;
use crate::storage::payments::PaymentsStorageFunc;
use crate::storage::residents::{ResidentRecord, ResidentsStorageFunc};
use crate::storage::topics::TopicsStorageFunc;
use crate::storage::votes::VotesStorageFunc;
use crate::utils::access::{validate, Access};
use crate::utils::core::{
    can_init_contract, check_initialized, get_config, get_manager, validate_config,
};
use crate::utils::payments::{collect_payment, is_compliant, validate_payment};
use crate::utils::residents::{
    evict_resident, get_record, get_residents_page, settle_resident, to_resident,
};
use crate::utils::topics::{
    get_topic, get_topics_page, is_removable, new_topic, parse_category, remove_title,
    save_new_title, validate_amount,
};
use crate::utils::treasury::{fund_balance, pay_out, validate_spend};
use crate::utils::votes::{apply_approval, has_voted, tally, validate_quorum, Tally};
use condominium_interface::{
    is_empty_address, CondominiumConfig, CondominiumInterface, ContractErrors, Resident,
    ResidentPage, Topic, TopicPage, TopicStatus, Vote, VoteOption,
};
use log::{debug, info};
use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, Address, Env, String, Symbol, Vec,
};

pub const CONTRACT_DESCRIPTION: Symbol = symbol_short!("Condo");
pub const CONTRACT_VERSION: Symbol = symbol_short!("0_1_0");

#[contract]
pub struct CondominiumContract;

#[contractimpl]
impl CondominiumInterface for CondominiumContract {
    fn init(e: Env, manager: Address, config: CondominiumConfig) {
        can_init_contract(&e);
        manager.require_auth();
        validate_config(&e, &config);

        e._core().set_manager(&manager);
        e._core().set_config(&config);
        info!(
            "condominium initialized with {} residences",
            config.layout.residences()
        );
        e._core().bump();
    }

    fn version(_e: Env) -> (Symbol, Symbol) {
        (CONTRACT_DESCRIPTION, CONTRACT_VERSION)
    }

    fn get_config(e: Env) -> CondominiumConfig {
        e._core().bump();
        get_config(&e)
    }

    fn get_manager(e: Env) -> Address {
        e._core().bump();
        get_manager(&e)
    }

    fn add_resident(e: Env, caller: Address, wallet: Address, residence_id: u32) {
        validate(&e, &caller, Access::ManagerOrCounselor);
        let config: CondominiumConfig = get_config(&e);

        if is_empty_address(&e, &wallet) {
            panic_with_error!(&e, &ContractErrors::InvalidAddress);
        }

        if !config.layout.contains(residence_id) {
            panic_with_error!(&e, &ContractErrors::UnknownResidence);
        }

        settle_resident(&e, &wallet, residence_id);
        info!("{:?} settled in residence {}", wallet, residence_id);
        e._core().bump();
    }

    fn remove_resident(e: Env, caller: Address, wallet: Address) {
        validate(&e, &caller, Access::Manager);

        let record: ResidentRecord = get_record(&e, &wallet);
        if record.is_counselor {
            panic_with_error!(&e, &ContractErrors::ResidentIsCounselor);
        }

        evict_resident(&e, &record);
        info!("{:?} left residence {}", wallet, record.residence);
        e._core().bump();
    }

    fn set_counselor(e: Env, caller: Address, wallet: Address, enabled: bool) {
        validate(&e, &caller, Access::Manager);

        if is_empty_address(&e, &wallet) {
            panic_with_error!(&e, &ContractErrors::InvalidAddress);
        }

        let mut record: ResidentRecord = match e._residents().record(&wallet) {
            Some(record) if enabled || record.is_counselor => record,
            Some(_) => panic_with_error!(&e, &ContractErrors::CounselorNotFound),
            None if enabled => panic_with_error!(&e, &ContractErrors::NotAResident),
            None => panic_with_error!(&e, &ContractErrors::CounselorNotFound),
        };

        record.is_counselor = enabled;
        e._residents().set_record(&record);
        info!("counselor flag of {:?} set to {}", wallet, enabled);
        e._core().bump();
    }

    fn get_resident(e: Env, wallet: Address) -> Resident {
        check_initialized(&e);
        e._core().bump();
        to_resident(&e, &get_record(&e, &wallet))
    }

    fn get_residents(e: Env, page: u32, page_size: u32) -> ResidentPage {
        check_initialized(&e);
        e._core().bump();
        get_residents_page(&e, page, page_size)
    }

    fn is_resident(e: Env, wallet: Address) -> bool {
        check_initialized(&e);
        e._core().bump();
        e._residents().record(&wallet).is_some()
    }

    fn residence_exists(e: Env, residence_id: u32) -> bool {
        e._core().bump();
        get_config(&e).layout.contains(residence_id)
    }

    fn pay_quota(e: Env, payer: Address, residence_id: u32, amount: u128) {
        payer.require_auth();
        let config: CondominiumConfig = get_config(&e);

        validate_payment(&e, &config, residence_id, amount);
        collect_payment(&e, &config, &payer, amount);

        e._payments().set_last_payment(residence_id, e.ledger().timestamp());
        info!("quota of residence {} paid", residence_id);
        e._core().bump();
    }

    fn get_quota(e: Env) -> u128 {
        e._core().bump();
        get_config(&e).quota
    }

    fn get_payment(e: Env, residence_id: u32) -> Option<u64> {
        check_initialized(&e);
        e._core().bump();
        e._payments().last_payment(residence_id)
    }

    fn is_compliant(e: Env, residence_id: u32) -> bool {
        check_initialized(&e);
        e._core().bump();
        is_compliant(&e, residence_id)
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
        validate(&e, &caller, Access::ManagerOrResident);

        if e._topics().has(&title) {
            panic_with_error!(&e, &ContractErrors::DuplicateTopic);
        }

        let category = parse_category(&e, category);
        validate_amount(&e, &category, amount);

        let topic: Topic = new_topic(&e, &title, &description, category, amount, &responsible);
        e._topics().set_topic(&topic);
        save_new_title(&e, &title);

        info!("topic {:?} added", topic.category);
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
        validate(&e, &caller, Access::Manager);

        let mut topic: Topic = get_topic(&e, &title);
        if topic.status != TopicStatus::Idle {
            panic_with_error!(&e, &ContractErrors::NotIdle);
        }

        if description.len() > 0 {
            topic.description = description;
        }

        if amount > 0 {
            validate_amount(&e, &topic.category, amount);
            topic.amount = amount;
        }

        if let Some(responsible) = responsible {
            topic.responsible = responsible;
        }

        e._topics().set_topic(&topic);
        debug!("topic edited");
        e._core().bump();
    }

    fn remove_topic(e: Env, caller: Address, title: String) {
        validate(&e, &caller, Access::Manager);

        let topic: Topic = get_topic(&e, &title);
        if !is_removable(&topic.status) {
            panic_with_error!(&e, &ContractErrors::NotRemovable);
        }

        e._votes().clear(&title);
        e._topics().remove_topic(&title);
        remove_title(&e, &title);

        info!("topic removed while {:?}", topic.status);
        e._core().bump();
    }

    fn open_voting(e: Env, caller: Address, title: String) {
        validate(&e, &caller, Access::Manager);

        let mut topic: Topic = get_topic(&e, &title);
        if topic.status != TopicStatus::Idle {
            panic_with_error!(&e, &ContractErrors::NotIdle);
        }

        topic.status = TopicStatus::Voting;
        topic.opened_at = e.ledger().timestamp();
        e._topics().set_topic(&topic);

        info!("voting opened at {}", topic.opened_at);
        e._core().bump();
    }

    fn get_topic(e: Env, title: String) -> Topic {
        check_initialized(&e);
        e._core().bump();
        get_topic(&e, &title)
    }

    fn get_topics(e: Env, page: u32, page_size: u32) -> TopicPage {
        check_initialized(&e);
        e._core().bump();
        get_topics_page(&e, page, page_size)
    }

    fn topic_exists(e: Env, title: String) -> bool {
        check_initialized(&e);
        e._core().bump();
        e._topics().has(&title)
    }

    fn vote(e: Env, caller: Address, title: String, option: VoteOption) {
        validate(&e, &caller, Access::ManagerOrResident);

        let topic: Topic = get_topic(&e, &title);
        if topic.status != TopicStatus::Voting {
            panic_with_error!(&e, &ContractErrors::NotVoting);
        }

        if option == VoteOption::Empty {
            panic_with_error!(&e, &ContractErrors::EmptyVote);
        }

        let record: ResidentRecord = match e._residents().record(&caller) {
            Some(record) if is_compliant(&e, record.residence) => record,
            _ => panic_with_error!(&e, &ContractErrors::NotCompliant),
        };

        if has_voted(&e, &title, record.residence, &caller) {
            panic_with_error!(&e, &ContractErrors::DuplicateVote);
        }

        e._votes().push(&Vote {
            resident: caller,
            residence: record.residence,
            title,
            option,
            timestamp: e.ledger().timestamp(),
        });

        debug!("residence {} voted {:?}", record.residence, option);
        e._core().bump();
    }

    fn close_voting(e: Env, caller: Address, title: String) {
        validate(&e, &caller, Access::Manager);

        let mut topic: Topic = get_topic(&e, &title);
        if topic.status != TopicStatus::Voting {
            panic_with_error!(&e, &ContractErrors::NotVoting);
        }

        let config: CondominiumConfig = get_config(&e);
        let result: Tally = tally(&e._votes().votes(&title));
        validate_quorum(&e, &config, &topic, &result);

        topic.status = result.outcome();
        topic.closed_at = e.ledger().timestamp();

        if topic.status == TopicStatus::Approved {
            apply_approval(&e, &topic);
        }

        e._topics().set_topic(&topic);
        emit_topic_closed(&e, &title, &topic.status);

        info!("voting closed as {:?} with {:?}", topic.status, result);
        e._core().bump();
    }

    fn get_votes(e: Env, title: String) -> Vec<Vote> {
        check_initialized(&e);
        e._core().bump();
        e._votes().votes(&title)
    }

    fn vote_count(e: Env, title: String) -> u32 {
        check_initialized(&e);
        e._core().bump();
        e._votes().votes(&title).len()
    }

    fn transfer(e: Env, caller: Address, title: String, amount: u128) {
        validate(&e, &caller, Access::Manager);

        let mut topic: Topic = get_topic(&e, &title);
        let config: CondominiumConfig = get_config(&e);

        validate_spend(&e, &config, &topic, amount);
        pay_out(&e, &config, &topic.responsible, amount);

        topic.status = TopicStatus::Spent;
        e._topics().set_topic(&topic);
        emit_topic_spent(&e, &title, &topic.responsible, amount);

        info!("{} paid out of the fund", amount);
        e._core().bump();
    }

    fn get_balance(e: Env) -> i128 {
        e._core().bump();
        fund_balance(&e, &get_config(&e))
    }
}
