use crate::storage::topics::TopicsStorageFunc;
use crate::utils::core::page_bounds;
use condominium_interface::{Category, ContractErrors, Topic, TopicPage, TopicStatus};
use soroban_sdk::{panic_with_error, Address, Env, String, Vec};

pub fn get_topic(e: &Env, title: &String) -> Topic {
    e._topics().topic(title).unwrap_or_else(|| {
        panic_with_error!(&e, &ContractErrors::UnknownTopic);
    })
}

pub fn parse_category(e: &Env, category: u32) -> Category {
    Category::from_u32(category).unwrap_or_else(|| {
        panic_with_error!(&e, &ContractErrors::InvalidCategory);
    })
}

/// Decisions and manager changes have no value attached, the rest must fit a token amount
pub fn validate_amount(e: &Env, category: &Category, amount: u128) {
    if amount > 0 && !category.carries_amount() {
        panic_with_error!(&e, &ContractErrors::InvalidCategory);
    }

    if i128::try_from(amount).is_err() {
        panic_with_error!(&e, &ContractErrors::InvalidAmount);
    }
}

pub fn new_topic(
    e: &Env,
    title: &String,
    description: &String,
    category: Category,
    amount: u128,
    responsible: &Address,
) -> Topic {
    Topic {
        title: title.clone(),
        description: description.clone(),
        category,
        amount,
        responsible: responsible.clone(),
        status: TopicStatus::Idle,
        created_at: e.ledger().timestamp(),
        opened_at: 0,
        closed_at: 0,
    }
}

/// Topics under vote and topics whose approval produced an effect stay on record
pub fn is_removable(status: &TopicStatus) -> bool {
    matches!(status, TopicStatus::Idle | TopicStatus::Denied)
}

pub fn save_new_title(e: &Env, title: &String) {
    let mut titles: Vec<String> = e._topics().titles();
    titles.push_back(title.clone());
    e._topics().set_titles(&titles);
}

pub fn remove_title(e: &Env, title: &String) {
    let mut titles: Vec<String> = e._topics().titles();
    if let Some(index) = titles.first_index_of(title) {
        titles.remove(index);
    }
    e._topics().set_titles(&titles);
}

pub fn get_topics_page(e: &Env, page: u32, page_size: u32) -> TopicPage {
    let titles: Vec<String> = e._topics().titles();
    let mut topics: Vec<Topic> = Vec::new(&e);

    if let Some((start, end)) = page_bounds(titles.len(), page, page_size) {
        for title in titles.slice(start..end).iter() {
            if let Some(topic) = e._topics().topic(&title) {
                topics.push_back(topic);
            }
        }
    }

    TopicPage {
        topics,
        total: titles.len(),
    }
}
