use condominium_interface::{Category, CondominiumClient, Topic, TopicStatus};
use soroban_sdk::{symbol_short, Address, Env, String};

/// Emitted when a vote relayed through the adapter replaces the condominium manager.
///
/// # Topics
/// * `Symbol` - "manager"
///
/// # Data
/// * `Address` - The new manager
pub fn emit_manager_changed(e: &Env, manager: &Address) {
    let topics = (symbol_short!("manager"),);
    e.events().publish(topics, manager.clone());
}

/// Emitted when a vote relayed through the adapter sets a new quota.
///
/// # Topics
/// * `Symbol` - "quota"
///
/// # Data
/// * `u128` - The new quota
pub fn emit_quota_changed(e: &Env, quota: u128) {
    let topics = (symbol_short!("quota"),);
    e.events().publish(topics, quota);
}

/// Mirrors the governance effects of a closed topic under the adapter's address
pub fn emit_closing_effects(e: &Env, implementation: &CondominiumClient, title: &String) {
    let topic: Topic = implementation.get_topic(title);
    if topic.status != TopicStatus::Approved {
        return;
    }

    match topic.category {
        Category::ChangeManager => emit_manager_changed(e, &implementation.get_manager()),
        Category::ChangeQuota => emit_quota_changed(e, implementation.get_quota()),
        Category::Decision | Category::Spend => {}
    }
}
