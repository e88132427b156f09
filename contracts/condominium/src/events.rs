use condominium_interface::TopicStatus;
use soroban_sdk::{symbol_short, Address, Env, String};

/// Emitted when an approved ChangeManager topic replaces the manager.
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

/// Emitted when an approved ChangeQuota topic sets a new quota.
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

/// Emitted when the voting of a topic is closed.
///
/// # Topics
/// * `Symbol` - "closed"
/// * `String` - The topic title
///
/// # Data
/// * `TopicStatus` - Approved or Denied
pub fn emit_topic_closed(e: &Env, title: &String, status: &TopicStatus) {
    let topics = (symbol_short!("closed"), title.clone());
    e.events().publish(topics, *status);
}

/// Emitted when the funds of an approved Spend topic are paid out.
///
/// # Topics
/// * `Symbol` - "spent"
/// * `String` - The topic title
///
/// # Data
/// * `Address` - The recipient
/// * `u128` - The amount transferred
pub fn emit_topic_spent(e: &Env, title: &String, responsible: &Address, amount: u128) {
    let topics = (symbol_short!("spent"), title.clone());
    e.events().publish(topics, (responsible.clone(), amount));
}
