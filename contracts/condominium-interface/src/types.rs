use soroban_sdk::{contracttype, Address, Env, String, Vec};

/// Strkey of the all-zero ed25519 account, used as the "no address" value.
pub const EMPTY_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn empty_address(e: &Env) -> Address {
    Address::from_string(&String::from_str(e, EMPTY_ACCOUNT))
}

pub fn is_empty_address(e: &Env, address: &Address) -> bool {
    address == &empty_address(e)
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Category {
    /// A decision with no on-chain effect besides the record of the outcome.
    Decision = 0,
    /// Pays `amount` to `responsible` from the fund once approved.
    Spend = 1,
    /// Replaces the monthly quota with `amount`.
    ChangeQuota = 2,
    /// Replaces the manager with `responsible`.
    ChangeManager = 3,
}

impl Category {
    pub fn from_u32(value: u32) -> Option<Category> {
        match value {
            0 => Some(Category::Decision),
            1 => Some(Category::Spend),
            2 => Some(Category::ChangeQuota),
            3 => Some(Category::ChangeManager),
            _ => None,
        }
    }

    /// Only spends and quota changes carry a value.
    pub fn carries_amount(&self) -> bool {
        matches!(self, Category::Spend | Category::ChangeQuota)
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TopicStatus {
    Idle = 0,
    Voting = 1,
    Approved = 2,
    Denied = 3,
    Spent = 4,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VoteOption {
    Empty = 0,
    Yes = 1,
    No = 2,
    Abstention = 3,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ManagerPolicy {
    /// An approved ChangeManager topic can hand the role to any address.
    AnyAddress = 0,
    /// The candidate must be a registered resident when the vote closes.
    ResidentsOnly = 1,
}

/// Residence ids are `block * 1000 + floor * 100 + unit`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuildingLayout {
    pub blocks: u32,
    pub floors: u32,
    pub units: u32,
}

impl BuildingLayout {
    pub fn is_valid(&self) -> bool {
        (1..=9).contains(&self.blocks)
            && (1..=9).contains(&self.floors)
            && (1..=99).contains(&self.units)
    }

    pub fn contains(&self, residence_id: u32) -> bool {
        let block = residence_id / 1000;
        let floor = (residence_id % 1000) / 100;
        let unit = residence_id % 100;

        (1..=self.blocks).contains(&block)
            && (1..=self.floors).contains(&floor)
            && (1..=self.units).contains(&unit)
    }

    pub fn residences(&self) -> u32 {
        self.blocks * self.floors * self.units
    }
}

/// Minimum number of ballots needed before a topic of each category can be closed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuorumRules {
    pub decision: u32,
    pub spend: u32,
    pub change_quota: u32,
    pub change_manager: u32,
}

impl QuorumRules {
    pub fn minimum_votes(&self, category: &Category) -> u32 {
        match category {
            Category::Decision => self.decision,
            Category::Spend => self.spend,
            Category::ChangeQuota => self.change_quota,
            Category::ChangeManager => self.change_manager,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.decision > 0 && self.spend > 0 && self.change_quota > 0 && self.change_manager > 0
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CondominiumConfig {
    /// Stellar asset the quotas are paid with and the fund is held in.
    pub token: Address,
    pub quota: u128,
    pub layout: BuildingLayout,
    pub quorum: QuorumRules,
    pub manager_policy: ManagerPolicy,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resident {
    pub wallet: Address,
    pub residence: u32,
    pub is_counselor: bool,
    pub is_manager: bool,
    /// Timestamp the next quota is due, 0 when the residence never paid.
    pub next_payment: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResidentPage {
    pub residents: Vec<Resident>,
    pub total: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Topic {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub amount: u128,
    pub responsible: Address,
    pub status: TopicStatus,
    pub created_at: u64,
    pub opened_at: u64,
    pub closed_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TopicPage {
    pub topics: Vec<Topic>,
    pub total: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vote {
    pub resident: Address,
    pub residence: u32,
    pub title: String,
    pub option: VoteOption,
    pub timestamp: u64,
}
