use crate::storage::core::{PERSISTENT_BUMP_CONSTANT, PERSISTENT_BUMP_CONSTANT_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env, Vec};

/// What is stored for a wallet. Manager flag and payment dates are derived when read.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ResidentRecord {
    pub wallet: Address,
    pub residence: u32,
    pub is_counselor: bool,
}

#[contracttype]
pub enum ResidentsDataKeys {
    /// Vec<Address> with the wallets in registration order
    Wallets,
    Resident(Address),
    /// Residence id -> wallet living there
    Occupant(u32),
}

pub struct Residents {
    pub env: Env,
}

impl Residents {
    #[inline(always)]
    fn new(e: &Env) -> Residents {
        Residents { env: e.clone() }
    }

    pub fn wallets(&self) -> Vec<Address> {
        self.env
            .storage()
            .persistent()
            .get(&ResidentsDataKeys::Wallets)
            .unwrap_or(Vec::new(&self.env))
    }

    pub fn set_wallets(&self, wallets: &Vec<Address>) {
        self.env
            .storage()
            .persistent()
            .set(&ResidentsDataKeys::Wallets, wallets);
        self.env.storage().persistent().extend_ttl(
            &ResidentsDataKeys::Wallets,
            PERSISTENT_BUMP_CONSTANT_THRESHOLD,
            PERSISTENT_BUMP_CONSTANT,
        );
    }

    pub fn record(&self, wallet: &Address) -> Option<ResidentRecord> {
        self.env
            .storage()
            .persistent()
            .get(&ResidentsDataKeys::Resident(wallet.clone()))
    }

    pub fn set_record(&self, record: &ResidentRecord) {
        self.env
            .storage()
            .persistent()
            .set(&ResidentsDataKeys::Resident(record.wallet.clone()), record);
        self.bump(&record.wallet);
    }

    pub fn remove_record(&self, wallet: &Address) {
        self.env
            .storage()
            .persistent()
            .remove(&ResidentsDataKeys::Resident(wallet.clone()));
    }

    pub fn occupant(&self, residence_id: u32) -> Option<Address> {
        self.env
            .storage()
            .persistent()
            .get(&ResidentsDataKeys::Occupant(residence_id))
    }

    pub fn set_occupant(&self, residence_id: u32, wallet: &Address) {
        self.env
            .storage()
            .persistent()
            .set(&ResidentsDataKeys::Occupant(residence_id), wallet);
        self.env.storage().persistent().extend_ttl(
            &ResidentsDataKeys::Occupant(residence_id),
            PERSISTENT_BUMP_CONSTANT_THRESHOLD,
            PERSISTENT_BUMP_CONSTANT,
        );
    }

    pub fn remove_occupant(&self, residence_id: u32) {
        self.env
            .storage()
            .persistent()
            .remove(&ResidentsDataKeys::Occupant(residence_id));
    }

    pub fn bump(&self, wallet: &Address) {
        self.env.storage().persistent().extend_ttl(
            &ResidentsDataKeys::Resident(wallet.clone()),
            PERSISTENT_BUMP_CONSTANT_THRESHOLD,
            PERSISTENT_BUMP_CONSTANT,
        );
    }
}

pub trait ResidentsStorageFunc {
    fn _residents(&self) -> Residents;
}

impl ResidentsStorageFunc for Env {
    #[inline(always)]
    fn _residents(&self) -> Residents {
        Residents::new(self)
    }
}
