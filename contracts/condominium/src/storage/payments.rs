use crate::storage::core::{PERSISTENT_BUMP_CONSTANT, PERSISTENT_BUMP_CONSTANT_THRESHOLD};
use soroban_sdk::{contracttype, Env};

#[contracttype]
pub enum PaymentsDataKeys {
    /// Residence id -> timestamp of its last quota payment
    LastPayment(u32),
}

pub struct Payments {
    pub env: Env,
}

impl Payments {
    #[inline(always)]
    fn new(e: &Env) -> Payments {
        Payments { env: e.clone() }
    }

    pub fn last_payment(&self, residence_id: u32) -> Option<u64> {
        self.env
            .storage()
            .persistent()
            .get(&PaymentsDataKeys::LastPayment(residence_id))
    }

    pub fn set_last_payment(&self, residence_id: u32, timestamp: u64) {
        self.env
            .storage()
            .persistent()
            .set(&PaymentsDataKeys::LastPayment(residence_id), &timestamp);
        self.bump(residence_id);
    }

    pub fn bump(&self, residence_id: u32) {
        self.env.storage().persistent().extend_ttl(
            &PaymentsDataKeys::LastPayment(residence_id),
            PERSISTENT_BUMP_CONSTANT_THRESHOLD,
            PERSISTENT_BUMP_CONSTANT,
        );
    }
}

pub trait PaymentsStorageFunc {
    fn _payments(&self) -> Payments;
}

impl PaymentsStorageFunc for Env {
    #[inline(always)]
    fn _payments(&self) -> Payments {
        Payments::new(self)
    }
}
