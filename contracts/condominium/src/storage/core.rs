use condominium_interface::CondominiumConfig;
use soroban_sdk::{contracttype, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 30;
pub const INSTANCE_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 15;
pub const PERSISTENT_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 60;
pub const PERSISTENT_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 30;

#[contracttype]
pub enum CoreDataKeys {
    Manager,
    /// The current quota lives inside the config and is rewritten by ChangeQuota topics
    Config,
}

pub struct Core {
    pub env: Env,
}

impl Core {
    #[inline(always)]
    pub fn new(e: &Env) -> Core {
        Core { env: e.clone() }
    }

    pub fn manager(&self) -> Option<Address> {
        self.env.storage().instance().get(&CoreDataKeys::Manager)
    }

    pub fn set_manager(&self, address: &Address) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::Manager, address);
    }

    pub fn config(&self) -> Option<CondominiumConfig> {
        self.env.storage().instance().get(&CoreDataKeys::Config)
    }

    pub fn set_config(&self, config: &CondominiumConfig) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::Config, config);
    }

    pub fn bump(&self) {
        self.env
            .storage()
            .instance()
            .extend_ttl(INSTANCE_BUMP_CONSTANT_THRESHOLD, INSTANCE_BUMP_CONSTANT);
    }
}

pub trait CoreStorageFunc {
    fn _core(&self) -> Core;
}

impl CoreStorageFunc for Env {
    #[inline(always)]
    fn _core(&self) -> Core {
        Core::new(self)
    }
}
