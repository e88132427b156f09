use crate::storage::residents::ResidentsStorageFunc;
use crate::utils::core::get_manager;
use condominium_interface::ContractErrors;
use log::warn;
use soroban_sdk::{panic_with_error, Address, Env};

/// Privilege tiers, ordered from the weakest to the strongest.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Role {
    Outsider,
    Resident,
    Counselor,
    Manager,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Access {
    Manager,
    ManagerOrCounselor,
    ManagerOrResident,
}

impl Access {
    pub fn allows(&self, role: Role) -> bool {
        match self {
            Access::Manager => role == Role::Manager,
            Access::ManagerOrCounselor => role >= Role::Counselor,
            Access::ManagerOrResident => role >= Role::Resident,
        }
    }

    pub fn error(&self) -> ContractErrors {
        match self {
            Access::Manager => ContractErrors::NotManager,
            Access::ManagerOrCounselor => ContractErrors::NotManagerOrCounselor,
            Access::ManagerOrResident => ContractErrors::NotManagerOrResident,
        }
    }
}

/// Roles are resolved from the current state on every call, nothing is cached.
pub fn resolve_role(e: &Env, caller: &Address) -> Role {
    if caller == &get_manager(e) {
        return Role::Manager;
    }

    match e._residents().record(caller) {
        Some(record) if record.is_counselor => Role::Counselor,
        Some(_) => Role::Resident,
        None => Role::Outsider,
    }
}

/// Requires the caller signature and a role the access level accepts
pub fn validate(e: &Env, caller: &Address, access: Access) -> Role {
    caller.require_auth();

    let role: Role = resolve_role(e, caller);
    if !access.allows(role) {
        warn!("{:?} denied: {}", role, access.error().description());
        panic_with_error!(&e, &access.error());
    }

    role
}

#[cfg(test)]
mod test {
    use crate::utils::access::{Access, Role};

    #[test]
    fn test_access_levels() {
        assert!(Access::Manager.allows(Role::Manager));
        assert!(!Access::Manager.allows(Role::Counselor));
        assert!(!Access::Manager.allows(Role::Resident));

        assert!(Access::ManagerOrCounselor.allows(Role::Manager));
        assert!(Access::ManagerOrCounselor.allows(Role::Counselor));
        assert!(!Access::ManagerOrCounselor.allows(Role::Resident));
        assert!(!Access::ManagerOrCounselor.allows(Role::Outsider));

        assert!(Access::ManagerOrResident.allows(Role::Manager));
        assert!(Access::ManagerOrResident.allows(Role::Counselor));
        assert!(Access::ManagerOrResident.allows(Role::Resident));
        assert!(!Access::ManagerOrResident.allows(Role::Outsider));
    }
}
