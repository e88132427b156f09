#![cfg(test)]

use crate::{
    empty_address, is_empty_address, BuildingLayout, Category, ContractErrors, ErrorKind,
    QuorumRules,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

fn default_layout() -> BuildingLayout {
    BuildingLayout {
        blocks: 2,
        floors: 5,
        units: 5,
    }
}

#[test]
fn test_layout_residences() {
    let layout: BuildingLayout = default_layout();

    assert!(layout.is_valid());
    assert_eq!(layout.residences(), 50);

    assert!(layout.contains(1101));
    assert!(layout.contains(1505));
    assert!(layout.contains(2102));
    assert!(layout.contains(2505));

    assert!(!layout.contains(1));
    assert!(!layout.contains(1100));
    assert!(!layout.contains(1106));
    assert!(!layout.contains(1601));
    assert!(!layout.contains(3101));
    assert!(!layout.contains(9999));
}

#[test]
fn test_invalid_layouts() {
    let mut layout: BuildingLayout = default_layout();
    layout.blocks = 0;
    assert!(!layout.is_valid());

    layout.blocks = 10;
    assert!(!layout.is_valid());

    layout = default_layout();
    layout.floors = 10;
    assert!(!layout.is_valid());

    layout = default_layout();
    layout.units = 100;
    assert!(!layout.is_valid());
}

#[test]
fn test_category_values() {
    assert_eq!(Category::from_u32(0), Some(Category::Decision));
    assert_eq!(Category::from_u32(1), Some(Category::Spend));
    assert_eq!(Category::from_u32(2), Some(Category::ChangeQuota));
    assert_eq!(Category::from_u32(3), Some(Category::ChangeManager));
    assert_eq!(Category::from_u32(4), None);

    assert!(Category::Spend.carries_amount());
    assert!(Category::ChangeQuota.carries_amount());
    assert!(!Category::Decision.carries_amount());
    assert!(!Category::ChangeManager.carries_amount());
}

#[test]
fn test_quorum_rules() {
    let rules: QuorumRules = QuorumRules {
        decision: 5,
        spend: 10,
        change_quota: 20,
        change_manager: 15,
    };

    assert!(rules.is_valid());
    assert_eq!(rules.minimum_votes(&Category::Decision), 5);
    assert_eq!(rules.minimum_votes(&Category::Spend), 10);
    assert_eq!(rules.minimum_votes(&Category::ChangeQuota), 20);
    assert_eq!(rules.minimum_votes(&Category::ChangeManager), 15);

    assert!(!QuorumRules {
        decision: 0,
        ..rules
    }
    .is_valid());
}

#[test]
fn test_error_kinds() {
    assert_eq!(
        ContractErrors::NotInitialized.kind(),
        ErrorKind::Initialization
    );
    assert_eq!(
        ContractErrors::NotManager.kind(),
        ErrorKind::PermissionDenied
    );
    assert_eq!(
        ContractErrors::UnknownResidence.kind(),
        ErrorKind::NotFound
    );
    assert_eq!(ContractErrors::EmptyVote.kind(), ErrorKind::InvalidInput);
    assert_eq!(ContractErrors::NotVoting.kind(), ErrorKind::InvalidState);
    assert_eq!(
        ContractErrors::WrongCategoryOrStatus.kind(),
        ErrorKind::InvalidState
    );
    assert_eq!(
        ContractErrors::DuplicateVote.kind(),
        ErrorKind::AlreadyExists
    );
    assert_eq!(
        ContractErrors::AlreadyPaidThisWindow.kind(),
        ErrorKind::AlreadyExists
    );
    assert_eq!(
        ContractErrors::QuorumNotReached.kind(),
        ErrorKind::InsufficientResource
    );
    assert_eq!(ContractErrors::TransferFailed.kind(), ErrorKind::Funds);

    assert_eq!(
        ContractErrors::DuplicateVote.description(),
        "a residence can vote only once"
    );
}

#[test]
fn test_empty_address() {
    let e: Env = Env::default();

    assert!(is_empty_address(&e, &empty_address(&e)));
    assert!(!is_empty_address(&e, &Address::generate(&e)));
}
