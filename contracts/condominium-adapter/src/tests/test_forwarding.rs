#![cfg(test)]

use crate::tests::test_utils::{
    create_test_data, find_event, init_adapter, TestData, TEST_QUOTA,
};
use condominium_interface::{Category, TopicStatus, VoteOption};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, FromVal, String};

fn register_residents(e: &Env, test_data: &TestData, residences: &[u32]) -> std::vec::Vec<Address> {
    let mut wallets: std::vec::Vec<Address> = std::vec::Vec::new();
    for residence in residences {
        let wallet: Address = Address::generate(&e);
        test_data
            .adapter_client
            .add_resident(&test_data.manager, &wallet, residence);
        test_data
            .token_stellar
            .mint(&wallet, &(TEST_QUOTA as i128));
        test_data
            .adapter_client
            .pay_quota(&wallet, residence, &TEST_QUOTA);
        wallets.push(wallet);
    }
    wallets
}

#[test]
pub fn test_registry_through_adapter() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_adapter(&test_data);

    let wallets = register_residents(&e, &test_data, &[1101, 1102, 1201]);

    assert_eq!(test_data.adapter_client.get_manager(), test_data.manager);
    assert_eq!(
        test_data.adapter_client.get_config(),
        test_data.core_client.get_config()
    );
    assert_eq!(test_data.adapter_client.get_quota(), TEST_QUOTA);
    assert_eq!(
        test_data.adapter_client.get_balance(),
        (TEST_QUOTA * 3) as i128
    );
    assert_eq!(test_data.adapter_client.get_payment(&1101), Some(0));
    assert!(test_data.adapter_client.is_compliant(&1201));
    assert!(!test_data.adapter_client.is_compliant(&1204));
    assert!(test_data.adapter_client.residence_exists(&1204));
    assert!(!test_data.adapter_client.residence_exists(&1301));
    assert_eq!(test_data.adapter_client.get_residents(&1, &10).total, 3);
    assert_eq!(
        test_data.adapter_client.get_resident(&wallets[2]).residence,
        1201
    );

    test_data
        .adapter_client
        .set_counselor(&test_data.manager, &wallets[0], &true);
    assert!(test_data.core_client.get_resident(&wallets[0]).is_counselor);

    // Counselors manage the registry through the adapter too
    let newcomer: Address = Address::generate(&e);
    test_data
        .adapter_client
        .add_resident(&wallets[0], &newcomer, &1104);
    assert!(test_data.core_client.is_resident(&newcomer));

    test_data
        .adapter_client
        .remove_resident(&test_data.manager, &wallets[1]);
    assert!(!test_data.adapter_client.is_resident(&wallets[1]));
    assert!(!test_data.core_client.is_resident(&wallets[1]));
}

#[test]
pub fn test_governance_through_adapter() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_adapter(&test_data);

    let wallets = register_residents(&e, &test_data, &[1101, 1102, 1103]);
    let provider: Address = Address::generate(&e);
    let title: String = String::from_str(&e, "Intercom");

    test_data.adapter_client.add_topic(
        &wallets[0],
        &title,
        &String::from_str(&e, "Replace the intercom"),
        &(Category::Spend as u32),
        &(TEST_QUOTA * 2),
        &provider,
    );
    test_data.adapter_client.edit_topic(
        &test_data.manager,
        &title,
        &String::from_str(&e, "Replace the intercom panel"),
        &0,
        &None,
    );
    assert!(test_data.adapter_client.topic_exists(&title));
    assert_eq!(test_data.adapter_client.get_topics(&1, &10).total, 1);

    test_data
        .adapter_client
        .open_voting(&test_data.manager, &title);
    for wallet in wallets.iter() {
        test_data
            .adapter_client
            .vote(wallet, &title, &VoteOption::Yes);
    }
    assert_eq!(test_data.adapter_client.vote_count(&title), 3);
    assert_eq!(test_data.adapter_client.get_votes(&title).len(), 3);

    test_data
        .adapter_client
        .close_voting(&test_data.manager, &title);
    assert_eq!(
        test_data.adapter_client.get_topic(&title).status,
        TopicStatus::Approved
    );

    test_data
        .adapter_client
        .transfer(&test_data.manager, &title, &(TEST_QUOTA * 2));
    assert_eq!(
        test_data.token_client.balance(&provider),
        (TEST_QUOTA * 2) as i128
    );
    assert_eq!(test_data.adapter_client.get_balance(), TEST_QUOTA as i128);
    assert_eq!(
        test_data.core_client.get_topic(&title).status,
        TopicStatus::Spent
    );

    let draft: String = String::from_str(&e, "Draft");
    test_data.adapter_client.add_topic(
        &test_data.manager,
        &draft,
        &String::from_str(&e, "Not ready"),
        &(Category::Decision as u32),
        &0,
        &test_data.manager,
    );
    test_data
        .adapter_client
        .remove_topic(&test_data.manager, &draft);
    assert!(!test_data.core_client.topic_exists(&draft));
}

fn voted_topic(
    test_data: &TestData,
    voters: &[Address],
    title: &str,
    category: Category,
    amount: u128,
    responsible: &Address,
    option: VoteOption,
) -> String {
    let e: &Env = &test_data.adapter_client.env;
    let title: String = String::from_str(e, title);
    test_data.adapter_client.add_topic(
        &voters[0],
        &title,
        &String::from_str(e, "Voted in the assembly"),
        &(category as u32),
        &amount,
        responsible,
    );
    test_data
        .adapter_client
        .open_voting(&test_data.manager, &title);
    for voter in voters.iter() {
        test_data.adapter_client.vote(voter, &title, &option);
    }
    title
}

#[test]
pub fn test_governance_events_from_adapter() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_adapter(&test_data);

    let wallets = register_residents(&e, &test_data, &[1101, 1102, 1103, 1104]);
    let adapter: Address = test_data.adapter_client.address.clone();

    let lower: String = voted_topic(
        &test_data,
        &wallets,
        "Lower quota",
        Category::ChangeQuota,
        TEST_QUOTA / 2,
        &test_data.manager,
        VoteOption::No,
    );
    test_data
        .adapter_client
        .close_voting(&test_data.manager, &lower);
    assert!(find_event(&e, &adapter, "quota").is_none());
    assert_eq!(test_data.adapter_client.get_quota(), TEST_QUOTA);

    let raise: String = voted_topic(
        &test_data,
        &wallets,
        "Raise quota",
        Category::ChangeQuota,
        TEST_QUOTA * 2,
        &test_data.manager,
        VoteOption::Yes,
    );
    test_data
        .adapter_client
        .close_voting(&test_data.manager, &raise);

    let (_, data) = find_event(&e, &adapter, "quota").unwrap();
    assert_eq!(u128::from_val(&e, &data), TEST_QUOTA * 2);
    let (_, data) = find_event(&e, &test_data.core_client.address, "quota").unwrap();
    assert_eq!(u128::from_val(&e, &data), TEST_QUOTA * 2);

    let candidate: Address = wallets[2].clone();
    let election: String = voted_topic(
        &test_data,
        &wallets[0..3],
        "New manager",
        Category::ChangeManager,
        0,
        &candidate,
        VoteOption::Yes,
    );
    test_data
        .adapter_client
        .close_voting(&test_data.manager, &election);

    let (_, data) = find_event(&e, &adapter, "manager").unwrap();
    assert_eq!(Address::from_val(&e, &data), candidate);
    assert_eq!(test_data.adapter_client.get_manager(), candidate);
}

#[test]
pub fn test_core_errors_are_relayed() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_adapter(&test_data);

    let wallets = register_residents(&e, &test_data, &[1101]);
    let outsider: Address = Address::generate(&e);

    assert!(test_data
        .adapter_client
        .try_add_resident(&outsider, &Address::generate(&e), &1102)
        .is_err());
    assert!(test_data
        .adapter_client
        .try_add_resident(&test_data.manager, &outsider, &1301)
        .is_err());
    assert_eq!(test_data.core_client.get_residents(&1, &10).total, 1);

    assert!(test_data
        .adapter_client
        .try_pay_quota(&wallets[0], &1101, &TEST_QUOTA)
        .is_err());

    let title: String = String::from_str(&e, "Noise rules");
    test_data.adapter_client.add_topic(
        &wallets[0],
        &title,
        &String::from_str(&e, "Quiet hours after 22h"),
        &(Category::Decision as u32),
        &0,
        &wallets[0],
    );
    assert!(test_data
        .adapter_client
        .try_vote(&wallets[0], &title, &VoteOption::Yes)
        .is_err());

    test_data
        .adapter_client
        .open_voting(&test_data.manager, &title);
    test_data
        .adapter_client
        .vote(&wallets[0], &title, &VoteOption::Yes);
    assert!(test_data
        .adapter_client
        .try_vote(&wallets[0], &title, &VoteOption::No)
        .is_err());
    assert!(test_data
        .adapter_client
        .try_close_voting(&test_data.manager, &title)
        .is_err());
    assert!(test_data
        .adapter_client
        .try_transfer(&test_data.manager, &title, &1)
        .is_err());

    assert_eq!(test_data.core_client.vote_count(&title), 1);
    assert_eq!(
        test_data.core_client.get_topic(&title).status,
        TopicStatus::Voting
    );
}
