use crate::events::{emit_manager_changed, emit_quota_changed};
use crate::storage::core::CoreStorageFunc;
use crate::storage::residents::ResidentsStorageFunc;
use crate::storage::votes::VotesStorageFunc;
use crate::utils::core::get_config;
use condominium_interface::{
    Category, CondominiumConfig, ContractErrors, ManagerPolicy, Topic, TopicStatus, Vote,
    VoteOption,
};
use log::{info, warn};
use soroban_sdk::{panic_with_error, Address, Env, String, Vec};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    pub yes: u32,
    pub no: u32,
    pub abstention: u32,
}

impl Tally {
    pub fn total(&self) -> u32 {
        self.yes + self.no + self.abstention
    }

    /// Abstentions count for the quorum only
    pub fn outcome(&self) -> TopicStatus {
        if self.yes > self.no {
            TopicStatus::Approved
        } else {
            TopicStatus::Denied
        }
    }
}

pub fn tally(votes: &Vec<Vote>) -> Tally {
    let mut result: Tally = Tally::default();

    for vote in votes.iter() {
        match vote.option {
            VoteOption::Yes => result.yes += 1,
            VoteOption::No => result.no += 1,
            VoteOption::Abstention => result.abstention += 1,
            VoteOption::Empty => {}
        }
    }

    result
}

pub fn validate_quorum(e: &Env, config: &CondominiumConfig, topic: &Topic, tally: &Tally) {
    let minimum: u32 = config.quorum.minimum_votes(&topic.category);
    if tally.total() < minimum {
        warn!("{} ballots cast, {} needed", tally.total(), minimum);
        panic_with_error!(&e, &ContractErrors::QuorumNotReached);
    }
}

/// A residence votes once per topic, and so does a wallet that moved between residences
pub fn has_voted(e: &Env, title: &String, residence_id: u32, wallet: &Address) -> bool {
    e._votes().has_ballot(title, residence_id)
        || e
            ._votes()
            .votes(title)
            .iter()
            .any(|vote| &vote.resident == wallet)
}

/// Side effects of an approved topic, spends wait for the treasury
pub fn apply_approval(e: &Env, topic: &Topic) {
    match topic.category {
        Category::ChangeQuota => {
            let mut config: CondominiumConfig = get_config(e);
            config.quota = topic.amount;
            e._core().set_config(&config);
            info!("quota changed to {}", topic.amount);
            emit_quota_changed(e, topic.amount);
        }
        Category::ChangeManager => {
            let config: CondominiumConfig = get_config(e);
            if config.manager_policy == ManagerPolicy::ResidentsOnly
                && e._residents().record(&topic.responsible).is_none()
            {
                panic_with_error!(&e, &ContractErrors::CandidateNotResident);
            }

            e._core().set_manager(&topic.responsible);
            info!("manager changed to {:?}", topic.responsible);
            emit_manager_changed(e, &topic.responsible);
        }
        Category::Decision | Category::Spend => {}
    }
}

#[cfg(test)]
mod test {
    use crate::utils::votes::Tally;
    use condominium_interface::TopicStatus;

    #[test]
    fn test_tally_outcome() {
        let approved: Tally = Tally {
            yes: 3,
            no: 2,
            abstention: 10,
        };
        assert_eq!(approved.outcome(), TopicStatus::Approved);
        assert_eq!(approved.total(), 15);

        let tied: Tally = Tally {
            yes: 2,
            no: 2,
            abstention: 1,
        };
        assert_eq!(tied.outcome(), TopicStatus::Denied);

        let abstained: Tally = Tally {
            yes: 0,
            no: 0,
            abstention: 5,
        };
        assert_eq!(abstained.outcome(), TopicStatus::Denied);
    }
}
