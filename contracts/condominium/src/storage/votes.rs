use crate::storage::core::{PERSISTENT_BUMP_CONSTANT, PERSISTENT_BUMP_CONSTANT_THRESHOLD};
use condominium_interface::Vote;
use soroban_sdk::{contracttype, Env, String, Vec};

#[contracttype]
pub enum VotesDataKeys {
    /// A Vec<Vote> value with the ballots in the order they were cast
    Votes(String),

    /// Marks that a residence already voted on a topic
    Ballot(String, u32),
}

pub struct Votes {
    pub env: Env,
}

impl Votes {
    #[inline(always)]
    fn new(e: &Env) -> Votes {
        Votes { env: e.clone() }
    }

    pub fn votes(&self, title: &String) -> Vec<Vote> {
        self.env
            .storage()
            .persistent()
            .get(&VotesDataKeys::Votes(title.clone()))
            .unwrap_or(Vec::new(&self.env))
    }

    pub fn has_ballot(&self, title: &String, residence_id: u32) -> bool {
        self.env
            .storage()
            .persistent()
            .has(&VotesDataKeys::Ballot(title.clone(), residence_id))
    }

    pub fn push(&self, vote: &Vote) {
        let mut votes: Vec<Vote> = self.votes(&vote.title);
        votes.push_back(vote.clone());

        let votes_key = VotesDataKeys::Votes(vote.title.clone());
        let ballot_key = VotesDataKeys::Ballot(vote.title.clone(), vote.residence);
        self.env.storage().persistent().set(&votes_key, &votes);
        self.env.storage().persistent().set(&ballot_key, &true);

        self.env.storage().persistent().extend_ttl(
            &votes_key,
            PERSISTENT_BUMP_CONSTANT_THRESHOLD,
            PERSISTENT_BUMP_CONSTANT,
        );
        self.env.storage().persistent().extend_ttl(
            &ballot_key,
            PERSISTENT_BUMP_CONSTANT_THRESHOLD,
            PERSISTENT_BUMP_CONSTANT,
        );
    }

    /// Drops every ballot of a topic
    pub fn clear(&self, title: &String) {
        for vote in self.votes(title).iter() {
            self.env
                .storage()
                .persistent()
                .remove(&VotesDataKeys::Ballot(title.clone(), vote.residence));
        }

        self.env
            .storage()
            .persistent()
            .remove(&VotesDataKeys::Votes(title.clone()));
    }
}

pub trait VotesStorageFunc {
    fn _votes(&self) -> Votes;
}

impl VotesStorageFunc for Env {
    #[inline(always)]
    fn _votes(&self) -> Votes {
        Votes::new(self)
    }
}
