use crate::storage::core::{PERSISTENT_BUMP_CONSTANT, PERSISTENT_BUMP_CONSTANT_THRESHOLD};
use condominium_interface::Topic;
use soroban_sdk::{contracttype, Env, String, Vec};

#[contracttype]
pub enum TopicsDataKeys {
    /// A Vec<String> with the titles sorted from oldest to newest
    Titles,
    Topic(String),
}

pub struct Topics {
    pub env: Env,
}

impl Topics {
    #[inline(always)]
    fn new(e: &Env) -> Topics {
        Topics { env: e.clone() }
    }

    pub fn titles(&self) -> Vec<String> {
        self.env
            .storage()
            .persistent()
            .get(&TopicsDataKeys::Titles)
            .unwrap_or(Vec::new(&self.env))
    }

    pub fn set_titles(&self, titles: &Vec<String>) {
        self.env
            .storage()
            .persistent()
            .set(&TopicsDataKeys::Titles, titles);
        self.env.storage().persistent().extend_ttl(
            &TopicsDataKeys::Titles,
            PERSISTENT_BUMP_CONSTANT_THRESHOLD,
            PERSISTENT_BUMP_CONSTANT,
        );
    }

    pub fn has(&self, title: &String) -> bool {
        self.env
            .storage()
            .persistent()
            .has(&TopicsDataKeys::Topic(title.clone()))
    }

    pub fn topic(&self, title: &String) -> Option<Topic> {
        self.env
            .storage()
            .persistent()
            .get(&TopicsDataKeys::Topic(title.clone()))
    }

    pub fn set_topic(&self, topic: &Topic) {
        self.env
            .storage()
            .persistent()
            .set(&TopicsDataKeys::Topic(topic.title.clone()), topic);
        self.bump(&topic.title);
    }

    pub fn remove_topic(&self, title: &String) {
        self.env
            .storage()
            .persistent()
            .remove(&TopicsDataKeys::Topic(title.clone()));
    }

    pub fn bump(&self, title: &String) {
        self.env.storage().persistent().extend_ttl(
            &TopicsDataKeys::Topic(title.clone()),
            PERSISTENT_BUMP_CONSTANT_THRESHOLD,
            PERSISTENT_BUMP_CONSTANT,
        );
    }
}

pub trait TopicsStorageFunc {
    fn _topics(&self) -> Topics;
}

impl TopicsStorageFunc for Env {
    #[inline(always)]
    fn _topics(&self) -> Topics {
        Topics::new(self)
    }
}
