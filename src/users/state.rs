use std::collections::BTreeMap;

use crate::store::{Action, AppState};

use super::models::User;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    by_id: BTreeMap<i64, User>,
}

impl UserState {
    pub fn upsert(&mut self, user: User) {
        self.by_id.insert(user.id, user);
    }

    pub fn get(&self, id: i64) -> Option<&User> {
        self.by_id.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.by_id.values()
    }
}

pub fn reducer(mut state: UserState, action: &Action) -> UserState {
    match action {
        Action::UserDetailsLoaded(user) => {
            state.upsert(user.clone());
            state
        }
        Action::UsersLoaded(users) => {
            for user in users {
                state.upsert(user.clone());
            }
            state
        }
        _ => state,
    }
}

pub fn get_user(state: &AppState, id: i64) -> Option<&User> {
    state.user.get(id)
}

pub fn get_users(state: &AppState) -> Vec<&User> {
    state.user.iter().collect()
}

pub fn get_active_users(state: &AppState) -> Vec<&User> {
    state.user.iter().filter(|user| !user.is_disabled).collect()
}
