use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    store::AppState,
    users::{models::UpdateUserParams, state::get_user, UserService},
};

use super::error::*;

const MAX_NAME_LENGTH: usize = 64;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Saved,
    /// The user was saved as disabled; callers leave the user's page
    Disabled,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct UserEditForm {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub is_disabled: bool,
}

impl UserEditForm {
    pub fn new(user_id: i64) -> Self {
        UserEditForm { user_id, ..Default::default() }
    }

    /// Fills the fields from the cached user, if there is one.
    pub fn prefill(&mut self, state: &AppState) {
        if let Some(user) = get_user(state, self.user_id) {
            self.name = user.name.clone();
            self.email = user.email.clone().unwrap_or_default();
            self.is_disabled = user.is_disabled;
        }
    }

    pub fn validate(&self) -> Result<UpdateUserParams> {
        let name = self.name.trim();
        let len = name.chars().count();
        if len == 0 || len > MAX_NAME_LENGTH {
            return Err(Error::InvalidNameLength(len));
        }

        let email = self.email.trim();
        if !email.is_empty() && !EMAIL_RE.is_match(email) {
            return Err(Error::InvalidEmail(email.to_string()));
        }

        Ok(UpdateUserParams {
            name: name.to_string(),
            email: if email.is_empty() { None } else { Some(email.to_string()) },
            is_disabled: self.is_disabled,
        })
    }

    pub async fn submit(&self, user_svc: &(dyn UserService + Send + Sync)) -> Result<EditOutcome> {
        let params = self.validate()?;

        Ok(match user_svc.update_user(self.user_id, params).await {
            Some(user) if user.is_disabled => EditOutcome::Disabled,
            Some(_) => EditOutcome::Saved,
            None => EditOutcome::Failed,
        })
    }
}
