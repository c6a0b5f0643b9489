//! Team roster shown on the team page and used for task assignment.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

use crate::types::UserRef;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TeamError {
    #[error("user {0} not found")]
    NotFound(String),
    #[error("{0} is already a team member")]
    DuplicateEmail(String),
}

/// Roles offered by the team page's role picker.
pub const ROLES: [&str; 3] = ["Admin", "Manager", "Member"];

/// Picker choices for a member holding `current`. A role set through the
/// user form that is not in [`ROLES`] stays selectable.
pub fn role_choices(current: &str) -> Vec<String> {
    let mut choices: Vec<String> = ROLES.iter().map(|r| (*r).to_owned()).collect();
    let current = current.trim();
    if !current.is_empty() && !ROLES.contains(&current) {
        choices.push(current.to_owned());
    }
    choices
}

/// Profile fields editable through the user form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberDraft {
    pub name: String,
    pub title: String,
    pub email: String,
    pub role: String,
}

#[derive(Clone, Debug, Default)]
pub struct TeamState {
    members: Vec<UserRef>,
}

impl TeamState {
    pub fn members(&self) -> &[UserRef] {
        &self.members
    }

    pub fn get(&self, id: &str) -> Option<&UserRef> {
        self.members.iter().find(|m| m.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut UserRef, TeamError> {
        self.members.iter_mut().find(|m| m.id == id).ok_or_else(|| TeamError::NotFound(id.to_owned()))
    }

    fn email_taken(&self, email: &str, except: Option<&str>) -> bool {
        self.members
            .iter()
            .any(|m| m.email.eq_ignore_ascii_case(email) && Some(m.id.as_str()) != except)
    }

    /// Make sure the signed-in user appears on the roster.
    pub fn ensure_member(&mut self, user: &UserRef) {
        if self.get(&user.id).is_none() {
            self.members.push(user.clone());
        }
    }

    /// Add a member and return the new id.
    ///
    /// # Errors
    ///
    /// Returns [`TeamError::DuplicateEmail`] when the email is already used.
    pub fn add(&mut self, draft: MemberDraft) -> Result<String, TeamError> {
        let email = draft.email.trim().to_owned();
        if self.email_taken(&email, None) {
            return Err(TeamError::DuplicateEmail(email));
        }
        let id = uuid::Uuid::new_v4().to_string();
        self.members.push(UserRef {
            id: id.clone(),
            name: draft.name.trim().to_owned(),
            title: draft.title.trim().to_owned(),
            email,
            role: draft.role.trim().to_owned(),
            is_active: true,
        });
        Ok(id)
    }

    /// Overwrite a member's profile fields.
    ///
    /// # Errors
    ///
    /// Fails for unknown ids and for an email used by another member.
    pub fn update(&mut self, id: &str, draft: MemberDraft) -> Result<(), TeamError> {
        let email = draft.email.trim().to_owned();
        if self.email_taken(&email, Some(id)) {
            return Err(TeamError::DuplicateEmail(email));
        }
        let member = self.get_mut(id)?;
        member.name = draft.name.trim().to_owned();
        member.title = draft.title.trim().to_owned();
        member.email = email;
        member.role = draft.role.trim().to_owned();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`TeamError::NotFound`] for unknown ids.
    pub fn set_active(&mut self, id: &str, is_active: bool) -> Result<(), TeamError> {
        self.get_mut(id)?.is_active = is_active;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`TeamError::NotFound`] for unknown ids.
    pub fn change_role(&mut self, id: &str, role: &str) -> Result<(), TeamError> {
        self.get_mut(id)?.role = role.trim().to_owned();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`TeamError::NotFound`] for unknown ids.
    pub fn remove(&mut self, id: &str) -> Result<UserRef, TeamError> {
        let index = self
            .members
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| TeamError::NotFound(id.to_owned()))?;
        Ok(self.members.remove(index))
    }
}
