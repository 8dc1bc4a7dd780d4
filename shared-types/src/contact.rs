use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Placeholder shown wherever a contact has neither a first nor a last name.
pub const NO_NAME: &str = "No Name";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Contact {
    pub id: String,
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    pub notes: Option<String>,
    pub favorite: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Contact {
    /// A contact with no fields filled in, as produced by the "New" button.
    pub fn blank(id: impl Into<String>, now: i64) -> Self {
        Self {
            id: id.into(),
            first: None,
            last: None,
            avatar: None,
            twitter: None,
            notes: None,
            favorite: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_name(&self) -> bool {
        non_blank(&self.first).is_some() || non_blank(&self.last).is_some()
    }

    /// `"first last"`, or `None` when both parts are blank.
    pub fn full_name(&self) -> Option<String> {
        if !self.has_name() {
            return None;
        }
        let first = non_blank(&self.first).unwrap_or_default();
        let last = non_blank(&self.last).unwrap_or_default();
        Some(format!("{first} {last}").trim().to_string())
    }

    pub fn display_name(&self) -> String {
        self.full_name().unwrap_or_else(|| NO_NAME.to_string())
    }

    /// Profile link built from the handle as entered.
    pub fn twitter_url(&self) -> Option<String> {
        non_blank(&self.twitter).map(|handle| format!("https://twitter.com/{handle}"))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Partial update of a contact. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactMutation {
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    pub notes: Option<String>,
    pub favorite: Option<bool>,
}

impl ContactMutation {
    pub fn favorite(favorite: bool) -> Self {
        Self {
            favorite: Some(favorite),
            ..Self::default()
        }
    }

    pub fn apply_to(&self, contact: &mut Contact) {
        if let Some(first) = &self.first {
            contact.first = Some(first.clone());
        }
        if let Some(last) = &self.last {
            contact.last = Some(last.clone());
        }
        if let Some(avatar) = &self.avatar {
            contact.avatar = Some(avatar.clone());
        }
        if let Some(twitter) = &self.twitter {
            contact.twitter = Some(twitter.clone());
        }
        if let Some(notes) = &self.notes {
            contact.notes = Some(notes.clone());
        }
        if let Some(favorite) = self.favorite {
            contact.favorite = favorite;
        }
    }
}
