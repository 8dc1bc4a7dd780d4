use shared_types::{Location, NavigationState};

use crate::routes::FormData;

/// Out-of-band submission channel. Its state is tracked per key and never
/// touches the page navigation or history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fetcher {
    state: NavigationState,
    form_data: Option<FormData>,
}

impl Fetcher {
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Fields of the in-flight submission, kept until revalidation finishes.
    pub fn form_data(&self) -> Option<&FormData> {
        self.form_data.as_ref()
    }

    pub(crate) fn submitting(&mut self, form: FormData) {
        self.state = NavigationState::Submitting;
        self.form_data = Some(form);
    }

    pub(crate) fn revalidating(&mut self) {
        self.state = NavigationState::Loading;
    }

    pub(crate) fn settle(&mut self) {
        self.state = NavigationState::Idle;
        self.form_data = None;
    }
}

/// A fetcher submission that has started but not yet reached the action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    pub key: String,
    pub action: Location,
    pub form: FormData,
}

pub fn favorite_fetcher_key(contact_id: &str) -> String {
    format!("favorite:{contact_id}")
}
