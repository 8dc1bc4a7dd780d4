//! In-process model of a browser session driving the [`Router`]: history,
//! navigation state, search field reconciliation, and out-of-band fetchers.
//!
//! Views never read this state directly; [`Session::render`] hands them an
//! explicit [`ViewContext`].

pub mod confirm;
pub mod fetcher;
pub mod history;
pub mod search_field;

use actix_web::ResponseError;
use shared_types::{Contact, Location, Navigation, Page};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::error::RouteError;
use crate::routes::{
    contact_path, destroy_contact_path, edit_contact_path, ActionResult, FormData, Router,
};
use crate::views::{self, contact::DELETE_CONFIRMATION, ViewContext};

pub use confirm::{AlwaysConfirm, Confirm};
pub use fetcher::{favorite_fetcher_key, Fetcher, PendingFetch};
pub use history::{History, HistoryMode};
pub use search_field::SearchField;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("navigation to {0} was superseded")]
    Superseded(Location),
}

/// What the session currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Page(Page),
    Error { status: u16, message: String },
}

impl Screen {
    fn from_result(result: &Result<Page, RouteError>) -> Self {
        match result {
            Ok(page) => Screen::Page(page.clone()),
            Err(err) => Screen::from_error(err),
        }
    }

    fn from_error(err: &RouteError) -> Self {
        Screen::Error {
            status: err.status_code().as_u16(),
            message: err.to_string(),
        }
    }

    pub fn page(&self) -> Option<&Page> {
        match self {
            Screen::Page(page) => Some(page),
            Screen::Error { .. } => None,
        }
    }
}

/// A navigation whose loaders have not finished yet. Only the most recently
/// started one may commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    generation: u64,
    pub location: Location,
    pub mode: HistoryMode,
}

pub struct Session {
    router: Router,
    confirm: Box<dyn Confirm>,
    history: History,
    navigation: Navigation,
    generation: u64,
    screen: Screen,
    search_field: SearchField,
    fetchers: HashMap<String, Fetcher>,
}

impl Session {
    /// Loads `location` and makes it the first history entry.
    pub async fn open(router: Router, confirm: impl Confirm + 'static, location: Location) -> Self {
        let result = router.load(&location).await;
        let q = location.search_param("q");

        Self {
            router,
            confirm: Box::new(confirm),
            history: History::new(location),
            navigation: Navigation::idle(),
            generation: 0,
            screen: Screen::from_result(&result),
            search_field: SearchField::synced(q.as_deref()),
            fetchers: HashMap::new(),
        }
    }

    pub fn location(&self) -> &Location {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn page(&self) -> Option<&Page> {
        self.screen.page()
    }

    pub fn search_field(&self) -> &SearchField {
        &self.search_field
    }

    pub fn fetcher(&self, key: &str) -> Option<&Fetcher> {
        self.fetchers.get(key)
    }

    /// Marks a navigation to `to` as in flight. Starting another one
    /// supersedes this.
    pub fn begin_navigation(&mut self, to: Location, mode: HistoryMode) -> PendingNavigation {
        self.generation += 1;
        self.navigation = Navigation::loading(to.clone());
        debug!("Navigation {} to {} started", self.generation, to);

        PendingNavigation {
            generation: self.generation,
            location: to,
            mode,
        }
    }

    /// Commits the loader result of `pending` unless a newer navigation has
    /// started since, in which case the result is dropped.
    pub fn finish_navigation(
        &mut self,
        pending: PendingNavigation,
        result: Result<Page, RouteError>,
    ) -> Result<(), ClientError> {
        if pending.generation != self.generation {
            debug!("Dropping result of superseded navigation to {}", pending.location);
            return Err(ClientError::Superseded(pending.location));
        }

        self.navigation = Navigation::idle();
        self.screen = Screen::from_result(&result);
        self.search_field
            .commit(pending.location.search_param("q").as_deref());
        self.history.commit(pending.location, pending.mode);

        result.map(|_| ()).map_err(ClientError::from)
    }

    pub async fn navigate(&mut self, to: Location, mode: HistoryMode) -> Result<(), ClientError> {
        let pending = self.begin_navigation(to, mode);
        let result = self.router.load(&pending.location).await;
        self.finish_navigation(pending, result)
    }

    pub async fn follow_link(&mut self, href: &str) -> Result<(), ClientError> {
        self.navigate(Location::parse(href), HistoryMode::Push).await
    }

    /// Search input changed: submit the search form to the sidebar index.
    /// Only the first search from an unqueried location adds a history entry.
    pub async fn search(&mut self, input: &str) -> Result<(), ClientError> {
        self.search_field.edit(input);

        let current = self.location();
        let mode = if current.has_search_param("q") {
            HistoryMode::Replace
        } else {
            HistoryMode::Push
        };
        let to = Location::new(
            "/",
            FormData::from_pairs([("q", input)]).to_query_string(),
        );

        self.navigate(to, mode).await
    }

    /// Returns `false` when there is no entry to go to.
    pub async fn go(&mut self, delta: isize) -> Result<bool, ClientError> {
        let Some(target) = self.history.peek(delta).cloned() else {
            return Ok(false);
        };
        self.navigate(target, HistoryMode::Traverse(delta)).await?;
        Ok(true)
    }

    pub async fn back(&mut self) -> Result<bool, ClientError> {
        self.go(-1).await
    }

    pub async fn forward(&mut self) -> Result<bool, ClientError> {
        self.go(1).await
    }

    /// Navigating form submission: `submitting`, then `loading` the redirect
    /// target (or the current location again), then `idle`.
    pub async fn submit(&mut self, action: Location, form: FormData) -> Result<(), ClientError> {
        self.generation += 1;
        self.navigation = Navigation::submitting(action.clone());
        debug!("Submitting to {}", action);

        match self.router.act(&action, &form).await {
            Ok(ActionResult::Redirect(to)) => self.navigate(to, HistoryMode::Push).await,
            Ok(ActionResult::Contact(_)) => {
                let current = self.location().clone();
                self.navigate(current, HistoryMode::Keep).await
            }
            Err(err) => {
                debug!("Submission to {} failed: {}", action, err);
                self.navigation = Navigation::idle();
                self.screen = Screen::from_error(&err);
                Err(ClientError::Route(err))
            }
        }
    }

    /// "New" button.
    pub async fn create_contact(&mut self) -> Result<(), ClientError> {
        self.submit(Location::root(), FormData::new()).await
    }

    pub async fn save_contact(&mut self, id: &str, form: FormData) -> Result<(), ClientError> {
        self.submit(Location::new(edit_contact_path(id), ""), form).await
    }

    /// Edit form's Cancel button.
    pub async fn cancel_edit(&mut self) -> Result<bool, ClientError> {
        self.back().await
    }

    /// Delete button. Declining the confirmation submits nothing and returns
    /// `false`.
    pub async fn delete_contact(&mut self, id: &str) -> Result<bool, ClientError> {
        if !self.confirm.confirm(DELETE_CONFIRMATION) {
            info!("Delete of contact {} cancelled", id);
            return Ok(false);
        }

        self.submit(Location::new(destroy_contact_path(id), ""), FormData::new())
            .await?;
        Ok(true)
    }

    /// Starts an out-of-band submission under `key`. Navigation and history
    /// are left alone.
    pub fn begin_fetch(&mut self, key: impl Into<String>, action: Location, form: FormData) -> PendingFetch {
        let key = key.into();
        self.fetchers
            .entry(key.clone())
            .or_default()
            .submitting(form.clone());

        PendingFetch { key, action, form }
    }

    /// Runs the fetcher's action, then revalidates the current page in place.
    pub async fn complete_fetch(&mut self, pending: PendingFetch) -> Result<(), ClientError> {
        let outcome = self.router.act(&pending.action, &pending.form).await;

        let result = match outcome {
            Ok(ActionResult::Contact(_)) => {
                self.fetcher_mut(&pending.key).revalidating();
                self.revalidate().await
            }
            Ok(ActionResult::Redirect(to)) => {
                self.fetcher_mut(&pending.key).settle();
                return self.navigate(to, HistoryMode::Push).await;
            }
            Err(err) => Err(ClientError::Route(err)),
        };

        self.fetcher_mut(&pending.key).settle();
        result
    }

    /// Starts a favorite toggle for a contact currently on screen. The value
    /// sent is the opposite of what is displayed.
    pub fn begin_favorite_toggle(&mut self, id: &str) -> Result<PendingFetch, ClientError> {
        let contact = self
            .displayed_contact(id)
            .ok_or(ClientError::Route(RouteError::NotFound))?;
        let next = !self.displayed_favorite(contact);

        let form = FormData::from_pairs([("favorite", if next { "true" } else { "false" })]);
        Ok(self.begin_fetch(
            favorite_fetcher_key(id),
            Location::new(contact_path(id), ""),
            form,
        ))
    }

    pub async fn toggle_favorite(&mut self, id: &str) -> Result<(), ClientError> {
        let pending = self.begin_favorite_toggle(id)?;
        self.complete_fetch(pending).await
    }

    /// Favorite state as shown: the in-flight toggle's value if there is one,
    /// otherwise the loaded record's.
    pub fn displayed_favorite(&self, contact: &Contact) -> bool {
        self.pending_favorite(&contact.id).unwrap_or(contact.favorite)
    }

    pub fn render(&self) -> String {
        match &self.screen {
            Screen::Page(page) => {
                let ctx = ViewContext {
                    location: self.location().clone(),
                    navigation: self.navigation.clone(),
                    search_value: self.search_field.value().to_string(),
                    pending_favorite: page
                        .contact()
                        .and_then(|contact| self.pending_favorite(&contact.id)),
                };
                views::render_document(page, &ctx)
            }
            Screen::Error { status, message } => views::error::render(*status, message),
        }
    }

    fn pending_favorite(&self, id: &str) -> Option<bool> {
        self.fetchers
            .get(&favorite_fetcher_key(id))
            .and_then(Fetcher::form_data)
            .and_then(|form| form.get("favorite"))
            .map(|value| value == "true")
    }

    fn displayed_contact(&self, id: &str) -> Option<&Contact> {
        let page = self.page()?;
        page.contact()
            .filter(|contact| contact.id == id)
            .or_else(|| {
                page.sidebar
                    .as_ref()?
                    .contacts
                    .iter()
                    .find(|contact| contact.id == id)
            })
    }

    fn fetcher_mut(&mut self, key: &str) -> &mut Fetcher {
        self.fetchers.entry(key.to_string()).or_default()
    }

    /// Reloads the current location without touching navigation, history, or
    /// the search field.
    async fn revalidate(&mut self) -> Result<(), ClientError> {
        let location = self.location().clone();
        let result = self.router.load(&location).await;
        self.screen = Screen::from_result(&result);
        result.map(|_| ()).map_err(ClientError::from)
    }
}
