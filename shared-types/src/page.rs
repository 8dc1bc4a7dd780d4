use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Contact;

/// Sidebar loader payload: the filtered list and the query it was filtered by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SidebarData {
    pub contacts: Vec<Contact>,
    pub q: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactData {
    pub contact: Contact,
}

/// What renders inside the detail pane (or, for `About`, the whole page).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "route", content = "data", rename_all = "snake_case")]
#[ts(export)]
pub enum Outlet {
    Index,
    Contact(ContactData),
    Edit(ContactData),
    About,
}

/// All loader data for one location. `sidebar` is `None` for pages outside the
/// sidebar layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Page {
    pub sidebar: Option<SidebarData>,
    pub outlet: Outlet,
}

impl Page {
    /// The contact shown in the detail pane, if any.
    pub fn contact(&self) -> Option<&Contact> {
        match &self.outlet {
            Outlet::Contact(data) | Outlet::Edit(data) => Some(&data.contact),
            Outlet::Index | Outlet::About => None,
        }
    }
}
