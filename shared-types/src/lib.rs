use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod contact;
pub mod navigation;
pub mod page;

pub use contact::{Contact, ContactMutation, NO_NAME};
pub use navigation::{Location, Navigation, NavigationState};
pub use page::{ContactData, Outlet, Page, SidebarData};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}
