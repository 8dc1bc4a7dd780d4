use shared_types::{Location, SidebarData};
use tracing::info;

use crate::error::RouteError;
use crate::routes::{edit_contact_path, ActionResult};
use crate::store::ContactStore;

/// Sidebar loader. `q` is echoed back untouched so the search field can be
/// resynchronized with it.
pub async fn load(store: &dyn ContactStore, q: Option<String>) -> Result<SidebarData, RouteError> {
    let contacts = store.list(q.as_deref()).await?;
    Ok(SidebarData { contacts, q })
}

/// "New" button: create a blank contact and go straight to its edit form.
pub async fn create(store: &dyn ContactStore) -> Result<ActionResult, RouteError> {
    let contact = store.create().await?;
    info!("New contact {} created from sidebar", contact.id);
    Ok(ActionResult::Redirect(Location::new(
        edit_contact_path(&contact.id),
        "",
    )))
}
