use shared_types::{ContactData, ContactMutation};
use tracing::{info, warn};

use crate::error::RouteError;
use crate::routes::{ActionResult, FormData};
use crate::store::ContactStore;

/// Contact detail loader. A missing record is a 404, handled by the error page.
pub async fn load(store: &dyn ContactStore, id: &str) -> Result<ContactData, RouteError> {
    match store.get(id).await? {
        Some(contact) => Ok(ContactData { contact }),
        None => {
            warn!("Contact {} not found", id);
            Err(RouteError::NotFound)
        }
    }
}

/// Favorite toggle. The form carries the state to set, `"true"` or `"false"`;
/// anything other than `"true"` unsets it.
pub async fn favorite(
    store: &dyn ContactStore,
    id: &str,
    form: &FormData,
) -> Result<ActionResult, RouteError> {
    let favorite = form.get("favorite") == Some("true");
    let contact = store.update(id, ContactMutation::favorite(favorite)).await?;

    info!("Contact {} favorite set to {}", id, favorite);

    Ok(ActionResult::Contact(contact))
}
