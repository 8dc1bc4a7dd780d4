use shared_types::{ContactData, ContactMutation, Location};
use tracing::info;

use crate::error::RouteError;
use crate::routes::{contact_path, ActionResult, FormData};
use crate::store::ContactStore;

pub async fn load(store: &dyn ContactStore, id: &str) -> Result<ContactData, RouteError> {
    super::contact::load(store, id).await
}

/// Edit form submission. Fields the form sent are written, a blank one clears
/// the field. Fields it did not send are left alone.
pub async fn save(
    store: &dyn ContactStore,
    id: &str,
    form: &FormData,
) -> Result<ActionResult, RouteError> {
    let mutation = mutation_from_form(form);
    store.update(id, mutation).await?;

    info!("Contact {} saved from edit form", id);

    Ok(ActionResult::Redirect(Location::new(contact_path(id), "")))
}

fn mutation_from_form(form: &FormData) -> ContactMutation {
    let text = |key: &str| form.get(key).map(|v| v.trim().to_string());
    ContactMutation {
        first: text("first"),
        last: text("last"),
        avatar: text("avatar"),
        twitter: text("twitter"),
        notes: text("notes"),
        favorite: None,
    }
}
