use shared_types::Location;
use tracing::{info, warn};

use crate::error::RouteError;
use crate::routes::ActionResult;
use crate::store::ContactStore;

pub async fn destroy(store: &dyn ContactStore, id: &str) -> Result<ActionResult, RouteError> {
    if !store.delete(id).await? {
        warn!("Delete requested for unknown contact {}", id);
        return Err(RouteError::NotFound);
    }

    info!("Contact {} deleted", id);

    Ok(ActionResult::Redirect(Location::root()))
}
