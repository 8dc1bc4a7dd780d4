//! Route table. Every path the app answers is listed here once, both for the
//! actix service config and for in-process dispatch by [`Router`].

pub mod form;

use actix_web::web;
use shared_types::{Contact, Location, Outlet, Page};
use std::sync::Arc;
use tracing::debug;

use crate::error::RouteError;
use crate::handlers;
use crate::store::ContactStore;

pub use form::FormData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    /// `/`, the sidebar layout with no contact selected.
    Index,
    /// `/contacts/{id}`
    Contact(String),
    /// `/contacts/{id}/edit`
    EditContact(String),
    /// `/contacts/{id}/destroy`, POST only.
    DestroyContact(String),
    /// `/about`, rendered outside the sidebar layout.
    About,
}

impl RouteMatch {
    pub fn recognize(pathname: &str) -> Option<Self> {
        let segments: Vec<&str> = pathname
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Some(RouteMatch::Index),
            ["about"] => Some(RouteMatch::About),
            ["contacts", id] => Some(RouteMatch::Contact(id.to_string())),
            ["contacts", id, "edit"] => Some(RouteMatch::EditContact(id.to_string())),
            ["contacts", id, "destroy"] => Some(RouteMatch::DestroyContact(id.to_string())),
            _ => None,
        }
    }

    pub fn in_sidebar_layout(&self) -> bool {
        !matches!(self, RouteMatch::About)
    }
}

pub fn contact_path(id: &str) -> String {
    format!("/contacts/{id}")
}

pub fn edit_contact_path(id: &str) -> String {
    format!("/contacts/{id}/edit")
}

pub fn destroy_contact_path(id: &str) -> String {
    format!("/contacts/{id}/destroy")
}

/// What a successful action asks the caller to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Navigate to the location (303 over HTTP).
    Redirect(Location),
    /// Stay put; the action returned fresh data for the contact.
    Contact(Contact),
}

/// Runs loaders and actions for a location against a contact store.
#[derive(Clone)]
pub struct Router {
    store: Arc<dyn ContactStore>,
}

impl Router {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn ContactStore {
        self.store.as_ref()
    }

    /// Runs every loader that contributes to `location`: the sidebar layout
    /// (when the route sits inside it) plus the matched child route.
    pub async fn load(&self, location: &Location) -> Result<Page, RouteError> {
        let route = RouteMatch::recognize(&location.pathname).ok_or(RouteError::NotFound)?;
        debug!("Loading {} as {:?}", location, route);

        let outlet = match &route {
            RouteMatch::Index => Outlet::Index,
            RouteMatch::About => Outlet::About,
            RouteMatch::Contact(id) => {
                Outlet::Contact(handlers::contact::load(self.store(), id).await?)
            }
            RouteMatch::EditContact(id) => {
                Outlet::Edit(handlers::edit::load(self.store(), id).await?)
            }
            RouteMatch::DestroyContact(_) => return Err(RouteError::MethodNotAllowed),
        };

        let sidebar = if route.in_sidebar_layout() {
            Some(handlers::sidebar::load(self.store(), location.search_param("q")).await?)
        } else {
            None
        };

        Ok(Page { sidebar, outlet })
    }

    /// Dispatches a POST submission to the matched route's action.
    pub async fn act(&self, location: &Location, form: &FormData) -> Result<ActionResult, RouteError> {
        let route = RouteMatch::recognize(&location.pathname).ok_or(RouteError::NotFound)?;
        debug!("Submitting to {} as {:?}", location, route);

        match route {
            RouteMatch::Index => handlers::sidebar::create(self.store()).await,
            RouteMatch::Contact(id) => handlers::contact::favorite(self.store(), &id, form).await,
            RouteMatch::EditContact(id) => handlers::edit::save(self.store(), &id, form).await,
            RouteMatch::DestroyContact(id) => handlers::destroy::destroy(self.store(), &id).await,
            RouteMatch::About => Err(RouteError::MethodNotAllowed),
        }
    }
}

/// HTTP binding of the route table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    use handlers::http::{method_not_allowed, page, submit};

    cfg.service(
        web::resource("/")
            .route(web::get().to(page))
            .route(web::post().to(submit))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/about")
            .route(web::get().to(page))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/contacts/{id}")
            .route(web::get().to(page))
            .route(web::post().to(submit))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/contacts/{id}/edit")
            .route(web::get().to(page))
            .route(web::post().to(submit))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/contacts/{id}/destroy")
            .route(web::post().to(submit))
            .default_service(web::to(method_not_allowed)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryContactStore;

    fn router() -> Router {
        let alice = Contact {
            first: Some("Alice".to_string()),
            ..Contact::blank("1", 0)
        };
        let bob = Contact {
            first: Some("Bob".to_string()),
            ..Contact::blank("2", 0)
        };
        Router::new(Arc::new(MemoryContactStore::with_contacts(vec![alice, bob])))
    }

    #[test]
    fn test_recognize() {
        assert_eq!(RouteMatch::recognize("/"), Some(RouteMatch::Index));
        assert_eq!(RouteMatch::recognize(""), Some(RouteMatch::Index));
        assert_eq!(RouteMatch::recognize("/about"), Some(RouteMatch::About));
        assert_eq!(
            RouteMatch::recognize("/contacts/abc"),
            Some(RouteMatch::Contact("abc".to_string()))
        );
        assert_eq!(
            RouteMatch::recognize("/contacts/abc/edit/"),
            Some(RouteMatch::EditContact("abc".to_string()))
        );
        assert_eq!(
            RouteMatch::recognize("/contacts/abc/destroy"),
            Some(RouteMatch::DestroyContact("abc".to_string()))
        );
        assert_eq!(RouteMatch::recognize("/contacts"), None);
        assert_eq!(RouteMatch::recognize("/nope/1"), None);
    }

    #[tokio::test]
    async fn test_load_contact_page_includes_sidebar() {
        let page = router().load(&Location::parse("/contacts/1?q=bo")).await.unwrap();

        let sidebar = page.sidebar.as_ref().unwrap();
        assert_eq!(sidebar.q.as_deref(), Some("bo"));
        assert_eq!(sidebar.contacts.len(), 1);
        assert_eq!(page.contact().map(|c| c.id.as_str()), Some("1"));
    }

    #[tokio::test]
    async fn test_about_has_no_sidebar() {
        let page = router().load(&Location::parse("/about")).await.unwrap();
        assert_eq!(page.sidebar, None);
        assert_eq!(page.outlet, Outlet::About);
    }

    #[tokio::test]
    async fn test_load_errors() {
        let router = router();
        assert!(matches!(
            router.load(&Location::parse("/contacts/9")).await,
            Err(RouteError::NotFound)
        ));
        assert!(matches!(
            router.load(&Location::parse("/unknown")).await,
            Err(RouteError::NotFound)
        ));
        assert!(matches!(
            router.load(&Location::parse("/contacts/1/destroy")).await,
            Err(RouteError::MethodNotAllowed)
        ));
        assert!(matches!(
            router.act(&Location::parse("/about"), &FormData::new()).await,
            Err(RouteError::MethodNotAllowed)
        ));
    }
}
