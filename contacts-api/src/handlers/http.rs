use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpRequest, HttpResponse};
use shared_types::{ContactData, Location};

use crate::error::RouteError;
use crate::routes::{ActionResult, FormData, Router};
use crate::views::{self, ViewContext};

/// Query parameter that asks for the loader/action payload as JSON.
pub const DATA_PARAM: &str = "_data";

/// GET on any page route.
pub async fn page(router: web::Data<Router>, req: HttpRequest) -> HttpResponse {
    let location = request_location(&req);

    match router.load(&location).await {
        Ok(page) if wants_data(&req) => HttpResponse::Ok().json(page),
        Ok(page) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(views::render_document(&page, &ViewContext::server(location))),
        Err(err) => error_reply(&req, err),
    }
}

/// POST on any route with an action. The body is read as form fields whatever
/// the content type, since the New and Delete forms send no fields at all.
pub async fn submit(router: web::Data<Router>, req: HttpRequest, body: web::Bytes) -> HttpResponse {
    let location = request_location(&req);
    let form = FormData::parse(&body);

    match router.act(&location, &form).await {
        Ok(ActionResult::Redirect(to)) => see_other(&to.href()),
        Ok(ActionResult::Contact(contact)) if wants_data(&req) => {
            HttpResponse::Ok().json(ContactData { contact })
        }
        // A plain form post without script support: reload the page it came from.
        Ok(ActionResult::Contact(_)) => see_other(&location.href()),
        Err(err) => error_reply(&req, err),
    }
}

/// Any method a route has no handler for.
pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    error_reply(&req, RouteError::MethodNotAllowed)
}

fn error_reply(req: &HttpRequest, err: RouteError) -> HttpResponse {
    if wants_data(req) {
        err.json_response()
    } else {
        actix_web::ResponseError::error_response(&err)
    }
}

fn see_other(to: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, to))
        .finish()
}

/// The request's location without the `_data` marker.
pub fn request_location(req: &HttpRequest) -> Location {
    let search = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(
            url::form_urlencoded::parse(req.query_string().as_bytes())
                .filter(|(key, _)| key != DATA_PARAM),
        )
        .finish();
    Location::new(req.path(), search)
}

pub fn wants_data(req: &HttpRequest) -> bool {
    let data_param = url::form_urlencoded::parse(req.query_string().as_bytes())
        .any(|(key, _)| key == DATA_PARAM);
    let accepts_json = req
        .headers()
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/json"));
    data_param || accepts_json
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use crate::store::{ContactStore, MemoryContactStore};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use shared_types::{Contact, ErrorResponse, Page};
    use std::sync::Arc;

    fn seeded_store() -> MemoryContactStore {
        MemoryContactStore::with_contacts(vec![
            Contact {
                first: Some("Alice".to_string()),
                ..Contact::blank("1", 0)
            },
            Contact {
                first: Some("Bob".to_string()),
                ..Contact::blank("2", 0)
            },
        ])
    }

    macro_rules! app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Router::new(Arc::new($store))))
                    .configure(routes::configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_index_renders_sidebar() {
        let app = app!(seeded_store());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Alice"));
        assert!(body.contains("Bob"));
        assert!(body.contains(r#"<form id="search-form" role="search" action="/">"#));
    }

    #[actix_web::test]
    async fn test_missing_contact_is_404() {
        let app = app!(seeded_store());

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/contacts/404").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/contacts/404?_data").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Not Found");
    }

    #[actix_web::test]
    async fn test_search_data_request() {
        let app = app!(seeded_store());

        let req = test::TestRequest::get().uri("/?q=ali&_data").to_request();
        let page: Page = test::call_and_read_body_json(&app, req).await;

        let sidebar = page.sidebar.unwrap();
        assert_eq!(sidebar.q.as_deref(), Some("ali"));
        assert_eq!(sidebar.contacts.len(), 1);
        assert_eq!(sidebar.contacts[0].id, "1");
    }

    #[actix_web::test]
    async fn test_favorite_post_updates_and_redirects_back() {
        let store = seeded_store();
        let app = app!(store.clone());

        let req = test::TestRequest::post()
            .uri("/contacts/1")
            .set_form([("favorite", "true")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/contacts/1");
        assert!(store.get("1").await.unwrap().unwrap().favorite);
    }

    #[actix_web::test]
    async fn test_favorite_data_post_returns_contact() {
        let app = app!(seeded_store());

        let req = test::TestRequest::post()
            .uri("/contacts/2?_data")
            .set_form([("favorite", "true")])
            .to_request();
        let data: ContactData = test::call_and_read_body_json(&app, req).await;

        assert_eq!(data.contact.id, "2");
        assert!(data.contact.favorite);
    }

    #[actix_web::test]
    async fn test_new_contact_redirects_to_edit() {
        let store = MemoryContactStore::new();
        let app = app!(store.clone());

        let resp = test::call_service(&app, test::TestRequest::post().uri("/").to_request()).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let created = store.list(None).await.unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
            format!("/contacts/{}/edit", created[0].id)
        );
    }

    #[actix_web::test]
    async fn test_destroy_is_post_only() {
        let store = seeded_store();
        let app = app!(store.clone());

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/contacts/1/destroy").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(store.get("1").await.unwrap().is_some());

        let resp = test::call_service(
            &app,
            test::TestRequest::post().uri("/contacts/1/destroy").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
        assert!(store.get("1").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_edit_post_saves_and_redirects() {
        let store = seeded_store();
        let app = app!(store.clone());

        let req = test::TestRequest::post()
            .uri("/contacts/2/edit")
            .set_form([("first", "Robert"), ("last", "Tables")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/contacts/2");
        let bob = store.get("2").await.unwrap().unwrap();
        assert_eq!(bob.display_name(), "Robert Tables");
    }
}
