//! Server-rendered HTML. Views are plain functions of loader data plus a
//! [`ViewContext`] describing the transition state; none of them read global
//! state.

pub mod about;
pub mod contact;
pub mod edit;
pub mod error;
pub mod index;
pub mod sidebar;

use shared_types::{Location, Navigation, Outlet, Page};

pub struct ViewContext {
    /// The committed location being rendered.
    pub location: Location,
    pub navigation: Navigation,
    /// What the search input currently displays.
    pub search_value: String,
    /// Favorite value of an in-flight toggle for the displayed contact.
    pub pending_favorite: Option<bool>,
}

impl ViewContext {
    /// Context for a full server render: nothing is in flight.
    pub fn server(location: Location) -> Self {
        let search_value = location.search_param("q").unwrap_or_default();
        Self {
            location,
            navigation: Navigation::idle(),
            search_value,
            pending_favorite: None,
        }
    }
}

pub fn render_document(page: &Page, ctx: &ViewContext) -> String {
    document("Contacts", &render_page(page, ctx))
}

/// Body markup for `page`: the sidebar layout around the outlet, or the outlet
/// alone for pages outside the layout.
pub fn render_page(page: &Page, ctx: &ViewContext) -> String {
    let outlet = match &page.outlet {
        Outlet::Index => index::render(),
        Outlet::About => about::render(),
        Outlet::Contact(data) => contact::render(&data.contact, ctx.pending_favorite),
        Outlet::Edit(data) => edit::render(&data.contact),
    };

    match &page.sidebar {
        Some(data) => sidebar::render_layout(data, ctx, &outlet),
        None => outlet,
    }
}

pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `Alice Liddell`, or the italic placeholder when both names are blank.
pub(crate) fn name_markup(contact: &shared_types::Contact) -> String {
    match contact.full_name() {
        Some(name) => escape(&name),
        None => format!("<i>{}</i>", shared_types::NO_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Contact, ContactData, SidebarData};

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_about_page_has_no_sidebar() {
        let page = Page {
            sidebar: None,
            outlet: Outlet::About,
        };
        let html = render_page(&page, &ViewContext::server(Location::parse("/about")));
        assert!(!html.contains(r#"id="sidebar""#));
        assert!(html.contains(r#"id="about""#));
    }

    #[test]
    fn test_contact_page_inside_layout() {
        let contact = Contact {
            first: Some("Alice".to_string()),
            ..Contact::blank("1", 0)
        };
        let page = Page {
            sidebar: Some(SidebarData {
                contacts: vec![contact.clone()],
                q: None,
            }),
            outlet: Outlet::Contact(ContactData { contact }),
        };

        let html = render_document(&page, &ViewContext::server(Location::parse("/contacts/1")));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="sidebar""#));
        assert!(html.contains(r#"<div id="detail">"#));
        assert!(html.contains(r#"<div id="contact">"#));
    }
}
