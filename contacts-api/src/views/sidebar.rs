use shared_types::{Contact, SidebarData};

use super::{escape, name_markup, ViewContext};
use crate::routes::contact_path;

/// The sidebar layout: search, New button, contact list, and the detail pane
/// wrapping `outlet`.
pub fn render_layout(data: &SidebarData, ctx: &ViewContext, outlet: &str) -> String {
    let searching = ctx.navigation.is_searching();
    let detail_class = if ctx.navigation.dims_detail() {
        r#" class="loading""#
    } else {
        ""
    };

    format!(
        r#"<div id="sidebar">
<h1><a href="/about">Contacts</a></h1>
<div>
<form id="search-form" role="search" action="/">
<input aria-label="Search contacts"{input_class} id="q" name="q" placeholder="Search" type="search" value="{value}" />
<div aria-hidden="true" id="search-spinner"{spinner_hidden}></div>
</form>
<form method="post" action="/">
<button type="submit">New</button>
</form>
</div>
<nav>
{list}
</nav>
</div>
<div id="detail"{detail_class}>
{outlet}
</div>"#,
        input_class = if searching { r#" class="loading""# } else { "" },
        value = escape(&ctx.search_value),
        spinner_hidden = if searching { "" } else { " hidden" },
        list = render_list(&data.contacts, ctx),
    )
}

fn render_list(contacts: &[Contact], ctx: &ViewContext) -> String {
    if contacts.is_empty() {
        return "<p><i>No contacts</i></p>".to_string();
    }

    let items: Vec<String> = contacts
        .iter()
        .map(|contact| {
            let href = contact_path(&contact.id);
            let class = match link_class(&href, ctx) {
                Some(class) => format!(r#" class="{class}""#),
                None => String::new(),
            };
            let star = if contact.favorite { "<span>★</span>" } else { "" };
            format!(
                r#"<li><a{class} href="{href}">{name}{star}</a></li>"#,
                href = escape(&href),
                name = name_markup(contact),
            )
        })
        .collect();

    format!("<ul>\n{}\n</ul>", items.join("\n"))
}

/// `active` when the committed location is the link or below it, `pending`
/// when a navigation is heading there.
pub fn link_class(href: &str, ctx: &ViewContext) -> Option<&'static str> {
    let matches = |pathname: &str| {
        pathname == href
            || pathname
                .strip_prefix(href)
                .is_some_and(|rest| rest.starts_with('/'))
    };

    if matches(&ctx.location.pathname) {
        Some("active")
    } else if ctx
        .navigation
        .location
        .as_ref()
        .is_some_and(|pending| matches(&pending.pathname))
    {
        Some("pending")
    } else {
        None
    }
}
