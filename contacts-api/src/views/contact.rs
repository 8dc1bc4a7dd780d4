use shared_types::Contact;

use super::{escape, name_markup};
use crate::routes::{contact_path, destroy_contact_path, edit_contact_path};

pub const DELETE_CONFIRMATION: &str = "Please confirm you want to delete this record.";

/// Contact detail pane. `pending_favorite` overrides the stored favorite flag
/// while a toggle is in flight.
pub fn render(contact: &Contact, pending_favorite: Option<bool>) -> String {
    let avatar = contact.avatar.as_deref().unwrap_or_default();
    let alt = format!(
        "{} {} avatar",
        contact.first.as_deref().unwrap_or_default(),
        contact.last.as_deref().unwrap_or_default()
    );

    let twitter = match (&contact.twitter, contact.twitter_url()) {
        (Some(handle), Some(url)) => format!(
            "\n<p><a href=\"{}\">{}</a></p>",
            escape(&url),
            escape(handle.trim())
        ),
        _ => String::new(),
    };

    let notes = match contact.notes.as_deref().map(str::trim) {
        Some(notes) if !notes.is_empty() => format!("\n<p>{}</p>", escape(notes)),
        _ => String::new(),
    };

    format!(
        r#"<div id="contact">
<div>
<img alt="{alt}" src="{avatar}" />
</div>
<div>
<h1>{name}{favorite}</h1>{twitter}{notes}
<div>
<form action="{edit}">
<button type="submit">Edit</button>
</form>
<form action="{destroy}" method="post" data-confirm="{confirm}">
<button type="submit">Delete</button>
</form>
</div>
</div>
</div>"#,
        alt = escape(alt.trim()),
        avatar = escape(avatar),
        name = name_markup(contact),
        favorite = render_favorite(contact, pending_favorite),
        edit = escape(&edit_contact_path(&contact.id)),
        destroy = escape(&destroy_contact_path(&contact.id)),
        confirm = escape(DELETE_CONFIRMATION),
    )
}

/// The toggle shows the current state and submits the opposite one.
pub fn render_favorite(contact: &Contact, pending_favorite: Option<bool>) -> String {
    let favorite = pending_favorite.unwrap_or(contact.favorite);
    let (label, glyph, next) = if favorite {
        ("Remove from favorites", "★", "false")
    } else {
        ("Add to favorites", "☆", "true")
    };

    format!(
        r#"<form method="post" action="{action}"><button aria-label="{label}" name="favorite" value="{next}">{glyph}</button></form>"#,
        action = escape(&contact_path(&contact.id)),
    )
}
