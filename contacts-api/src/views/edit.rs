use shared_types::Contact;

use super::escape;
use crate::routes::edit_contact_path;

pub fn render(contact: &Contact) -> String {
    let value = |field: &Option<String>| escape(field.as_deref().unwrap_or_default());

    format!(
        r#"<form id="contact-form" method="post" action="{action}">
<p>
<span>Name</span>
<input aria-label="First name" name="first" placeholder="First" type="text" value="{first}" />
<input aria-label="Last name" name="last" placeholder="Last" type="text" value="{last}" />
</p>
<label>
<span>Twitter</span>
<input name="twitter" placeholder="@jack" type="text" value="{twitter}" />
</label>
<label>
<span>Avatar URL</span>
<input aria-label="Avatar URL" name="avatar" placeholder="https://example.com/avatar.jpg" type="text" value="{avatar}" />
</label>
<label>
<span>Notes</span>
<textarea name="notes" rows="6">{notes}</textarea>
</label>
<p>
<button type="submit">Save</button>
<button type="button" data-action="back">Cancel</button>
</p>
</form>"#,
        action = escape(&edit_contact_path(&contact.id)),
        first = value(&contact.first),
        last = value(&contact.last),
        twitter = value(&contact.twitter),
        avatar = value(&contact.avatar),
        notes = value(&contact.notes),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefills_fields() {
        let contact = Contact {
            first: Some("Ada".to_string()),
            notes: Some("a < b".to_string()),
            ..Contact::blank("7", 0)
        };

        let html = render(&contact);

        assert!(html.contains(r#"action="/contacts/7/edit""#));
        assert!(html.contains(r#"name="first" placeholder="First" type="text" value="Ada""#));
        assert!(html.contains(r#"name="last" placeholder="Last" type="text" value="""#));
        assert!(html.contains("<textarea name=\"notes\" rows=\"6\">a &lt; b</textarea>"));
    }
}
