pub fn render() -> String {
    r#"<div id="about">
<a href="/">← Go to demo</a>
<h1>About Contacts</h1>
<div>
<p>
A small contact manager: search the sidebar, open a contact, edit it,
mark favorites, delete what you no longer need.
</p>
<p>
Pages are rendered on the server from the same loaders that answer
<code>?_data</code> requests with JSON.
</p>
</div>
</div>"#
        .to_string()
}
