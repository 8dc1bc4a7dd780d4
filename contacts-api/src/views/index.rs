pub fn render() -> String {
    r#"<p id="index-page">
This is a demo contact manager.
<br />
Pick a contact on the left, or press <b>New</b> to add one.
</p>"#
        .to_string()
}
