use super::{document, escape};

/// Generic error page for a failed loader or action.
pub fn render(status: u16, message: &str) -> String {
    let details = match status {
        404 => "The requested page could not be found.".to_string(),
        _ => message.to_string(),
    };

    document(
        "Oops!",
        &format!(
            "<main id=\"error-page\">\n<h1>Oops!</h1>\n<p>{status} {}</p>\n<p>{}</p>\n</main>",
            escape(message),
            escape(&details)
        ),
    )
}
