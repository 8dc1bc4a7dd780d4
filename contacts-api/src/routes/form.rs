use serde::Serialize;

/// Ordered `application/x-www-form-urlencoded` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormData(Vec<(String, String)>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(body: &[u8]) -> Self {
        Self(
            url::form_urlencoded::parse(body)
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        )
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes the fields the way a GET form submission does.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_get() {
        let form = FormData::parse(b"first=Ada&last=&notes=%20hi%20there%20");
        assert_eq!(form.get("first"), Some("Ada"));
        assert_eq!(form.get("last"), Some(""));
        assert_eq!(form.get("notes"), Some(" hi there "));
        assert_eq!(form.get("missing"), None);
    }

    #[test]
    fn test_query_string_encodes_spaces() {
        let form = FormData::from_pairs([("q", "al ice")]);
        assert_eq!(form.to_query_string(), "q=al+ice");
        assert_eq!(FormData::from_pairs([("q", "")]).to_query_string(), "q=");
    }
}
