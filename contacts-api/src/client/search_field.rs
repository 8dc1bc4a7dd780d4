/// Search input reconciliation.
///
/// The input shows the query of the last committed load unless the user has
/// typed since. Any committed load (a search the field started, or a
/// back/forward that changed `q` underneath it) brings it back to `Synced`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchField {
    Synced { value: String },
    Editing { draft: String },
}

impl SearchField {
    pub fn synced(q: Option<&str>) -> Self {
        SearchField::Synced {
            value: q.unwrap_or_default().to_string(),
        }
    }

    /// The user typed.
    pub fn edit(&mut self, draft: &str) {
        *self = SearchField::Editing {
            draft: draft.to_string(),
        };
    }

    /// A load committed with query `q`.
    pub fn commit(&mut self, q: Option<&str>) {
        *self = SearchField::synced(q);
    }

    pub fn value(&self) -> &str {
        match self {
            SearchField::Synced { value } => value,
            SearchField::Editing { draft } => draft,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, SearchField::Editing { .. })
    }
}
