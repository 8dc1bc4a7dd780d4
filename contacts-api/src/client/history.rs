use shared_types::Location;

/// How a committed navigation affects the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
    /// Revalidation of the current entry.
    Keep,
    /// Back/forward by `n` entries.
    Traverse(isize),
}

/// Browser-style history stack with a cursor.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    /// Drops any forward entries, then appends.
    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index = self.entries.len() - 1;
    }

    pub fn replace(&mut self, location: Location) {
        self.entries[self.index] = location;
    }

    pub fn commit(&mut self, location: Location, mode: HistoryMode) {
        match mode {
            HistoryMode::Push => self.push(location),
            HistoryMode::Replace => self.replace(location),
            HistoryMode::Keep => {}
            HistoryMode::Traverse(delta) => {
                self.go(delta);
            }
        }
    }

    /// Location `delta` entries away, without moving the cursor.
    pub fn peek(&self, delta: isize) -> Option<&Location> {
        self.index
            .checked_add_signed(delta)
            .and_then(|target| self.entries.get(target))
    }

    pub fn peek_back(&self) -> Option<&Location> {
        self.peek(-1)
    }

    pub fn peek_forward(&self) -> Option<&Location> {
        self.peek(1)
    }

    pub fn go(&mut self, delta: isize) -> Option<&Location> {
        let target = self.index.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.index = target;
        self.entries.get(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(href: &str) -> Location {
        Location::parse(href)
    }

    #[test]
    fn test_push_and_replace() {
        let mut history = History::new(loc("/"));
        history.push(loc("/?q=a"));
        history.replace(loc("/?q=al"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), &loc("/?q=al"));
        assert_eq!(history.peek_back(), Some(&loc("/")));
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = History::new(loc("/"));
        history.push(loc("/contacts/1"));
        history.push(loc("/contacts/2"));

        assert_eq!(history.go(-2), Some(&loc("/")));
        assert_eq!(history.peek_forward(), Some(&loc("/contacts/1")));

        history.push(loc("/about"));
        assert_eq!(history.entries(), &[loc("/"), loc("/about")]);
        assert_eq!(history.peek_forward(), None);
    }

    #[test]
    fn test_go_out_of_range() {
        let mut history = History::new(loc("/"));
        assert_eq!(history.go(-1), None);
        assert_eq!(history.go(1), None);
        assert_eq!(history.index(), 0);
    }

    #[test]
    fn test_commit_modes() {
        let mut history = History::new(loc("/"));
        history.commit(loc("/about"), HistoryMode::Keep);
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), &loc("/"));

        history.commit(loc("/contacts/1"), HistoryMode::Push);
        history.commit(loc("/"), HistoryMode::Traverse(-1));
        assert_eq!(history.len(), 2);
        assert_eq!(history.index(), 0);
    }
}
