/// Asks the user to approve a destructive action.
pub trait Confirm: Send {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool + Send,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Approves everything. For non-interactive sessions.
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}
