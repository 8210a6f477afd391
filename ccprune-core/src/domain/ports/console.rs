use std::io;

/// Yes/no gate in front of the deletion phase.
pub trait Confirmer {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}
