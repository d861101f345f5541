/// Source of fallback indices, injected so callers can pin outcomes
pub trait RandomSource: Send {
    /// Return an index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}
