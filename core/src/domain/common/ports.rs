/// Source of randomness for picks that should vary between calls, such as
/// which photo of a dish to show.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. Callers never pass zero.
    fn pick_index(&self, len: usize) -> usize;
}
