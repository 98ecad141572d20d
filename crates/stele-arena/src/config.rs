//! Builder configuration parameters.

/// Configuration for a blob construction session.
///
/// Controls the initial arena reservation. All values are immutable
/// after the builder is created.
#[derive(Clone, Debug)]
pub struct BuilderConfig {
    /// Initial capacity reserved for the arena, in bytes.
    ///
    /// Default: 4096. The arena grows past this as columns are begun
    /// and runs appended; the reservation only avoids early
    /// reallocations for typical config sets.
    pub initial_capacity: usize,
}

impl BuilderConfig {
    /// Default initial arena reservation in bytes.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 4096;

    /// Create a config with the given initial reservation.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
