use phake_logging::phake_debug;

/// Number of techniques remembered before the history is cleared.
pub const EXCLUSION_CAPACITY: usize = 16;

/// Fill-then-reset history of technique ids already shown to the user.
///
/// Ids are kept in insertion order and duplicates are allowed. This is not a
/// sliding window: once the history reaches [`EXCLUSION_CAPACITY`] it is
/// emptied in one go by [`ExclusionTracker::maybe_reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExclusionTracker {
    techniques: Vec<String>,
}

impl ExclusionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a technique id. Must be followed by [`Self::maybe_reset`].
    pub fn record(&mut self, technique: impl Into<String>) {
        self.techniques.push(technique.into());
    }

    /// Clears the history if it has reached capacity. Returns whether it did.
    pub fn maybe_reset(&mut self) -> bool {
        if self.techniques.len() >= EXCLUSION_CAPACITY {
            phake_debug!(
                "Exclusion history reached {} entries; clearing",
                self.techniques.len()
            );
            self.techniques.clear();
            true
        } else {
            false
        }
    }

    pub fn snapshot(&self) -> &[String] {
        &self.techniques
    }

    pub fn len(&self) -> usize {
        self.techniques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty()
    }
}
