//! Registry configuration.

/// What `register` does when a name is already taken.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Keep the first test and return [`RegistryError::DuplicateTest`](crate::RegistryError::DuplicateTest).
    #[default]
    Reject,
    /// Swap in the new body, keeping the original position in run order.
    Replace,
}

/// Configuration for a [`TestsRegistry`](crate::TestsRegistry).
#[derive(Copy, Clone, Debug)]
pub struct RegistryConfig {
    /// Duplicate-name handling.
    pub duplicates: DuplicatePolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            duplicates: DuplicatePolicy::Reject,
        }
    }
}

impl RegistryConfig {
    #[must_use]
    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}
