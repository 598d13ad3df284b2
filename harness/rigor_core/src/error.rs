//! Registration errors.

use crate::location::Location;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("test `{name}` registered at {duplicate} is already registered at {existing}")]
    DuplicateTest {
        name: String,
        existing: Location,
        duplicate: Location,
    },
    #[error("test registered at {location} has an empty name")]
    EmptyName { location: Location },
}
