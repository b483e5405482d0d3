//! Identifier newtypes for shifts, guards, properties and services.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

id_type!(
    /// Unique identifier of a scheduled shift.
    ShiftId
);
id_type!(
    /// Unique identifier of a guard.
    GuardId
);
id_type!(
    /// Unique identifier of a property.
    PropertyId
);
id_type!(
    /// Unique identifier of a service (coverage requirement).
    ServiceId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ShiftId::new(), ShiftId::new());
        assert_ne!(ServiceId::new(), ServiceId::new());
        println!("[PASS] test_ids_are_unique");
    }

    #[test]
    fn test_id_display_round_trip() {
        let id = GuardId::new();
        let parsed: Uuid = id.to_string().parse().unwrap();
        assert_eq!(GuardId::from(parsed), id);
        println!("[PASS] test_id_display_round_trip");
    }
}
