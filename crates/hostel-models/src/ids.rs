//! Strongly-typed ID newtypes for domain entities.
//!
//! The backend identifies every record by a numeric id. Wrapping each one
//! prevents passing a `RoomId` where a `StudentId` is expected, which matters
//! most for `allocate(student_id, room_id)`.
//!
//! # Example
//!
//! ```ignore
//! use hostel_models::ids::{RoomId, StudentId};
//!
//! fn allocate(student: StudentId, room: RoomId) { /* ... */ }
//!
//! let student: StudentId = "12".parse().unwrap();
//! allocate(student, RoomId::new(3));
//! // allocate(RoomId::new(3), student); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define a strongly-typed ID newtype.
///
/// Generates a transparent wrapper around `i64` that serializes as a bare
/// JSON number and parses from path segments and prompts.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for Student entities.
    StudentId
);

define_id!(
    /// Strongly-typed ID for Hostel entities.
    HostelId
);

define_id!(
    /// Strongly-typed ID for Room entities.
    RoomId
);

define_id!(
    /// Strongly-typed ID for Allocation entities.
    AllocationId
);
