//! # Hostel Models
//!
//! Domain models and form drafts for Hostel Admin.
//!
//! Every entity is owned by the backend; these types are transient local
//! copies. Derived fields (occupied/available capacity, occupied/available
//! beds) are deserialized for display and never sent back.
//!
//! # Modules
//!
//! - [`allocations`]: Allocations and their check-in/check-out stages
//! - [`hostels`]: Hostels and the hostel form draft
//! - [`ids`]: Strongly-typed entity ids
//! - [`rooms`]: Rooms and the room form draft
//! - [`students`]: Students and the student form draft
//! - [`value_types`]: Gender, hostel type, room type
//!
//! # Example
//!
//! ```ignore
//! use hostel_models::{Resource, Student, StudentDraft};
//!
//! fn begin_edit(student: &Student) -> StudentDraft {
//!     student.draft()
//! }
//! ```

use serde::Serialize;
use std::fmt;
use validator::Validate;

pub mod allocations;
pub mod hostels;
pub mod ids;
pub mod rooms;
pub mod students;
pub mod value_types;

/// An entity the admin screens can list, create, edit, and delete.
pub trait Resource: Clone + fmt::Debug + Send + Sync + 'static {
    type Id: Copy + Eq + fmt::Display + fmt::Debug + Send + Sync + 'static;
    /// Form values for create/update requests.
    type Draft: Clone
        + Default
        + fmt::Debug
        + PartialEq
        + Serialize
        + Validate
        + for<'a> From<&'a Self>
        + Send
        + Sync
        + 'static;

    /// Singular noun used in notifications, e.g. "Student".
    const NOUN: &'static str;

    fn id(&self) -> Self::Id;

    /// Seed a form draft from this record.
    fn draft(&self) -> Self::Draft {
        Self::Draft::from(self)
    }
}

// Re-export commonly used types at crate root for convenience
pub use allocations::{
    AllocateRequest, Allocation, AllocationAction, AllocationDraft, AllocationStage,
    AllocationStatus, CheckInRequest, CheckOutRequest, RoomSummary, StudentSummary,
};
pub use hostels::{Hostel, HostelDraft, HostelSummary};
pub use ids::{AllocationId, HostelId, RoomId, StudentId};
pub use rooms::{HostelLink, Room, RoomDraft, with_vacancy};
pub use students::{Student, StudentDraft};
pub use value_types::{Gender, HostelType, RoomType, ValueTypeError};
