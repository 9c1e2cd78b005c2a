//! Allocation models and the check-in/check-out workflow stages.
//!
//! An allocation moves through three stages, all decided by the backend:
//!
//! ```text
//! allocate ──► AwaitingCheckIn ──check-in──► CheckedIn ──check-out──► Closed
//! ```
//!
//! The admin console only reads the stage to decide which action to offer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::hostels::HostelSummary;
use crate::ids::{AllocationId, RoomId, StudentId};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationStatus {
    Active,
    Inactive,
    #[serde(other)]
    Other,
}

impl AllocationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The student an allocation refers to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub id: StudentId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roll_number: String,
}

/// The room an allocation refers to, with its hostel.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    pub id: RoomId,
    #[serde(default)]
    pub room_number: String,
    pub hostel: HostelSummary,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub id: AllocationId,
    pub student: StudentSummary,
    pub room: RoomSummary,
    pub allocation_date: NaiveDate,
    #[serde(default)]
    pub check_in_date: Option<NaiveDate>,
    #[serde(default)]
    pub check_out_date: Option<NaiveDate>,
    pub status: AllocationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationStage {
    AwaitingCheckIn,
    CheckedIn,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationAction {
    CheckIn,
    CheckOut,
    Delete,
}

impl AllocationAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CheckIn => "Check In",
            Self::CheckOut => "Check Out",
            Self::Delete => "Delete",
        }
    }
}

impl Allocation {
    pub fn is_active(&self) -> bool {
        self.status == AllocationStatus::Active
    }

    pub fn stage(&self) -> AllocationStage {
        if !self.is_active() || self.check_out_date.is_some() {
            return AllocationStage::Closed;
        }
        match self.check_in_date {
            None => AllocationStage::AwaitingCheckIn,
            Some(_) => AllocationStage::CheckedIn,
        }
    }

    /// Row actions in display order. Delete is always available.
    pub fn actions(&self) -> Vec<AllocationAction> {
        match self.stage() {
            AllocationStage::AwaitingCheckIn => {
                vec![AllocationAction::CheckIn, AllocationAction::Delete]
            }
            AllocationStage::CheckedIn => {
                vec![AllocationAction::CheckOut, AllocationAction::Delete]
            }
            AllocationStage::Closed => vec![AllocationAction::Delete],
        }
    }

    pub fn check_in_label(&self) -> String {
        self.check_in_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "Not Checked In".to_string())
    }

    pub fn check_out_label(&self) -> String {
        self.check_out_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Body of `POST /allocations/allocate`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocateRequest {
    pub student_id: StudentId,
    pub room_id: RoomId,
}

/// Body of `PUT /allocations/{id}/checkin`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub check_in_date: NaiveDate,
}

/// Body of `PUT /allocations/{id}/checkout`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutRequest {
    pub check_out_date: NaiveDate,
}

/// Selections of the allocation form. Both selectors are required.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AllocationDraft {
    pub student_id: Option<StudentId>,
    pub room_id: Option<RoomId>,
}

impl AllocationDraft {
    /// The request to send, or `None` while a selector is still unset.
    pub fn request(&self) -> Option<AllocateRequest> {
        Some(AllocateRequest {
            student_id: self.student_id?,
            room_id: self.room_id?,
        })
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.student_id.is_none() {
            missing.push("Student");
        }
        if self.room_id.is_none() {
            missing.push("Available Room");
        }
        missing
    }
}
