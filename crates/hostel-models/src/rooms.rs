//! Room models and the room form draft.

use hostel_core::serde::deserialize_optional_string;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::Resource;
use crate::hostels::HostelSummary;
use crate::ids::{HostelId, RoomId};
use crate::value_types::RoomType;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub hostel: HostelSummary,
    pub room_number: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub floor: Option<String>,
    #[serde(default)]
    pub room_type: RoomType,
    pub capacity: i32,
    #[serde(default)]
    pub occupied_beds: i32,
    #[serde(default)]
    pub available_beds: i32,
}

impl Room {
    pub fn has_vacancy(&self) -> bool {
        self.available_beds > 0
    }

    /// Status column text.
    pub fn status_label(&self) -> &'static str {
        if self.has_vacancy() { "Available" } else { "Full" }
    }

    /// Label used by the allocation form's room selector.
    pub fn selector_label(&self) -> String {
        format!(
            "{} - Room {} (Available: {})",
            self.hostel.name, self.room_number, self.available_beds
        )
    }
}

/// Keep only rooms that can take another student.
pub fn with_vacancy(rooms: Vec<Room>) -> Vec<Room> {
    rooms.into_iter().filter(Room::has_vacancy).collect()
}

/// Hostel reference as sent in room requests: `{ "id": … }`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct HostelLink {
    pub id: Option<HostelId>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomDraft {
    #[validate(custom(function = "validate_hostel_link"))]
    pub hostel: HostelLink,
    #[validate(length(min = 1, message = "Room number is required"))]
    pub room_number: String,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i32,
    pub floor: String,
    pub room_type: RoomType,
}

fn validate_hostel_link(link: &HostelLink) -> Result<(), ValidationError> {
    if link.id.is_none() {
        let mut error = ValidationError::new("required");
        error.message = Some("Hostel is required".into());
        return Err(error);
    }
    Ok(())
}

impl Default for RoomDraft {
    fn default() -> Self {
        Self {
            hostel: HostelLink::default(),
            room_number: String::new(),
            capacity: 1,
            floor: String::new(),
            room_type: RoomType::Single,
        }
    }
}

impl From<&Room> for RoomDraft {
    fn from(room: &Room) -> Self {
        Self {
            hostel: HostelLink {
                id: Some(room.hostel.id),
            },
            room_number: room.room_number.clone(),
            capacity: room.capacity,
            floor: room.floor.clone().unwrap_or_default(),
            room_type: room.room_type,
        }
    }
}

impl Resource for Room {
    type Id = RoomId;
    type Draft = RoomDraft;

    const NOUN: &'static str = "Room";

    fn id(&self) -> RoomId {
        self.id
    }
}
