//! Hostel models and the hostel form draft.
//!
//! `occupied_capacity` and `available_capacity` are computed by the backend
//! and only ever displayed; the draft never carries them.

use hostel_core::serde::deserialize_optional_string;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Resource;
use crate::ids::HostelId;
use crate::value_types::HostelType;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hostel {
    pub id: HostelId,
    pub name: String,
    #[serde(rename = "type")]
    pub hostel_type: HostelType,
    #[serde(default)]
    pub total_rooms: i32,
    #[serde(default)]
    pub total_capacity: i32,
    #[serde(default)]
    pub occupied_capacity: i32,
    #[serde(default)]
    pub available_capacity: i32,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub warden: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub facilities: Option<String>,
}

/// The hostel a room belongs to, as embedded in room and allocation payloads.
///
/// Responses embed the full hostel; only the fields the admin screens show
/// are kept.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HostelSummary {
    pub id: HostelId,
    #[serde(default)]
    pub name: String,
}

impl From<&Hostel> for HostelSummary {
    fn from(hostel: &Hostel) -> Self {
        Self {
            id: hostel.id,
            name: hostel.name.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HostelDraft {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    pub hostel_type: HostelType,
    pub total_rooms: i32,
    pub total_capacity: i32,
    pub warden: String,
    pub address: String,
    pub facilities: String,
}

impl Default for HostelDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            hostel_type: HostelType::Boys,
            total_rooms: 0,
            total_capacity: 0,
            warden: String::new(),
            address: String::new(),
            facilities: String::new(),
        }
    }
}

impl From<&Hostel> for HostelDraft {
    fn from(hostel: &Hostel) -> Self {
        Self {
            name: hostel.name.clone(),
            hostel_type: hostel.hostel_type,
            total_rooms: hostel.total_rooms,
            total_capacity: hostel.total_capacity,
            warden: hostel.warden.clone().unwrap_or_default(),
            address: hostel.address.clone().unwrap_or_default(),
            facilities: hostel.facilities.clone().unwrap_or_default(),
        }
    }
}

impl Resource for Hostel {
    type Id = HostelId;
    type Draft = HostelDraft;

    const NOUN: &'static str = "Hostel";

    fn id(&self) -> HostelId {
        self.id
    }
}
