//! Rooms within hostels. The room form needs the hostel list for its
//! selector, so the rooms page loads both collections together.

pub mod controller;
pub mod form;
pub mod service;
pub mod view;

use std::ops::{Deref, DerefMut};

use hostel_client::{HostelApi, RoomApi};
use hostel_models::{Hostel, Room};
use tracing::error;

use crate::modules::resource::{CrudScreen, ResourceApi};

pub struct RoomScreen<R = RoomApi, H = HostelApi>
where
    R: ResourceApi<Entity = Room>,
    H: ResourceApi<Entity = Hostel>,
{
    rooms: CrudScreen<R>,
    hostel_api: H,
    hostels: Vec<Hostel>,
}

impl<R, H> RoomScreen<R, H>
where
    R: ResourceApi<Entity = Room>,
    H: ResourceApi<Entity = Hostel>,
{
    pub fn new(room_api: R, hostel_api: H) -> Self {
        Self {
            rooms: CrudScreen::new(room_api),
            hostel_api,
            hostels: Vec::new(),
        }
    }

    /// Load rooms and hostels concurrently. Either may fail on its own.
    pub async fn mount(&mut self) {
        let (_, hostels) = tokio::join!(self.rooms.mount(), self.hostel_api.fetch_all());
        match hostels {
            Ok(hostels) => self.hostels = hostels,
            Err(e) => error!(error = %e, "Error fetching hostels"),
        }
    }

    /// Hostels offered by the form's selector, as of mount.
    pub fn hostels(&self) -> &[Hostel] {
        &self.hostels
    }

    pub fn crud_mut(&mut self) -> &mut CrudScreen<R> {
        &mut self.rooms
    }
}

impl<R, H> Deref for RoomScreen<R, H>
where
    R: ResourceApi<Entity = Room>,
    H: ResourceApi<Entity = Hostel>,
{
    type Target = CrudScreen<R>;

    fn deref(&self) -> &Self::Target {
        &self.rooms
    }
}

impl<R, H> DerefMut for RoomScreen<R, H>
where
    R: ResourceApi<Entity = Room>,
    H: ResourceApi<Entity = Hostel>,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.rooms
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use hostel_client::ApiError;
    use hostel_models::{
        HostelDraft, HostelId, HostelLink, HostelSummary, HostelType, RoomDraft, RoomId, RoomType,
    };

    use super::*;
    use crate::modules::resource::Outcome;
    use crate::modules::resource::testing::ScriptedUi;

    struct FakeRooms {
        rows: Mutex<Vec<Room>>,
    }

    #[async_trait]
    impl ResourceApi for FakeRooms {
        type Entity = Room;

        async fn fetch_all(&self) -> Result<Vec<Room>, ApiError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn create(&self, draft: &RoomDraft) -> Result<(), ApiError> {
            let hostel_id = draft.hostel.id.ok_or(ApiError::Api {
                status: 400,
                body: "Hostel is required".to_string(),
            })?;
            let mut rows = self.rows.lock().unwrap();
            let room = Room {
                id: RoomId(rows.len() as i64 + 1),
                hostel: HostelSummary {
                    id: hostel_id,
                    name: "Maple".to_string(),
                },
                room_number: draft.room_number.clone(),
                floor: Some(draft.floor.clone()).filter(|f| !f.is_empty()),
                room_type: draft.room_type,
                capacity: draft.capacity,
                occupied_beds: 0,
                available_beds: draft.capacity,
            };
            rows.push(room);
            Ok(())
        }

        async fn update(&self, _id: RoomId, _draft: &RoomDraft) -> Result<(), ApiError> {
            unreachable!("not exercised")
        }

        async fn delete(&self, _id: RoomId) -> Result<(), ApiError> {
            unreachable!("not exercised")
        }
    }

    struct FakeHostels {
        result: Result<Vec<Hostel>, u16>,
    }

    #[async_trait]
    impl ResourceApi for FakeHostels {
        type Entity = Hostel;

        async fn fetch_all(&self) -> Result<Vec<Hostel>, ApiError> {
            self.result.clone().map_err(|status| ApiError::Api {
                status,
                body: String::new(),
            })
        }

        async fn create(&self, _draft: &HostelDraft) -> Result<(), ApiError> {
            unreachable!("not exercised")
        }

        async fn update(&self, _id: HostelId, _draft: &HostelDraft) -> Result<(), ApiError> {
            unreachable!("not exercised")
        }

        async fn delete(&self, _id: HostelId) -> Result<(), ApiError> {
            unreachable!("not exercised")
        }
    }

    fn maple() -> Hostel {
        Hostel {
            id: HostelId(1),
            name: "Maple".to_string(),
            hostel_type: HostelType::Boys,
            total_rooms: 2,
            total_capacity: 4,
            occupied_capacity: 0,
            available_capacity: 4,
            warden: None,
            address: None,
            facilities: None,
        }
    }

    fn screen(hostels: Result<Vec<Hostel>, u16>) -> RoomScreen<FakeRooms, FakeHostels> {
        RoomScreen::new(
            FakeRooms {
                rows: Mutex::new(Vec::new()),
            },
            FakeHostels { result: hostels },
        )
    }

    #[tokio::test]
    async fn test_mount_loads_hostels_for_selector() {
        let mut screen = screen(Ok(vec![maple()]));
        screen.mount().await;
        assert!(!screen.is_loading());
        assert_eq!(screen.hostels().len(), 1);
    }

    #[tokio::test]
    async fn test_hostel_failure_still_loads_rooms() {
        let mut screen = screen(Err(500));
        screen.mount().await;
        assert!(!screen.is_loading());
        assert!(screen.hostels().is_empty());
    }

    #[tokio::test]
    async fn test_room_without_hostel_is_not_sent() {
        let mut screen = screen(Ok(vec![maple()]));
        screen.mount().await;
        let ui = ScriptedUi::answering(true);

        screen.toggle_form();
        screen.draft_mut().room_number = "101".to_string();
        let outcome = screen.submit(&ui).await;

        assert_eq!(outcome, Outcome::Incomplete);
        assert!(screen.items().is_empty());
        assert_eq!(ui.messages(), vec!["Please fix the form: Hostel is required"]);
    }

    #[tokio::test]
    async fn test_created_room_reports_backend_bed_counts() {
        let mut screen = screen(Ok(vec![maple()]));
        screen.mount().await;
        let ui = ScriptedUi::answering(true);

        screen.toggle_form();
        *screen.draft_mut() = RoomDraft {
            hostel: HostelLink {
                id: Some(HostelId(1)),
            },
            room_number: "101".to_string(),
            capacity: 2,
            floor: String::new(),
            room_type: RoomType::Double,
        };
        let outcome = screen.submit(&ui).await;

        assert_eq!(outcome, Outcome::Applied);
        let room = &screen.items()[0];
        assert_eq!(room.available_beds, 2);
        assert_eq!(room.floor, None);
        assert_eq!(ui.messages(), vec!["Room created successfully!"]);
    }
}
