use hostel_models::{HostelId, Room, RoomDraft, RoomId};

use crate::error::ApiError;
use crate::http::{Http, Method};

/// `/rooms` endpoints.
#[derive(Clone, Debug)]
pub struct RoomApi {
    http: Http,
}

impl RoomApi {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// `GET /rooms`
    pub async fn get_all(&self) -> Result<Vec<Room>, ApiError> {
        self.http.get(&["rooms"]).await
    }

    /// `GET /rooms/{id}`
    pub async fn get_by_id(&self, id: RoomId) -> Result<Room, ApiError> {
        self.http.get(&["rooms", &id.to_string()]).await
    }

    /// `GET /rooms/hostel/{hostelId}`
    pub async fn get_by_hostel(&self, hostel_id: HostelId) -> Result<Vec<Room>, ApiError> {
        self.http
            .get(&["rooms", "hostel", &hostel_id.to_string()])
            .await
    }

    /// `GET /rooms/hostel/{hostelId}/available`
    ///
    /// Which rooms count as available is decided by the backend.
    pub async fn get_available_by_hostel(
        &self,
        hostel_id: HostelId,
    ) -> Result<Vec<Room>, ApiError> {
        self.http
            .get(&["rooms", "hostel", &hostel_id.to_string(), "available"])
            .await
    }

    /// `POST /rooms`
    pub async fn create(&self, draft: &RoomDraft) -> Result<Room, ApiError> {
        self.http.post(&["rooms"], draft).await
    }

    /// `PUT /rooms/{id}`
    pub async fn update(&self, id: RoomId, draft: &RoomDraft) -> Result<Room, ApiError> {
        self.http.put(&["rooms", &id.to_string()], draft).await
    }

    /// `POST /rooms`, succeeding on any 2xx whatever the reply body.
    pub async fn send_create(&self, draft: &RoomDraft) -> Result<(), ApiError> {
        self.http.write(Method::POST, &["rooms"], draft).await
    }

    /// `PUT /rooms/{id}`, succeeding on any 2xx whatever the reply body.
    pub async fn send_update(&self, id: RoomId, draft: &RoomDraft) -> Result<(), ApiError> {
        self.http
            .write(Method::PUT, &["rooms", &id.to_string()], draft)
            .await
    }

    /// `DELETE /rooms/{id}`
    pub async fn delete(&self, id: RoomId) -> Result<(), ApiError> {
        self.http.delete(&["rooms", &id.to_string()]).await
    }
}
