use async_trait::async_trait;
use hostel_client::{ApiError, RoomApi};
use hostel_models::{Room, RoomDraft, RoomId};

use crate::modules::resource::ResourceApi;

#[async_trait]
impl ResourceApi for RoomApi {
    type Entity = Room;

    async fn fetch_all(&self) -> Result<Vec<Room>, ApiError> {
        self.get_all().await
    }

    async fn create(&self, draft: &RoomDraft) -> Result<(), ApiError> {
        self.send_create(draft).await
    }

    async fn update(&self, id: RoomId, draft: &RoomDraft) -> Result<(), ApiError> {
        self.send_update(id, draft).await
    }

    async fn delete(&self, id: RoomId) -> Result<(), ApiError> {
        RoomApi::delete(self, id).await
    }
}
