use async_trait::async_trait;
use hostel_client::{ApiError, HostelApi};
use hostel_models::{Hostel, HostelDraft, HostelId};

use crate::modules::resource::ResourceApi;

#[async_trait]
impl ResourceApi for HostelApi {
    type Entity = Hostel;

    async fn fetch_all(&self) -> Result<Vec<Hostel>, ApiError> {
        self.get_all().await
    }

    async fn create(&self, draft: &HostelDraft) -> Result<(), ApiError> {
        self.send_create(draft).await
    }

    async fn update(&self, id: HostelId, draft: &HostelDraft) -> Result<(), ApiError> {
        self.send_update(id, draft).await
    }

    async fn delete(&self, id: HostelId) -> Result<(), ApiError> {
        HostelApi::delete(self, id).await
    }
}
