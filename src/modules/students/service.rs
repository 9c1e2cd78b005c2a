use async_trait::async_trait;
use hostel_client::{ApiError, StudentApi};
use hostel_models::{Student, StudentDraft, StudentId};

use crate::modules::resource::ResourceApi;

#[async_trait]
impl ResourceApi for StudentApi {
    type Entity = Student;

    async fn fetch_all(&self) -> Result<Vec<Student>, ApiError> {
        self.get_all().await
    }

    async fn create(&self, draft: &StudentDraft) -> Result<(), ApiError> {
        self.send_create(draft).await
    }

    async fn update(&self, id: StudentId, draft: &StudentDraft) -> Result<(), ApiError> {
        self.send_update(id, draft).await
    }

    async fn delete(&self, id: StudentId) -> Result<(), ApiError> {
        StudentApi::delete(self, id).await
    }
}
