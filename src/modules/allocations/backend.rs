use async_trait::async_trait;
use chrono::NaiveDate;
use hostel_client::{ApiError, HostelClient};
use hostel_models::{AllocateRequest, Allocation, AllocationId, Room, Student};

/// Everything the allocation page reads and writes. Writes report only
/// whether the backend applied them.
#[async_trait]
pub trait AllocationBackend: Send + Sync {
    async fn fetch_allocations(&self) -> Result<Vec<Allocation>, ApiError>;

    async fn fetch_students(&self) -> Result<Vec<Student>, ApiError>;

    async fn fetch_rooms(&self) -> Result<Vec<Room>, ApiError>;

    async fn allocate(&self, request: AllocateRequest) -> Result<(), ApiError>;

    async fn check_in(&self, id: AllocationId, date: NaiveDate) -> Result<(), ApiError>;

    async fn check_out(&self, id: AllocationId, date: NaiveDate) -> Result<(), ApiError>;

    async fn delete(&self, id: AllocationId) -> Result<(), ApiError>;
}

#[async_trait]
impl AllocationBackend for HostelClient {
    async fn fetch_allocations(&self) -> Result<Vec<Allocation>, ApiError> {
        self.allocations().get_all().await
    }

    async fn fetch_students(&self) -> Result<Vec<Student>, ApiError> {
        self.students().get_all().await
    }

    async fn fetch_rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.rooms().get_all().await
    }

    async fn allocate(&self, request: AllocateRequest) -> Result<(), ApiError> {
        self.allocations().send_allocate(&request).await
    }

    async fn check_in(&self, id: AllocationId, date: NaiveDate) -> Result<(), ApiError> {
        self.allocations().send_check_in(id, date).await
    }

    async fn check_out(&self, id: AllocationId, date: NaiveDate) -> Result<(), ApiError> {
        self.allocations().send_check_out(id, date).await
    }

    async fn delete(&self, id: AllocationId) -> Result<(), ApiError> {
        self.allocations().delete(id).await
    }
}
