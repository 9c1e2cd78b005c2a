use chrono::NaiveDate;
use hostel_models::{
    AllocateRequest, Allocation, AllocationId, CheckInRequest, CheckOutRequest, RoomId, StudentId,
};

use crate::error::ApiError;
use crate::http::{Http, Method};

/// `/allocations` endpoints.
///
/// Allocations are never updated directly: they are created through
/// `allocate` and moved along by `check_in` and `check_out`.
#[derive(Clone, Debug)]
pub struct AllocationApi {
    http: Http,
}

impl AllocationApi {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// `GET /allocations`
    pub async fn get_all(&self) -> Result<Vec<Allocation>, ApiError> {
        self.http.get(&["allocations"]).await
    }

    /// `GET /allocations/{id}`
    pub async fn get_by_id(&self, id: AllocationId) -> Result<Allocation, ApiError> {
        self.http.get(&["allocations", &id.to_string()]).await
    }

    /// `GET /allocations/student/{studentId}`
    pub async fn get_by_student(&self, student_id: StudentId) -> Result<Vec<Allocation>, ApiError> {
        self.http
            .get(&["allocations", "student", &student_id.to_string()])
            .await
    }

    /// `GET /allocations/room/{roomId}`
    pub async fn get_by_room(&self, room_id: RoomId) -> Result<Vec<Allocation>, ApiError> {
        self.http
            .get(&["allocations", "room", &room_id.to_string()])
            .await
    }

    /// `GET /allocations/active`
    pub async fn get_active(&self) -> Result<Vec<Allocation>, ApiError> {
        self.http.get(&["allocations", "active"]).await
    }

    /// `POST /allocations/allocate` with `{studentId, roomId}`
    pub async fn allocate(
        &self,
        student_id: StudentId,
        room_id: RoomId,
    ) -> Result<Allocation, ApiError> {
        let body = AllocateRequest {
            student_id,
            room_id,
        };
        self.http.post(&["allocations", "allocate"], &body).await
    }

    /// `PUT /allocations/{id}/checkin` with `{checkInDate}`
    pub async fn check_in(
        &self,
        id: AllocationId,
        check_in_date: NaiveDate,
    ) -> Result<Allocation, ApiError> {
        let body = CheckInRequest { check_in_date };
        self.http
            .put(&["allocations", &id.to_string(), "checkin"], &body)
            .await
    }

    /// `PUT /allocations/{id}/checkout` with `{checkOutDate}`
    pub async fn check_out(
        &self,
        id: AllocationId,
        check_out_date: NaiveDate,
    ) -> Result<Allocation, ApiError> {
        let body = CheckOutRequest { check_out_date };
        self.http
            .put(&["allocations", &id.to_string(), "checkout"], &body)
            .await
    }

    /// [`AllocationApi::allocate`], succeeding on any 2xx whatever the reply body.
    pub async fn send_allocate(&self, request: &AllocateRequest) -> Result<(), ApiError> {
        self.http
            .write(Method::POST, &["allocations", "allocate"], request)
            .await
    }

    /// [`AllocationApi::check_in`], succeeding on any 2xx whatever the reply body.
    pub async fn send_check_in(
        &self,
        id: AllocationId,
        check_in_date: NaiveDate,
    ) -> Result<(), ApiError> {
        let body = CheckInRequest { check_in_date };
        self.http
            .write(Method::PUT, &["allocations", &id.to_string(), "checkin"], &body)
            .await
    }

    /// [`AllocationApi::check_out`], succeeding on any 2xx whatever the reply body.
    pub async fn send_check_out(
        &self,
        id: AllocationId,
        check_out_date: NaiveDate,
    ) -> Result<(), ApiError> {
        let body = CheckOutRequest { check_out_date };
        self.http
            .write(Method::PUT, &["allocations", &id.to_string(), "checkout"], &body)
            .await
    }

    /// `DELETE /allocations/{id}`
    pub async fn delete(&self, id: AllocationId) -> Result<(), ApiError> {
        self.http.delete(&["allocations", &id.to_string()]).await
    }
}
