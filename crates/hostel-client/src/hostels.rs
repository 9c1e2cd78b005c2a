use hostel_models::{Hostel, HostelDraft, HostelId, HostelType};

use crate::error::ApiError;
use crate::http::{Http, Method};

/// `/hostels` endpoints.
#[derive(Clone, Debug)]
pub struct HostelApi {
    http: Http,
}

impl HostelApi {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// `GET /hostels`
    pub async fn get_all(&self) -> Result<Vec<Hostel>, ApiError> {
        self.http.get(&["hostels"]).await
    }

    /// `GET /hostels/{id}`
    pub async fn get_by_id(&self, id: HostelId) -> Result<Hostel, ApiError> {
        self.http.get(&["hostels", &id.to_string()]).await
    }

    /// `GET /hostels/type/{type}`
    pub async fn get_by_type(&self, hostel_type: HostelType) -> Result<Vec<Hostel>, ApiError> {
        self.http.get(&["hostels", "type", hostel_type.as_str()]).await
    }

    /// `POST /hostels`
    pub async fn create(&self, draft: &HostelDraft) -> Result<Hostel, ApiError> {
        self.http.post(&["hostels"], draft).await
    }

    /// `PUT /hostels/{id}`
    pub async fn update(&self, id: HostelId, draft: &HostelDraft) -> Result<Hostel, ApiError> {
        self.http.put(&["hostels", &id.to_string()], draft).await
    }

    /// `POST /hostels`, succeeding on any 2xx whatever the reply body.
    pub async fn send_create(&self, draft: &HostelDraft) -> Result<(), ApiError> {
        self.http.write(Method::POST, &["hostels"], draft).await
    }

    /// `PUT /hostels/{id}`, succeeding on any 2xx whatever the reply body.
    pub async fn send_update(&self, id: HostelId, draft: &HostelDraft) -> Result<(), ApiError> {
        self.http
            .write(Method::PUT, &["hostels", &id.to_string()], draft)
            .await
    }

    /// `DELETE /hostels/{id}`
    pub async fn delete(&self, id: HostelId) -> Result<(), ApiError> {
        self.http.delete(&["hostels", &id.to_string()]).await
    }
}
