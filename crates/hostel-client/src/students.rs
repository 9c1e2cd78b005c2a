use hostel_models::{Student, StudentDraft, StudentId};

use crate::error::ApiError;
use crate::http::{Http, Method};

/// `/students` endpoints.
#[derive(Clone, Debug)]
pub struct StudentApi {
    http: Http,
}

impl StudentApi {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// `GET /students`
    pub async fn get_all(&self) -> Result<Vec<Student>, ApiError> {
        self.http.get(&["students"]).await
    }

    /// `GET /students/{id}`
    pub async fn get_by_id(&self, id: StudentId) -> Result<Student, ApiError> {
        self.http.get(&["students", &id.to_string()]).await
    }

    /// `GET /students/roll/{rollNumber}`
    pub async fn get_by_roll_number(&self, roll_number: &str) -> Result<Student, ApiError> {
        self.http.get(&["students", "roll", roll_number]).await
    }

    /// `POST /students`
    pub async fn create(&self, draft: &StudentDraft) -> Result<Student, ApiError> {
        self.http.post(&["students"], draft).await
    }

    /// `PUT /students/{id}`
    pub async fn update(&self, id: StudentId, draft: &StudentDraft) -> Result<Student, ApiError> {
        self.http.put(&["students", &id.to_string()], draft).await
    }

    /// `POST /students`, succeeding on any 2xx whatever the reply body.
    pub async fn send_create(&self, draft: &StudentDraft) -> Result<(), ApiError> {
        self.http.write(Method::POST, &["students"], draft).await
    }

    /// `PUT /students/{id}`, succeeding on any 2xx whatever the reply body.
    pub async fn send_update(&self, id: StudentId, draft: &StudentDraft) -> Result<(), ApiError> {
        self.http
            .write(Method::PUT, &["students", &id.to_string()], draft)
            .await
    }

    /// `DELETE /students/{id}`
    pub async fn delete(&self, id: StudentId) -> Result<(), ApiError> {
        self.http.delete(&["students", &id.to_string()]).await
    }
}
