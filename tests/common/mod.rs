//! In-process stand-in for the hostel management backend.
//!
//! Serves the same REST surface on a random local port and derives capacity
//! and bed counts from the stored allocations, so screens can be exercised
//! end to end through the real HTTP client.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use hostel_admin::state::AppState;
use hostel_admin::utils::Interaction;
use hostel_client::HostelClient;
use hostel_config::ApiConfig;
use hostel_models::{
    AllocateRequest, CheckInRequest, CheckOutRequest, HostelDraft, HostelType, RoomDraft,
    StudentDraft,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

type Reply = Result<Json<Value>, (StatusCode, String)>;

fn not_found(what: &str, id: i64) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("{} not found with id: {}", what, id))
}

fn bad_request(message: impl Into<String>) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, message.into())
}

#[derive(Clone)]
struct AllocationRecord {
    student_id: i64,
    room_id: i64,
    allocation_date: NaiveDate,
    check_in_date: Option<NaiveDate>,
    check_out_date: Option<NaiveDate>,
    active: bool,
}

#[derive(Default)]
struct Db {
    next_id: i64,
    students: BTreeMap<i64, StudentDraft>,
    hostels: BTreeMap<i64, HostelDraft>,
    rooms: BTreeMap<i64, RoomDraft>,
    allocations: BTreeMap<i64, AllocationRecord>,
    requests: Vec<String>,
    plain_text_writes: bool,
}

impl Db {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn occupied_beds(&self, room_id: i64) -> i32 {
        self.allocations
            .values()
            .filter(|a| a.active && a.room_id == room_id)
            .count() as i32
    }

    fn student_json(&self, id: i64) -> Option<Value> {
        let s = self.students.get(&id)?;
        Some(json!({
            "id": id,
            "name": s.name,
            "email": s.email,
            "rollNumber": s.roll_number,
            "phone": s.phone,
            "gender": s.gender,
            "department": s.department,
            "year": s.year,
            "dateOfBirth": s.date_of_birth,
            "address": s.address,
        }))
    }

    fn hostel_json(&self, id: i64) -> Option<Value> {
        let h = self.hostels.get(&id)?;
        let occupied: i32 = self
            .rooms
            .iter()
            .filter(|(_, r)| r.hostel.id.map(|h| h.into_inner()) == Some(id))
            .map(|(room_id, _)| self.occupied_beds(*room_id))
            .sum();
        Some(json!({
            "id": id,
            "name": h.name,
            "type": h.hostel_type,
            "totalRooms": h.total_rooms,
            "totalCapacity": h.total_capacity,
            "occupiedCapacity": occupied,
            "availableCapacity": h.total_capacity - occupied,
            "warden": h.warden,
            "address": h.address,
            "facilities": h.facilities,
        }))
    }

    fn room_hostel_id(&self, room_id: i64) -> Option<i64> {
        self.rooms
            .get(&room_id)?
            .hostel
            .id
            .map(|id| id.into_inner())
    }

    fn room_json(&self, id: i64) -> Option<Value> {
        let r = self.rooms.get(&id)?;
        let hostel_id = self.room_hostel_id(id)?;
        let hostel = self.hostels.get(&hostel_id)?;
        let occupied = self.occupied_beds(id);
        Some(json!({
            "id": id,
            "hostel": { "id": hostel_id, "name": hostel.name },
            "roomNumber": r.room_number,
            "floor": r.floor,
            "roomType": r.room_type,
            "capacity": r.capacity,
            "occupiedBeds": occupied,
            "availableBeds": r.capacity - occupied,
        }))
    }

    fn allocation_json(&self, id: i64) -> Option<Value> {
        let a = self.allocations.get(&id)?;
        let student = self.students.get(&a.student_id)?;
        let room = self.rooms.get(&a.room_id)?;
        let hostel_id = self.room_hostel_id(a.room_id)?;
        let hostel = self.hostels.get(&hostel_id)?;
        Some(json!({
            "id": id,
            "student": {
                "id": a.student_id,
                "name": student.name,
                "rollNumber": student.roll_number,
            },
            "room": {
                "id": a.room_id,
                "roomNumber": room.room_number,
                "hostel": { "id": hostel_id, "name": hostel.name },
            },
            "allocationDate": a.allocation_date,
            "checkInDate": a.check_in_date,
            "checkOutDate": a.check_out_date,
            "status": if a.active { "ACTIVE" } else { "INACTIVE" },
        }))
    }

    fn roll_taken(&self, roll_number: &str, except: Option<i64>) -> bool {
        self.students
            .iter()
            .any(|(id, s)| s.roll_number == roll_number && Some(*id) != except)
    }
}

/// Shared handle to the fake backend's state.
#[derive(Clone, Default)]
pub struct FakeBackend {
    db: Arc<Mutex<Db>>,
}

impl FakeBackend {
    /// Every request seen so far, as `"METHOD /path"`.
    pub fn requests(&self) -> Vec<String> {
        self.db.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.db.lock().unwrap().requests.len()
    }

    pub fn clear_requests(&self) {
        self.db.lock().unwrap().requests.clear();
    }

    /// Apply writes as usual but answer them with `200` and a text body
    /// instead of the stored entity.
    pub fn reply_to_writes_with_text(&self) {
        self.db.lock().unwrap().plain_text_writes = true;
    }
}

pub struct TestBackend {
    pub backend: FakeBackend,
    pub base_url: String,
}

impl TestBackend {
    pub fn client(&self) -> HostelClient {
        HostelClient::new(&self.config()).unwrap()
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::new(self.base_url.clone())
    }

    pub fn state(&self) -> AppState {
        AppState::new(self.config()).unwrap()
    }
}

/// Start the fake backend on `127.0.0.1:0`.
pub async fn spawn_backend() -> TestBackend {
    let backend = FakeBackend::default();
    let app = Router::new()
        .nest("/api", api_routes())
        .layer(middleware::from_fn_with_state(backend.clone(), record_request))
        .with_state(backend.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestBackend {
        backend,
        base_url: format!("http://{}/api", addr),
    }
}

async fn record_request(State(backend): State<FakeBackend>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let plain_text_writes = {
        let mut db = backend.db.lock().unwrap();
        db.requests
            .push(format!("{} {}", method, request.uri().path()));
        db.plain_text_writes
    };
    let response = next.run(request).await;
    let is_write = method == Method::POST || method == Method::PUT;
    if plain_text_writes && is_write && response.status().is_success() {
        return (StatusCode::OK, "Saved").into_response();
    }
    response
}

fn api_routes() -> Router<FakeBackend> {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/students/roll/{roll_number}", get(student_by_roll))
        .route("/hostels", get(list_hostels).post(create_hostel))
        .route(
            "/hostels/{id}",
            get(get_hostel).put(update_hostel).delete(delete_hostel),
        )
        .route("/hostels/type/{hostel_type}", get(hostels_by_type))
        .route("/rooms", get(list_rooms).post(create_room))
        .route(
            "/rooms/{id}",
            get(get_room).put(update_room).delete(delete_room),
        )
        .route("/rooms/hostel/{hostel_id}", get(rooms_by_hostel))
        .route(
            "/rooms/hostel/{hostel_id}/available",
            get(available_rooms_by_hostel),
        )
        .route("/allocations", get(list_allocations))
        .route("/allocations/allocate", post(allocate))
        .route("/allocations/active", get(active_allocations))
        .route(
            "/allocations/{id}",
            get(get_allocation).delete(delete_allocation),
        )
        .route("/allocations/student/{student_id}", get(allocations_by_student))
        .route("/allocations/room/{room_id}", get(allocations_by_room))
        .route("/allocations/{id}/checkin", put(check_in))
        .route("/allocations/{id}/checkout", put(check_out))
}

// Students

async fn list_students(State(b): State<FakeBackend>) -> Json<Value> {
    let db = b.db.lock().unwrap();
    Json(db.students.keys().filter_map(|id| db.student_json(*id)).collect())
}

async fn get_student(State(b): State<FakeBackend>, Path(id): Path<i64>) -> Reply {
    let db = b.db.lock().unwrap();
    db.student_json(id).map(Json).ok_or(not_found("Student", id))
}

async fn student_by_roll(State(b): State<FakeBackend>, Path(roll_number): Path<String>) -> Reply {
    let db = b.db.lock().unwrap();
    db.students
        .iter()
        .find(|(_, s)| s.roll_number == roll_number)
        .and_then(|(id, _)| db.student_json(*id))
        .map(Json)
        .ok_or((
            StatusCode::NOT_FOUND,
            format!("Student not found with roll number: {}", roll_number),
        ))
}

async fn create_student(State(b): State<FakeBackend>, Json(draft): Json<StudentDraft>) -> Reply {
    let mut db = b.db.lock().unwrap();
    if db.roll_taken(&draft.roll_number, None) {
        return Err(bad_request(format!(
            "Student with roll number {} already exists",
            draft.roll_number
        )));
    }
    let id = db.next_id();
    db.students.insert(id, draft);
    Ok(Json(db.student_json(id).unwrap_or_default()))
}

async fn update_student(
    State(b): State<FakeBackend>,
    Path(id): Path<i64>,
    Json(draft): Json<StudentDraft>,
) -> Reply {
    let mut db = b.db.lock().unwrap();
    if !db.students.contains_key(&id) {
        return Err(not_found("Student", id));
    }
    if db.roll_taken(&draft.roll_number, Some(id)) {
        return Err(bad_request(format!(
            "Student with roll number {} already exists",
            draft.roll_number
        )));
    }
    db.students.insert(id, draft);
    Ok(Json(db.student_json(id).unwrap_or_default()))
}

async fn delete_student(State(b): State<FakeBackend>, Path(id): Path<i64>) -> StatusCode {
    let mut db = b.db.lock().unwrap();
    match db.students.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

// Hostels

async fn list_hostels(State(b): State<FakeBackend>) -> Json<Value> {
    let db = b.db.lock().unwrap();
    Json(db.hostels.keys().filter_map(|id| db.hostel_json(*id)).collect())
}

async fn get_hostel(State(b): State<FakeBackend>, Path(id): Path<i64>) -> Reply {
    let db = b.db.lock().unwrap();
    db.hostel_json(id).map(Json).ok_or(not_found("Hostel", id))
}

async fn hostels_by_type(State(b): State<FakeBackend>, Path(hostel_type): Path<String>) -> Reply {
    let hostel_type: HostelType = hostel_type.parse().map_err(|e| bad_request(format!("{}", e)))?;
    let db = b.db.lock().unwrap();
    Ok(Json(
        db.hostels
            .iter()
            .filter(|(_, h)| h.hostel_type == hostel_type)
            .filter_map(|(id, _)| db.hostel_json(*id))
            .collect(),
    ))
}

async fn create_hostel(State(b): State<FakeBackend>, Json(draft): Json<HostelDraft>) -> Reply {
    let mut db = b.db.lock().unwrap();
    if db.hostels.values().any(|h| h.name == draft.name) {
        return Err(bad_request(format!("Hostel {} already exists", draft.name)));
    }
    let id = db.next_id();
    db.hostels.insert(id, draft);
    Ok(Json(db.hostel_json(id).unwrap_or_default()))
}

async fn update_hostel(
    State(b): State<FakeBackend>,
    Path(id): Path<i64>,
    Json(draft): Json<HostelDraft>,
) -> Reply {
    let mut db = b.db.lock().unwrap();
    if !db.hostels.contains_key(&id) {
        return Err(not_found("Hostel", id));
    }
    db.hostels.insert(id, draft);
    Ok(Json(db.hostel_json(id).unwrap_or_default()))
}

async fn delete_hostel(State(b): State<FakeBackend>, Path(id): Path<i64>) -> StatusCode {
    let mut db = b.db.lock().unwrap();
    match db.hostels.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

// Rooms

fn rooms_where(db: &Db, keep: impl Fn(i64) -> bool) -> Value {
    db.rooms
        .keys()
        .copied()
        .filter(|id| keep(*id))
        .filter_map(|id| db.room_json(id))
        .collect()
}

async fn list_rooms(State(b): State<FakeBackend>) -> Json<Value> {
    let db = b.db.lock().unwrap();
    Json(rooms_where(&db, |_| true))
}

async fn get_room(State(b): State<FakeBackend>, Path(id): Path<i64>) -> Reply {
    let db = b.db.lock().unwrap();
    db.room_json(id).map(Json).ok_or(not_found("Room", id))
}

async fn rooms_by_hostel(State(b): State<FakeBackend>, Path(hostel_id): Path<i64>) -> Json<Value> {
    let db = b.db.lock().unwrap();
    Json(rooms_where(&db, |id| db.room_hostel_id(id) == Some(hostel_id)))
}

async fn available_rooms_by_hostel(
    State(b): State<FakeBackend>,
    Path(hostel_id): Path<i64>,
) -> Json<Value> {
    let db = b.db.lock().unwrap();
    Json(rooms_where(&db, |id| {
        db.room_hostel_id(id) == Some(hostel_id)
            && db.rooms.get(&id).map(|r| r.capacity).unwrap_or(0) > db.occupied_beds(id)
    }))
}

fn check_room_hostel(db: &Db, draft: &RoomDraft) -> Result<(), (StatusCode, String)> {
    match draft.hostel.id {
        Some(id) if db.hostels.contains_key(&id.into_inner()) => Ok(()),
        Some(id) => Err(not_found("Hostel", id.into_inner())),
        None => Err(bad_request("Hostel is required")),
    }
}

async fn create_room(State(b): State<FakeBackend>, Json(draft): Json<RoomDraft>) -> Reply {
    let mut db = b.db.lock().unwrap();
    check_room_hostel(&db, &draft)?;
    let id = db.next_id();
    db.rooms.insert(id, draft);
    Ok(Json(db.room_json(id).unwrap_or_default()))
}

async fn update_room(
    State(b): State<FakeBackend>,
    Path(id): Path<i64>,
    Json(draft): Json<RoomDraft>,
) -> Reply {
    let mut db = b.db.lock().unwrap();
    if !db.rooms.contains_key(&id) {
        return Err(not_found("Room", id));
    }
    check_room_hostel(&db, &draft)?;
    db.rooms.insert(id, draft);
    Ok(Json(db.room_json(id).unwrap_or_default()))
}

async fn delete_room(State(b): State<FakeBackend>, Path(id): Path<i64>) -> StatusCode {
    let mut db = b.db.lock().unwrap();
    match db.rooms.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

// Allocations

fn allocations_where(db: &Db, keep: impl Fn(&AllocationRecord) -> bool) -> Value {
    db.allocations
        .iter()
        .filter(|(_, a)| keep(a))
        .filter_map(|(id, _)| db.allocation_json(*id))
        .collect()
}

async fn list_allocations(State(b): State<FakeBackend>) -> Json<Value> {
    let db = b.db.lock().unwrap();
    Json(allocations_where(&db, |_| true))
}

async fn active_allocations(State(b): State<FakeBackend>) -> Json<Value> {
    let db = b.db.lock().unwrap();
    Json(allocations_where(&db, |a| a.active))
}

async fn allocations_by_student(
    State(b): State<FakeBackend>,
    Path(student_id): Path<i64>,
) -> Json<Value> {
    let db = b.db.lock().unwrap();
    Json(allocations_where(&db, |a| a.student_id == student_id))
}

async fn allocations_by_room(State(b): State<FakeBackend>, Path(room_id): Path<i64>) -> Json<Value> {
    let db = b.db.lock().unwrap();
    Json(allocations_where(&db, |a| a.room_id == room_id))
}

async fn get_allocation(State(b): State<FakeBackend>, Path(id): Path<i64>) -> Reply {
    let db = b.db.lock().unwrap();
    db.allocation_json(id)
        .map(Json)
        .ok_or(not_found("Allocation", id))
}

async fn allocate(State(b): State<FakeBackend>, Json(request): Json<AllocateRequest>) -> Reply {
    let mut db = b.db.lock().unwrap();
    let student_id = request.student_id.into_inner();
    let room_id = request.room_id.into_inner();
    if !db.students.contains_key(&student_id) {
        return Err(not_found("Student", student_id));
    }
    let capacity = db
        .rooms
        .get(&room_id)
        .map(|r| r.capacity)
        .ok_or(not_found("Room", room_id))?;
    if db
        .allocations
        .values()
        .any(|a| a.active && a.student_id == student_id)
    {
        return Err(bad_request("Student already has an active allocation"));
    }
    if db.occupied_beds(room_id) >= capacity {
        return Err(bad_request("Room is full"));
    }
    let id = db.next_id();
    db.allocations.insert(
        id,
        AllocationRecord {
            student_id,
            room_id,
            allocation_date: hostel_core::today(),
            check_in_date: None,
            check_out_date: None,
            active: true,
        },
    );
    Ok(Json(db.allocation_json(id).unwrap_or_default()))
}

async fn check_in(
    State(b): State<FakeBackend>,
    Path(id): Path<i64>,
    Json(request): Json<CheckInRequest>,
) -> Reply {
    let mut db = b.db.lock().unwrap();
    let allocation = db
        .allocations
        .get_mut(&id)
        .ok_or(not_found("Allocation", id))?;
    allocation.check_in_date = Some(request.check_in_date);
    Ok(Json(db.allocation_json(id).unwrap_or_default()))
}

async fn check_out(
    State(b): State<FakeBackend>,
    Path(id): Path<i64>,
    Json(request): Json<CheckOutRequest>,
) -> Reply {
    let mut db = b.db.lock().unwrap();
    let allocation = db
        .allocations
        .get_mut(&id)
        .ok_or(not_found("Allocation", id))?;
    allocation.check_out_date = Some(request.check_out_date);
    allocation.active = false;
    Ok(Json(db.allocation_json(id).unwrap_or_default()))
}

async fn delete_allocation(State(b): State<FakeBackend>, Path(id): Path<i64>) -> StatusCode {
    let mut db = b.db.lock().unwrap();
    match db.allocations.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

/// Records notifications and answers every confirmation with `answer`.
pub struct ScriptedInteraction {
    answer: bool,
    prompts: Mutex<Vec<String>>,
    messages: Mutex<Vec<String>>,
}

impl ScriptedInteraction {
    pub fn confirming() -> Self {
        Self::answering(true)
    }

    pub fn declining() -> Self {
        Self::answering(false)
    }

    fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Interaction for ScriptedInteraction {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }

    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

// Fixtures

pub fn student_draft(name: &str, roll_number: &str) -> StudentDraft {
    StudentDraft {
        name: name.to_string(),
        email: format!("{}@uni.edu", roll_number.to_lowercase()),
        roll_number: roll_number.to_string(),
        phone: "08030000000".to_string(),
        department: "Computer Science".to_string(),
        ..StudentDraft::default()
    }
}

pub fn maple() -> HostelDraft {
    HostelDraft {
        name: "Maple".to_string(),
        hostel_type: HostelType::Boys,
        total_rooms: 2,
        total_capacity: 4,
        ..HostelDraft::default()
    }
}

pub fn room_draft(hostel_id: hostel_models::HostelId, number: &str, capacity: i32) -> RoomDraft {
    RoomDraft {
        hostel: hostel_models::HostelLink {
            id: Some(hostel_id),
        },
        room_number: number.to_string(),
        capacity,
        ..RoomDraft::default()
    }
}
