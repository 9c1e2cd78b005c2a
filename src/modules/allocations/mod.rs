//! Room allocation workflow.
//!
//! An allocation moves from awaiting check-in to checked in to closed. Each
//! transition is one request followed by a re-fetch; the backend owns the
//! resulting state and bed counts.

pub mod backend;
pub mod controller;
pub mod form;
pub mod view;

use hostel_client::HostelClient;
use hostel_core::{Clock, today};
use hostel_models::{
    Allocation, AllocationAction, AllocationDraft, AllocationId, Room, RoomId, Student, StudentId,
    with_vacancy,
};
use tracing::{error, info, instrument};

pub use backend::AllocationBackend;

use crate::modules::resource::Outcome;
use crate::utils::Interaction;

pub struct AllocationScreen<B: AllocationBackend = HostelClient> {
    backend: B,
    allocations: Vec<Allocation>,
    students: Vec<Student>,
    available_rooms: Vec<Room>,
    loading: bool,
    form_visible: bool,
    draft: AllocationDraft,
    clock: Clock,
}

impl<B: AllocationBackend> AllocationScreen<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            allocations: Vec::new(),
            students: Vec::new(),
            available_rooms: Vec::new(),
            loading: true,
            form_visible: false,
            draft: AllocationDraft::default(),
            clock: today,
        }
    }

    /// Replace the source of "today" used for check-in and check-out dates.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Rooms with at least one free bed as of the last fetch.
    pub fn available_rooms(&self) -> &[Room] {
        &self.available_rooms
    }

    pub fn find(&self, id: AllocationId) -> Option<&Allocation> {
        self.allocations.iter().find(|a| a.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn draft(&self) -> &AllocationDraft {
        &self.draft
    }

    /// Fetch allocations, students, and rooms concurrently.
    pub async fn mount(&mut self) {
        let (allocations, students, rooms) = tokio::join!(
            self.backend.fetch_allocations(),
            self.backend.fetch_students(),
            self.backend.fetch_rooms(),
        );
        match allocations {
            Ok(allocations) => self.allocations = allocations,
            Err(e) => error!(error = %e, "Error fetching allocations"),
        }
        self.loading = false;
        match students {
            Ok(students) => self.students = students,
            Err(e) => error!(error = %e, "Error fetching students"),
        }
        match rooms {
            Ok(rooms) => self.available_rooms = with_vacancy(rooms),
            Err(e) => error!(error = %e, "Error fetching rooms"),
        }
    }

    pub async fn refresh_allocations(&mut self) {
        match self.backend.fetch_allocations().await {
            Ok(allocations) => self.allocations = allocations,
            Err(e) => error!(error = %e, "Error fetching allocations"),
        }
        self.loading = false;
    }

    pub async fn refresh_rooms(&mut self) {
        match self.backend.fetch_rooms().await {
            Ok(rooms) => self.available_rooms = with_vacancy(rooms),
            Err(e) => error!(error = %e, "Error fetching rooms"),
        }
    }

    async fn refresh_all(&mut self) {
        self.refresh_allocations().await;
        self.refresh_rooms().await;
    }

    /// Show or hide the allocation form. Selections survive a toggle.
    pub fn toggle_form(&mut self) {
        self.form_visible = !self.form_visible;
    }

    pub fn select_student(&mut self, student_id: Option<StudentId>) {
        self.draft.student_id = student_id;
    }

    pub fn select_room(&mut self, room_id: Option<RoomId>) {
        self.draft.room_id = room_id;
    }

    /// Clear both selections and close the form.
    pub fn cancel(&mut self) {
        self.draft = AllocationDraft::default();
        self.form_visible = false;
    }

    /// Whether `action` is currently offered for allocation `id`.
    pub fn offers(&self, id: AllocationId, action: AllocationAction) -> bool {
        self.find(id)
            .is_some_and(|allocation| allocation.actions().contains(&action))
    }

    #[instrument(skip(self, ui))]
    pub async fn submit(&mut self, ui: &dyn Interaction) -> Outcome {
        let Some(request) = self.draft.request() else {
            ui.notify(&format!(
                "Please select: {}",
                self.draft.missing_fields().join(", ")
            ));
            return Outcome::Incomplete;
        };

        match self.backend.allocate(request).await {
            Ok(()) => {
                info!(student_id = %request.student_id, room_id = %request.room_id, "Room allocated");
                ui.notify("Room allocated successfully!");
                self.cancel();
                self.refresh_all().await;
                Outcome::Applied
            }
            Err(e) => {
                ui.notify(&format!("Error: {}", e.user_message()));
                Outcome::Failed
            }
        }
    }

    /// Record today as the check-in date.
    #[instrument(skip(self, ui))]
    pub async fn check_in(&mut self, id: AllocationId, ui: &dyn Interaction) -> Outcome {
        match self.backend.check_in(id, (self.clock)()).await {
            Ok(()) => {
                info!(%id, "Student checked in");
                ui.notify("Student checked in successfully!");
                self.refresh_allocations().await;
                Outcome::Applied
            }
            Err(e) => {
                ui.notify(&format!("Error: {}", e));
                Outcome::Failed
            }
        }
    }

    /// Record today as the check-out date after confirmation.
    #[instrument(skip(self, ui))]
    pub async fn check_out(&mut self, id: AllocationId, ui: &dyn Interaction) -> Outcome {
        if !ui.confirm("Are you sure you want to check out this student?") {
            return Outcome::Declined;
        }
        match self.backend.check_out(id, (self.clock)()).await {
            Ok(()) => {
                info!(%id, "Student checked out");
                ui.notify("Student checked out successfully!");
                self.refresh_all().await;
                Outcome::Applied
            }
            Err(e) => {
                ui.notify(&format!("Error: {}", e));
                Outcome::Failed
            }
        }
    }

    #[instrument(skip(self, ui))]
    pub async fn delete(&mut self, id: AllocationId, ui: &dyn Interaction) -> Outcome {
        if !ui.confirm("Are you sure you want to delete this allocation?") {
            return Outcome::Declined;
        }
        match self.backend.delete(id).await {
            Ok(()) => {
                info!(%id, "Allocation deleted");
                ui.notify("Allocation deleted successfully!");
                self.refresh_all().await;
                Outcome::Applied
            }
            Err(e) => {
                ui.notify(&format!("Error deleting allocation: {}", e));
                Outcome::Failed
            }
        }
    }
}
