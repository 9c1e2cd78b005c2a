//! The list/create/edit/delete screen shared by students, hostels, and rooms.
//!
//! A [`CrudScreen`] owns the local copy of one collection plus the state of
//! its create/edit form. Every mutation is a single request followed by a
//! full re-fetch; nothing is patched locally and derived fields are always
//! taken from the backend.

pub mod interactive;

use async_trait::async_trait;
use hostel_client::ApiError;
use hostel_core::format_errors;
use hostel_models::Resource;
use tracing::{error, info, instrument};
use validator::Validate;

use crate::utils::Interaction;

pub type DraftOf<A> = <<A as ResourceApi>::Entity as Resource>::Draft;
pub type IdOf<A> = <<A as ResourceApi>::Entity as Resource>::Id;

/// The four backend calls a [`CrudScreen`] needs.
///
/// Writes only report whether the backend applied them; the screen re-fetches
/// afterwards instead of reading the reply.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    type Entity: Resource;

    async fn fetch_all(&self) -> Result<Vec<Self::Entity>, ApiError>;

    async fn create(&self, draft: &DraftOf<Self>) -> Result<(), ApiError>;

    async fn update(&self, id: IdOf<Self>, draft: &DraftOf<Self>) -> Result<(), ApiError>;

    async fn delete(&self, id: IdOf<Self>) -> Result<(), ApiError>;
}

/// Result of a user-initiated action on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The backend accepted the request and the screen re-fetched.
    Applied,
    /// The user declined the confirmation; nothing was sent.
    Declined,
    /// Required form fields are missing; nothing was sent.
    Incomplete,
    /// The request failed; local state is unchanged.
    Failed,
}

pub struct CrudScreen<A: ResourceApi> {
    api: A,
    items: Vec<A::Entity>,
    loading: bool,
    form_visible: bool,
    editing: Option<A::Entity>,
    draft: DraftOf<A>,
}

impl<A: ResourceApi> CrudScreen<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            items: Vec::new(),
            loading: true,
            form_visible: false,
            editing: None,
            draft: DraftOf::<A>::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn items(&self) -> &[A::Entity] {
        &self.items
    }

    pub fn find(&self, id: IdOf<A>) -> Option<&A::Entity> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn editing(&self) -> Option<&A::Entity> {
        self.editing.as_ref()
    }

    pub fn draft(&self) -> &DraftOf<A> {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftOf<A> {
        &mut self.draft
    }

    /// Initial load.
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Replace the collection with the backend's current state.
    ///
    /// A failure is logged and leaves the previous items in place.
    #[instrument(skip(self), fields(resource = A::Entity::NOUN))]
    pub async fn refresh(&mut self) {
        match self.api.fetch_all().await {
            Ok(items) => self.items = items,
            Err(e) => error!(error = %e, "Error fetching {}s", noun(A::Entity::NOUN)),
        }
        self.loading = false;
    }

    /// Show or hide the form. The draft is kept either way.
    pub fn toggle_form(&mut self) {
        self.form_visible = !self.form_visible;
    }

    pub fn begin_edit(&mut self, entity: &A::Entity) {
        self.draft = entity.draft();
        self.editing = Some(entity.clone());
        self.form_visible = true;
    }

    /// Reset the draft, forget the edit target, and close the form.
    pub fn cancel(&mut self) {
        self.draft = DraftOf::<A>::default();
        self.editing = None;
        self.form_visible = false;
    }

    /// Create or update from the current draft.
    ///
    /// On failure the form stays open with the draft exactly as entered.
    #[instrument(skip(self, ui), fields(resource = A::Entity::NOUN))]
    pub async fn submit(&mut self, ui: &dyn Interaction) -> Outcome {
        if let Err(errors) = self.draft.validate() {
            ui.notify(&format!("Please fix the form: {}", format_errors(&errors)));
            return Outcome::Incomplete;
        }

        let result = match &self.editing {
            Some(entity) => self
                .api
                .update(entity.id(), &self.draft)
                .await
                .map(|()| "updated"),
            None => self.api.create(&self.draft).await.map(|()| "created"),
        };

        match result {
            Ok(verb) => {
                info!("{} {}", A::Entity::NOUN, verb);
                ui.notify(&format!("{} {} successfully!", A::Entity::NOUN, verb));
                self.cancel();
                self.refresh().await;
                Outcome::Applied
            }
            Err(e) => {
                ui.notify(&format!("Error: {}", e.user_message()));
                Outcome::Failed
            }
        }
    }

    #[instrument(skip(self, ui), fields(resource = A::Entity::NOUN))]
    pub async fn delete(&mut self, id: IdOf<A>, ui: &dyn Interaction) -> Outcome {
        let noun = noun(A::Entity::NOUN);
        if !ui.confirm(&format!("Are you sure you want to delete this {}?", noun)) {
            return Outcome::Declined;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                info!(%id, "{} deleted", A::Entity::NOUN);
                ui.notify(&format!("{} deleted successfully!", A::Entity::NOUN));
                self.refresh().await;
                Outcome::Applied
            }
            Err(e) => {
                ui.notify(&format!("Error deleting {}: {}", noun, e));
                Outcome::Failed
            }
        }
    }
}

/// Lower-case form of an entity noun for sentences.
pub fn noun(name: &str) -> String {
    name.to_lowercase()
}
