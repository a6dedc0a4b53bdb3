//! Headless cards component: state plus the store and dialogs it drives.

use std::path::Path;

use super::modal::{ModalId, ModalToggle};
use super::state::{CardsState, FormError, NoteForm};
use crate::media;
use crate::models::{Note, NoteId};
use crate::store::NoteStore;

/// Owns the cards state and runs each action end to end, re-fetching the
/// full list after every successful mutation.
pub struct CardsController<S, M> {
    state: CardsState,
    store: S,
    modals: M,
}

impl<S: NoteStore, M: ModalToggle> CardsController<S, M> {
    pub fn new(store: S, modals: M) -> Self {
        Self {
            state: CardsState::new(),
            store,
            modals,
        }
    }

    pub const fn state(&self) -> &CardsState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CardsState {
        &mut self.state
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn modals(&self) -> &M {
        &self.modals
    }

    /// Initial load
    pub async fn init(&mut self) {
        tracing::info!("Loading notes");
        self.refresh().await;
    }

    /// Replace the list with whatever the store holds now
    pub async fn refresh(&mut self) {
        match self.store.list().await {
            Ok(notes) => self.state.replace_notes(notes),
            Err(error) => self.state.notes_failed(&error),
        }
    }

    /// Read a local image and attach it to the working buffer
    pub async fn select_image(&mut self, path: &Path) {
        let ticket = self.state.begin_image_decode();
        let result = media::read_image_data_url(path).await;
        self.state.finish_image_decode(ticket, result);
    }

    pub fn open_add(&mut self) {
        self.state.open_add(&mut self.modals);
    }

    /// Submit the add form. Invalid forms are not sent; store failures end up
    /// in the alert banner.
    pub async fn submit_create(&mut self, form: &NoteForm) -> Result<(), FormError> {
        let fields = self.state.prepare_create(form)?;
        match self.store.create(&fields).await {
            Ok(id) => {
                self.state.create_succeeded(id.as_ref(), &mut self.modals);
                self.refresh().await;
            }
            Err(error) => self.state.create_failed(&error),
        }
        Ok(())
    }

    pub fn open_edit(&mut self, note: &Note) {
        self.state.open_edit(note, &mut self.modals);
    }

    /// Submit the whole working buffer as the new value of its note
    pub async fn submit_update(&mut self) -> Result<(), FormError> {
        let (id, note) = self.state.prepare_update()?;
        match self.store.update(&id, &note).await {
            Ok(()) => {
                self.state.update_succeeded(&id, &mut self.modals);
                self.refresh().await;
            }
            Err(error) => self.state.update_failed(&error),
        }
        Ok(())
    }

    pub async fn delete(&mut self, id: &NoteId) {
        match self.store.delete(id).await {
            Ok(()) => {
                self.state.delete_succeeded(id);
                self.refresh().await;
            }
            Err(error) => self.state.delete_failed(&error),
        }
    }

    pub fn close_modal(&mut self, modal: ModalId) {
        self.state.close_modal(modal, &mut self.modals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::modal::ModalStates;
    use crate::cards::state::{AlertKind, MSG_LOAD_FAILED};
    use crate::models::NoteFields;
    use crate::store::{MemoryNoteStore, StoreRequest};
    use pretty_assertions::assert_eq;
    use std::io::Write as _;

    type Controller = CardsController<MemoryNoteStore, ModalStates>;

    fn controller() -> Controller {
        CardsController::new(MemoryNoteStore::new(), ModalStates::new())
    }

    fn form(title: &str, description: &str) -> NoteForm {
        NoteForm {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    fn posted(ctl: &Controller) -> Vec<NoteFields> {
        ctl.store()
            .requests()
            .into_iter()
            .filter_map(|request| match request {
                StoreRequest::Create(fields) => Some(fields),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn init_loads_existing_notes() {
        let mut ctl = controller();
        let id = ctl.store().insert(NoteFields {
            title: "Existing".into(),
            ..NoteFields::default()
        });

        ctl.init().await;

        assert_eq!(ctl.state().notes().len(), 1);
        assert_eq!(ctl.state().notes()[0].id.as_ref(), Some(&id));
    }

    #[tokio::test]
    async fn init_with_empty_store_is_not_a_failure() {
        let mut ctl = controller();
        ctl.init().await;
        assert!(ctl.state().notes().is_empty());
        assert_eq!(ctl.state().alert(), None);
    }

    #[tokio::test]
    async fn failed_load_raises_banner() {
        let mut ctl = controller();
        ctl.store().set_offline(true);
        ctl.init().await;
        assert_eq!(ctl.state().alert_kind(), AlertKind::Danger);
        assert_eq!(ctl.state().alert_message(), MSG_LOAD_FAILED);
    }

    #[tokio::test]
    async fn create_then_list_round_trip() {
        let mut ctl = controller();
        ctl.open_add();

        ctl.submit_create(&form("A", "B")).await.unwrap();

        let notes = ctl.state().notes();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "A");
        assert_eq!(notes[0].description, "B");
        assert_eq!(notes[0].image_url, "");
        assert!(notes[0].id.is_some());
        assert_eq!(ctl.store().requests().last(), Some(&StoreRequest::List));
    }

    #[tokio::test]
    async fn create_without_image_posts_empty_image_and_resets() {
        let mut ctl = controller();
        ctl.open_add();
        assert!(ctl.modals().is_shown(ModalId::Add));

        ctl.submit_create(&form("Groceries", "Milk, eggs"))
            .await
            .unwrap();

        assert_eq!(
            posted(&ctl),
            vec![NoteFields {
                title: "Groceries".into(),
                description: "Milk, eggs".into(),
                image_url: String::new(),
            }]
        );
        assert_eq!(ctl.state().current_note(), &Note::blank());
        assert!(!ctl.modals().is_shown(ModalId::Add));
        assert_eq!(ctl.state().alert_kind(), AlertKind::Success);
    }

    #[tokio::test]
    async fn invalid_form_is_not_posted() {
        let mut ctl = controller();
        let result = ctl.submit_create(&form("", "body")).await;
        assert_eq!(result, Err(FormError::MissingTitle));
        assert!(ctl.store().requests().is_empty());
    }

    #[tokio::test]
    async fn selected_image_is_posted_as_data_url() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&[0x89, b'P', b'N', b'G']).unwrap();

        let mut ctl = controller();
        ctl.open_add();
        ctl.select_image(file.path()).await;
        ctl.submit_create(&form("Pic", "with image")).await.unwrap();

        let image_url = &posted(&ctl)[0].image_url;
        assert!(image_url.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn submit_before_decode_finishes_posts_previous_image() {
        let mut ctl = controller();
        ctl.open_add();
        ctl.state_mut().current_note_mut().image_url = "data:image/png;base64,OLD=".into();
        let ticket = ctl.state_mut().begin_image_decode();

        ctl.submit_create(&form("Early", "submit")).await.unwrap();
        let applied = ctl
            .state_mut()
            .finish_image_decode(ticket, Ok("data:image/png;base64,NEW=".into()));

        assert_eq!(posted(&ctl)[0].image_url, "data:image/png;base64,OLD=");
        assert!(!applied);
        assert_eq!(ctl.state().current_note().image_url, "");
    }

    #[tokio::test]
    async fn update_puts_full_note_and_closes_edit_dialog() {
        let mut ctl = controller();
        let id = ctl.store().insert(NoteFields {
            title: "Trip".into(),
            description: "Pack bags".into(),
            image_url: "data:image/png;base64,AA==".into(),
        });
        ctl.init().await;

        let selected = ctl.state().notes()[0].clone();
        ctl.open_edit(&selected);
        assert!(ctl.modals().is_shown(ModalId::Edit));
        ctl.state_mut().current_note_mut().description = "Pack bags and passport".into();

        ctl.submit_update().await.unwrap();

        let expected = Note {
            id: Some(id.clone()),
            title: "Trip".into(),
            description: "Pack bags and passport".into(),
            image_url: "data:image/png;base64,AA==".into(),
        };
        assert!(ctl
            .store()
            .requests()
            .contains(&StoreRequest::Update(id.clone(), expected)));
        assert!(!ctl.modals().is_shown(ModalId::Edit));
        assert_eq!(ctl.state().alert_kind(), AlertKind::Success);
        assert_eq!(
            ctl.state().notes()[0].description,
            "Pack bags and passport"
        );
    }

    #[tokio::test]
    async fn update_sends_empty_fields_without_validation() {
        let mut ctl = controller();
        let id = ctl.store().insert(NoteFields {
            title: "Trip".into(),
            description: "Pack bags".into(),
            image_url: String::new(),
        });
        ctl.init().await;
        let selected = ctl.state().notes()[0].clone();
        ctl.open_edit(&selected);
        ctl.state_mut().current_note_mut().title.clear();
        ctl.state_mut().current_note_mut().description.clear();

        ctl.submit_update().await.unwrap();

        let expected = Note {
            id: Some(id.clone()),
            ..Note::blank()
        };
        assert!(ctl
            .store()
            .requests()
            .contains(&StoreRequest::Update(id.clone(), expected)));
        assert_eq!(ctl.store().get(&id), Some(NoteFields::default()));
        assert_eq!(ctl.state().alert_kind(), AlertKind::Success);
    }

    #[tokio::test]
    async fn failed_update_keeps_dialog_and_buffer() {
        let mut ctl = controller();
        ctl.store().insert(NoteFields {
            title: "Trip".into(),
            ..NoteFields::default()
        });
        ctl.init().await;
        let selected = ctl.state().notes()[0].clone();
        ctl.open_edit(&selected);
        ctl.store().set_offline(true);

        ctl.submit_update().await.unwrap();

        assert!(ctl.modals().is_shown(ModalId::Edit));
        assert_eq!(ctl.state().current_note(), &selected);
        assert_eq!(ctl.state().alert_kind(), AlertKind::Danger);
    }

    #[tokio::test]
    async fn delete_refreshes_list() {
        let mut ctl = controller();
        let id = ctl.store().insert(NoteFields::default());
        ctl.init().await;

        ctl.delete(&id).await;

        assert!(ctl.state().notes().is_empty());
        assert_eq!(ctl.state().alert_kind(), AlertKind::Success);
    }

    #[tokio::test]
    async fn deleting_unknown_id_raises_banner() {
        let mut ctl = controller();
        let missing: NoteId = "nope".parse().unwrap();

        ctl.delete(&missing).await;

        assert_eq!(ctl.state().alert_kind(), AlertKind::Danger);
    }

    #[tokio::test]
    async fn failing_delete_leaves_list_unchanged() {
        let mut ctl = controller();
        let id = ctl.store().insert(NoteFields {
            title: "Keep me".into(),
            ..NoteFields::default()
        });
        ctl.init().await;
        let before = ctl.state().notes().to_vec();
        ctl.store().set_offline(true);

        ctl.delete(&id).await;

        assert_eq!(ctl.state().notes(), before.as_slice());
        assert_eq!(ctl.state().alert_kind(), AlertKind::Danger);
    }
}
