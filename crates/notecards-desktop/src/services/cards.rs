//! Store round trips for the cards view
//!
//! Each action reads what it needs from [`AppState`], awaits the store with no
//! signal borrowed, then applies the outcome. Every successful mutation is
//! followed by a full re-fetch.

use dioxus::prelude::*;

use notecards_core::cards::NoteForm;
use notecards_core::media::image_data_url;
use notecards_core::store::NoteStore;
use notecards_core::NoteId;

use crate::state::AppState;

/// Replace the note list with the store's current contents.
pub async fn refresh_notes(state: AppState) {
    let Some(store) = state.store() else {
        return;
    };
    let result = store.list().await;

    let mut cards = state.cards;
    match result {
        Ok(notes) => cards.write().replace_notes(notes),
        Err(error) => cards.write().notes_failed(&error),
    }
}

/// Submit the add form.
pub async fn submit_create(state: AppState) {
    let form = state.add_form.read().clone();
    let prepared = state.cards.read().prepare_create(&form);
    let fields = match prepared {
        Ok(fields) => fields,
        Err(error) => {
            tracing::debug!("Add form not submitted: {}", error);
            return;
        }
    };
    let Some(store) = state.store() else {
        return;
    };

    let result = store.create(&fields).await;

    let mut cards = state.cards;
    match result {
        Ok(id) => {
            let mut modals = state.modals;
            let mut add_form = state.add_form;
            cards.write().create_succeeded(id.as_ref(), &mut modals);
            add_form.set(NoteForm::default());
            refresh_notes(state).await;
        }
        Err(error) => cards.write().create_failed(&error),
    }
}

/// Submit the edit dialog's working buffer.
pub async fn submit_update(state: AppState) {
    let prepared = state.cards.read().prepare_update();
    let (id, note) = match prepared {
        Ok(prepared) => prepared,
        Err(error) => {
            tracing::warn!("Edit form not submitted: {}", error);
            return;
        }
    };
    let Some(store) = state.store() else {
        return;
    };

    let result = store.update(&id, &note).await;

    let mut cards = state.cards;
    match result {
        Ok(()) => {
            let mut modals = state.modals;
            cards.write().update_succeeded(&id, &mut modals);
            refresh_notes(state).await;
        }
        Err(error) => cards.write().update_failed(&error),
    }
}

pub async fn delete_note(state: AppState, id: NoteId) {
    let Some(store) = state.store() else {
        return;
    };

    let result = store.delete(&id).await;

    let mut cards = state.cards;
    match result {
        Ok(()) => {
            cards.write().delete_succeeded(&id);
            refresh_notes(state).await;
        }
        Err(error) => cards.write().delete_failed(&error),
    }
}

/// Let the user pick a local image and attach it to the working buffer.
///
/// Submit buttons stay disabled while the file is being read.
pub async fn pick_image(state: AppState) {
    let Some(file) = rfd::AsyncFileDialog::new()
        .set_title("Select image")
        .pick_file()
        .await
    else {
        return;
    };

    let mut cards = state.cards;
    let ticket = cards.write().begin_image_decode();

    let file_name = file.file_name();
    let bytes = file.read().await;
    tracing::debug!("Read {} bytes from {}", bytes.len(), file_name);
    let data_url = image_data_url(&file_name, &bytes);

    cards.write().finish_image_decode(ticket, Ok(data_url));
}
