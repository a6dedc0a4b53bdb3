//! Dialog identifiers and the show/hide capability the cards component drives.

/// The two dialogs the cards component owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    Add,
    Edit,
}

impl ModalId {
    /// Stable element id for the dialog's root node
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Add => "add-note-modal",
            Self::Edit => "edit-note-modal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVisibility {
    #[default]
    Hidden,
    Shown,
}

/// Imperative show/hide capability supplied by the hosting UI.
pub trait ModalToggle {
    fn show(&mut self, modal: ModalId);
    fn hide(&mut self, modal: ModalId);
}

/// Plain per-dialog visibility tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalStates {
    add: ModalVisibility,
    edit: ModalVisibility,
}

impl ModalStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn visibility(&self, modal: ModalId) -> ModalVisibility {
        match modal {
            ModalId::Add => self.add,
            ModalId::Edit => self.edit,
        }
    }

    #[must_use]
    pub fn is_shown(&self, modal: ModalId) -> bool {
        self.visibility(modal) == ModalVisibility::Shown
    }

    fn slot(&mut self, modal: ModalId) -> &mut ModalVisibility {
        match modal {
            ModalId::Add => &mut self.add,
            ModalId::Edit => &mut self.edit,
        }
    }
}

impl ModalToggle for ModalStates {
    fn show(&mut self, modal: ModalId) {
        *self.slot(modal) = ModalVisibility::Shown;
    }

    fn hide(&mut self, modal: ModalId) {
        *self.slot(modal) = ModalVisibility::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialogs_start_hidden() {
        let states = ModalStates::new();
        assert_eq!(states.visibility(ModalId::Add), ModalVisibility::Hidden);
        assert_eq!(states.visibility(ModalId::Edit), ModalVisibility::Hidden);
    }

    #[test]
    fn show_and_hide_are_independent_per_dialog() {
        let mut states = ModalStates::new();
        states.show(ModalId::Edit);
        assert!(states.is_shown(ModalId::Edit));
        assert!(!states.is_shown(ModalId::Add));

        states.hide(ModalId::Edit);
        assert!(!states.is_shown(ModalId::Edit));
    }

    #[test]
    fn element_ids_are_distinct() {
        assert_ne!(ModalId::Add.element_id(), ModalId::Edit.element_id());
    }
}
