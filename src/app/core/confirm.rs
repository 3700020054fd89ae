use crate::app::types::ItemId;

/// Button focused in the delete confirmation dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConfirmChoice {
    #[default]
    Cancel,
    Delete,
}

impl ConfirmChoice {
    pub fn toggle(self) -> Self {
        match self {
            ConfirmChoice::Cancel => ConfirmChoice::Delete,
            ConfirmChoice::Delete => ConfirmChoice::Cancel,
        }
    }
}

/// Delete confirmation state.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum DeleteConfirm {
    #[default]
    Idle,
    Confirming { id: ItemId, choice: ConfirmChoice },
}

impl DeleteConfirm {
    pub fn request(id: ItemId) -> Self {
        DeleteConfirm::Confirming {
            id,
            choice: ConfirmChoice::default(),
        }
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self, DeleteConfirm::Confirming { .. })
    }

    pub fn pending(&self) -> Option<&ItemId> {
        match self {
            DeleteConfirm::Idle => None,
            DeleteConfirm::Confirming { id, .. } => Some(id),
        }
    }

    pub fn toggle_choice(&mut self) {
        if let DeleteConfirm::Confirming { choice, .. } = self {
            *choice = choice.toggle();
        }
    }

    pub fn choice(&self) -> Option<ConfirmChoice> {
        match self {
            DeleteConfirm::Idle => None,
            DeleteConfirm::Confirming { choice, .. } => Some(*choice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_starts_on_cancel() {
        let state = DeleteConfirm::request("2".into());
        assert!(state.is_confirming());
        assert_eq!(state.pending(), Some(&ItemId::from("2")));
        assert_eq!(state.choice(), Some(ConfirmChoice::Cancel));
    }

    #[test]
    fn toggle_choice_is_ignored_when_idle() {
        let mut state = DeleteConfirm::Idle;
        state.toggle_choice();
        assert_eq!(state, DeleteConfirm::Idle);

        let mut state = DeleteConfirm::request("1".into());
        state.toggle_choice();
        assert_eq!(state.choice(), Some(ConfirmChoice::Delete));
    }
}
