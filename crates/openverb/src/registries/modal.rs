use crate::types::ModalEntry;

/// Read-only view over the modals a host can open.
#[derive(Debug, Clone, Default)]
pub struct ModalRegistry {
    modals: Vec<ModalEntry>,
}

impl ModalRegistry {
    pub fn new(modals: Vec<ModalEntry>) -> Self {
        Self { modals }
    }

    pub fn all(&self) -> &[ModalEntry] {
        &self.modals
    }

    pub fn find(&self, id: &str) -> Option<&ModalEntry> {
        self.modals.iter().find(|modal| modal.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_modal_by_id() {
        let registry = ModalRegistry::new(vec![ModalEntry {
            id: "confirm-delete".to_string(),
            title: "Confirm Delete".to_string(),
            description: "Asks the user to confirm a delete action".to_string(),
        }]);
        assert_eq!(registry.all().len(), 1);
        assert_eq!(registry.find("confirm-delete").expect("modal").title, "Confirm Delete");
        assert!(registry.find("share").is_none());
    }
}
