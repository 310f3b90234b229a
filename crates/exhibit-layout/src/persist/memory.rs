//! In-memory save endpoint.

use std::cell::RefCell;
use std::rc::Rc;

use crate::arrangement::ArrangementParams;

use super::{Result, SaveEndpoint};

/// Keeps every save, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemorySaveEndpoint {
    saved: Rc<RefCell<Vec<ArrangementParams>>>,
}

impl MemorySaveEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Vec<ArrangementParams> {
        self.saved.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.saved.borrow().len()
    }

    pub fn last(&self) -> Option<ArrangementParams> {
        self.saved.borrow().last().cloned()
    }
}

impl SaveEndpoint for MemorySaveEndpoint {
    fn save(&mut self, params: &ArrangementParams) -> Result<()> {
        self.saved.borrow_mut().push(params.clone());
        Ok(())
    }
}
