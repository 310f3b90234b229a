//! Handing the arrangement to the save endpoint.

use tracing::{info, warn};

use crate::arrangement::ArrangementParams;

use super::LayoutController;

impl LayoutController {
    pub fn serialize_for_save(&self) -> ArrangementParams {
        self.state.to_params(self.record_id)
    }

    /// Hand the current arrangement to the save endpoint. No retry.
    pub fn save(&mut self) -> exhibit_common::Result<()> {
        let params = self.serialize_for_save();
        match self.save_endpoint.save(&params) {
            Ok(()) => {
                info!(record_id = params.record_id, "arrangement persisted");
                Ok(())
            }
            Err(e) => {
                warn!(record_id = params.record_id, error = %e, "save failed");
                Err(e.into())
            }
        }
    }
}
