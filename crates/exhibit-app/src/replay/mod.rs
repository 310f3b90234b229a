//! Headless replay of editor events against a LayoutController.

mod report;
mod script;

pub use report::Report;
pub use script::{load_script, parse_script, ScriptEvent};

use std::path::Path;

use exhibit_common::{ExhibitError, Rect, Result};
use exhibit_config::ExhibitConfig;
use exhibit_layout::{
    InitialState, JsonLinesSaveEndpoint, LayoutCommand, LayoutController, MemorySaveEndpoint,
    RecordingAnimator, SaveEndpoint,
};
use tracing::{debug, info};

use crate::cli::Args;
use crate::options::controller_options;

/// Build a controller from the CLI arguments, replay the script and report.
pub fn run(args: &Args, config: &ExhibitConfig) -> Result<Report> {
    let initial = match &args.initial {
        Some(path) => load_initial(path)?,
        None => InitialState::default(),
    };
    let events = match &args.script {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };
    let save_endpoint: Box<dyn SaveEndpoint> = match &args.save_to {
        Some(path) => Box::new(JsonLinesSaveEndpoint::new(path)),
        None => Box::new(MemorySaveEndpoint::new()),
    };

    let animator = RecordingAnimator::new();
    let mut controller = LayoutController::new(
        &initial,
        Rect::new(0.0, 0.0, args.width, args.height),
        controller_options(config),
        Box::new(animator.clone()),
        save_endpoint,
    );

    let (applied, saves) = replay(&mut controller, &events)?;
    info!(events = events.len(), applied, saves, "replay finished");

    Ok(Report {
        params: controller.serialize_for_save(),
        layout: controller.layout().clone(),
        saves,
        applied,
        animator_calls: animator.calls().len(),
    })
}

/// Feed events to the controller in order. Returns `(applied, saves)`.
///
/// Stops at the first failed save.
pub fn replay(controller: &mut LayoutController, events: &[ScriptEvent]) -> Result<(usize, usize)> {
    let mut applied = 0;
    let mut saves = 0;
    for (index, event) in events.iter().enumerate() {
        let command = event.to_command();
        let saving = matches!(command, LayoutCommand::EndDrag | LayoutCommand::Save);
        let changed = controller.execute(command)?;
        debug!(index, ?event, changed, "event replayed");
        if changed {
            applied += 1;
            if saving {
                saves += 1;
            }
        }
    }
    Ok((applied, saves))
}

fn load_initial(path: &Path) -> Result<InitialState> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json)
        .map_err(|e| ExhibitError::Other(format!("invalid initial state {}: {e}", path.display())))
}
