use exhibit_layout::{ArrangementParams, Layout};
use serde::Serialize;

/// Summary printed after a replay.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub params: ArrangementParams,
    pub layout: Layout,
    pub saves: usize,
    /// Events that changed something.
    pub applied: usize,
    pub animator_calls: usize,
}
