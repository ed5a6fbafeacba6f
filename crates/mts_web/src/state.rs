use mts_core::SummaryBounds;
use mts_inference::Pipelines;

pub struct AppState {
    pub pipelines: Pipelines,
    pub summary_bounds: SummaryBounds,
}

impl AppState {
    pub fn new(pipelines: Pipelines, summary_bounds: SummaryBounds) -> Self {
        Self {
            pipelines,
            summary_bounds,
        }
    }
}
