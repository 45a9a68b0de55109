use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use super::chart_model::ChartFrame;
use super::chart_traits::ChartPresenter;

/// Presenter that keeps the last frame in memory.
///
/// Used by headless front ends and tests; `redraw_count` tells how many frames
/// were pushed.
#[derive(Default)]
pub struct InMemoryChart {
    current: RwLock<Option<ChartFrame>>,
    redraws: AtomicUsize,
}

impl InMemoryChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<ChartFrame> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws.load(Ordering::SeqCst)
    }
}

impl ChartPresenter for InMemoryChart {
    fn render(&self, frame: &ChartFrame) {
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(frame.clone());
        self.redraws.fetch_add(1, Ordering::SeqCst);
    }
}
