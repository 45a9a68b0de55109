use super::chart_model::ChartFrame;

/// Drawing surface for the stock chart.
///
/// Rendering is fire-and-forget: the dashboard hands over a finished frame and
/// does not wait for or inspect the result. Values in an indexed frame are
/// already normalized; presenters must not transform them again.
pub trait ChartPresenter: Send + Sync {
    /// Replace the displayed data with `frame` and redraw.
    fn render(&self, frame: &ChartFrame);
}
