use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, info, warn};
use tickerboard_market_data::{QuoteSource, Symbol, TimeSeries};

use crate::chart::{ChartDataset, ChartFrame, ChartPresenter, DatasetStyle, DisplayMode};
use crate::errors::{Error, Result};
use crate::series::{align, normalize_gapped};

use super::dashboard_model::{DashboardConfig, DashboardState, Notice, Phase, RefreshOutcome};
use super::dashboard_traits::Notifier;

/// Drives the stock chart from user events.
///
/// Every event issues a refresh with the next sequence number. When a refresh
/// completes it is applied only if no newer one was issued in the meantime, so
/// the chart always ends up showing the latest selection no matter in which
/// order responses arrive. A failed refresh publishes a [`Notice`] and leaves
/// the chart as it was.
pub struct DashboardController {
    config: DashboardConfig,
    quotes: Arc<dyn QuoteSource>,
    presenter: Arc<dyn ChartPresenter>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<DashboardState>,
}

impl DashboardController {
    pub fn new(
        config: DashboardConfig,
        quotes: Arc<dyn QuoteSource>,
        presenter: Arc<dyn ChartPresenter>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        DashboardController {
            config,
            quotes,
            presenter,
            notifier,
            state: Mutex::new(DashboardState::default()),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> DashboardState {
        self.lock_state().clone()
    }

    // The lock is never held across an await point.
    fn lock_state(&self) -> MutexGuard<'_, DashboardState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Show the configured initial symbol.
    pub async fn initial_load(&self) -> RefreshOutcome {
        self.lock_state().symbol = Some(self.config.initial_symbol.clone());
        self.refresh().await
    }

    /// Switch the chart to `raw` (case-insensitive).
    ///
    /// An empty symbol is rejected with a notice and does not start a refresh.
    pub async fn select_symbol(&self, raw: &str) -> RefreshOutcome {
        match Symbol::parse(raw) {
            Ok(symbol) => {
                self.lock_state().symbol = Some(symbol);
                self.refresh().await
            }
            Err(e) => {
                let notice = Notice::from_error(None, &Error::from(e));
                let mut state = self.lock_state();
                self.publish(&mut state, notice)
            }
        }
    }

    /// Show or hide the reference series. Also flips the display mode.
    pub async fn set_comparison(&self, enabled: bool) -> RefreshOutcome {
        self.lock_state().comparison = enabled;
        self.refresh().await
    }

    /// Refetch and redraw with the current selection.
    pub async fn refresh(&self) -> RefreshOutcome {
        let (seq, symbol, comparison) = {
            let mut state = self.lock_state();
            state.issued_seq += 1;
            state.phase = Phase::Refreshing;
            let symbol = state
                .symbol
                .get_or_insert_with(|| self.config.initial_symbol.clone())
                .clone();
            (state.issued_seq, symbol, state.comparison)
        };

        debug!(
            "Refresh #{} for {} (comparison: {})",
            seq, symbol, comparison
        );

        let result = self.load_frame(&symbol, comparison).await;

        let mut state = self.lock_state();
        if state.issued_seq != seq {
            debug!(
                "Dropping refresh #{} for {}, superseded by #{}",
                seq, symbol, state.issued_seq
            );
            return RefreshOutcome::Superseded;
        }

        state.phase = Phase::Idle;
        match result {
            Ok(frame) => {
                self.presenter.render(&frame);
                state.applied_seq = seq;
                state.last_notice = None;
                info!(
                    "Rendered {} bars for {} in {:?} mode",
                    frame.labels.len(),
                    symbol,
                    frame.mode
                );
                RefreshOutcome::Rendered(frame)
            }
            Err(e) => {
                warn!("Refresh #{} for {} failed: {}", seq, symbol, e);
                let notice = Notice::from_error(Some(&symbol), &e);
                self.publish(&mut state, notice)
            }
        }
    }

    fn publish(&self, state: &mut DashboardState, notice: Notice) -> RefreshOutcome {
        self.notifier.notify(&notice);
        state.last_notice = Some(notice.clone());
        RefreshOutcome::Failed(notice)
    }

    async fn load_frame(&self, symbol: &Symbol, comparison: bool) -> Result<ChartFrame> {
        let interval = self.config.interval;
        let range = self.config.range;

        if comparison {
            let (primary, reference) = tokio::try_join!(
                self.quotes.fetch_series(symbol, interval, range),
                self.quotes
                    .fetch_series(&self.config.reference_symbol, interval, range),
            )?;
            build_frame(
                symbol,
                &primary,
                Some((self.config.reference_label.as_str(), &reference)),
            )
        } else {
            let primary = self.quotes.fetch_series(symbol, interval, range).await?;
            build_frame(symbol, &primary, None)
        }
    }
}

/// Assemble the chart frame for `primary`, optionally overlaid with a labelled
/// reference series.
///
/// The reference is aligned onto the primary's labels. With a reference the
/// frame is indexed and both series are rescaled to start at 100; a reference
/// without any bar on the primary's dates is drawn as gaps only.
pub fn build_frame(
    symbol: &Symbol,
    primary: &TimeSeries,
    reference: Option<(&str, &TimeSeries)>,
) -> Result<ChartFrame> {
    let primary_data = primary.values();
    if primary_data.iter().all(Option::is_none) {
        return Err(Error::NoData(symbol.to_string()));
    }

    let labels = primary.labels();
    let mode = DisplayMode::for_comparison(reference.is_some());

    let (primary_data, reference) = match reference {
        None => (primary_data, None),
        Some((label, series)) => {
            let aligned = align(&labels, series);
            let aligned = if aligned.iter().any(Option::is_some) {
                normalize_gapped(&aligned)?
            } else {
                aligned
            };
            (
                normalize_gapped(&primary_data)?,
                Some(ChartDataset::new(label, aligned, DatasetStyle::reference())),
            )
        }
    };

    Ok(ChartFrame {
        labels,
        primary: ChartDataset::new(symbol.as_str(), primary_data, DatasetStyle::primary()),
        reference,
        mode,
    })
}
