use tickerboard_core::{ChartFrame, ChartPresenter, Notice, Notifier};

/// Prints every frame as a table on stdout.
pub struct ConsoleChart;

impl ConsoleChart {
    pub fn render_table(frame: &ChartFrame) -> String {
        let reference = frame.reference.as_ref();
        let mut out = format!("{:<12}{:>14}", "date", frame.primary.label);
        if let Some(reference) = reference {
            out.push_str(&format!("{:>14}", reference.label));
        }
        out.push('\n');

        for (i, label) in frame.labels.iter().enumerate() {
            let cell = |value: Option<f64>| match value {
                Some(v) => frame.format_tick(v),
                None => "-".to_string(),
            };
            out.push_str(&format!(
                "{:<12}{:>14}",
                label,
                cell(frame.primary.data.get(i).copied().flatten())
            ));
            if let Some(reference) = reference {
                out.push_str(&format!(
                    "{:>14}",
                    cell(reference.data.get(i).copied().flatten())
                ));
            }
            out.push('\n');
        }
        out
    }
}

impl ChartPresenter for ConsoleChart {
    fn render(&self, frame: &ChartFrame) {
        println!("{}", Self::render_table(frame));
    }
}

/// Prints notices on stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        eprintln!("! {}", notice.message);
    }
}
