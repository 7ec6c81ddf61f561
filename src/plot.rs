//! Chart Rendering
//!
//! Builds a `plotly` line chart from a synthesized waveform, with the
//! two-decimal time labels as x-axis categories for direct use as a chart's
//! x/y series. This is display glue; the synthesizer never calls it.

use plotly::common::{Mode, Title};
use plotly::{Layout, Plot, Scatter};

use crate::scheme::ModulationScheme;
use crate::waveform::Waveform;

/// Build a line chart of `waveform`, one trace named after the scheme
pub fn waveform_chart(waveform: &Waveform, scheme: ModulationScheme) -> Plot {
    let trace = Scatter::new(waveform.time_labels(), waveform.amplitudes().to_vec())
        .mode(Mode::Lines)
        .name(&format!("{scheme} Signal"));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(Layout::new().title(Title::with_text(format!("{scheme} Waveform"))));
    plot
}

/// Render the chart to a standalone interactive HTML file
pub fn write_html(waveform: &Waveform, scheme: ModulationScheme, path: &str) {
    waveform_chart(waveform, scheme).write_html(path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modulation::synthesize;

    #[test]
    fn test_write_html_produces_a_chart_file() {
        let waveform = synthesize("101001", ModulationScheme::Ask).unwrap();
        let path = std::env::temp_dir().join("modscope_ask_chart.html");
        let path = path.to_str().unwrap();

        write_html(&waveform, ModulationScheme::Ask, path);

        let html = std::fs::read_to_string(path).unwrap();
        assert!(html.contains("ASK Signal"));

        std::fs::remove_file(path).ok();
    }
}
