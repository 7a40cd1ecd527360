use {
    crate::{
        engine::{CandlesResponse, ErrorResponse},
        utils::{TimeUtils, epoch_ms_to_date_string},
    },
    anyhow::Result,
    clap::ValueEnum,
    tabled::{Table, Tabled, settings::Style},
};

/// How the command line prints a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON, one line
    #[default]
    Json,
    /// Indented JSON
    Pretty,
    /// Human readable table
    Table,
}

#[derive(Tabled)]
struct CandleRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    time: i64,
    #[tabled(rename = "Open")]
    open: String,
    #[tabled(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    low: String,
    #[tabled(rename = "Close")]
    close: String,
}

pub fn render_response(response: &CandlesResponse, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string(response)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(response)?,
        OutputFormat::Table => {
            let rows = response.candles.iter().map(|c| CandleRow {
                date: epoch_ms_to_date_string(c.time * TimeUtils::MS_IN_S),
                time: c.time,
                open: format!("{:.2}", c.open),
                high: format!("{:.2}", c.high),
                low: format!("{:.2}", c.low),
                close: format!("{:.2}", c.close),
            });
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            format!(
                "{} vs {} - {}\n{}",
                response.symbol, response.benchmark, response.timeframe, table
            )
        }
    };
    Ok(text)
}

pub fn render_error(error: &ErrorResponse, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(error)?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string(error)?,
    };
    Ok(text)
}
