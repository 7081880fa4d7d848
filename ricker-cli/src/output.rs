//! Rendering of conversion results.

use anyhow::{Context, Result};
use clap::ValueEnum;
use ricker_span::{Quantity, RickerSpan};
use serde::Serialize;
use std::fmt::Write;

/// Output format for conversion results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One labelled line per quantity
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Configuration for rendering a [`RickerSpan`].
#[derive(Debug, Clone)]
pub struct OutputConfig {
    precision: usize,
    format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: 6,
            format: OutputFormat::Text,
        }
    }
}

impl OutputConfig {
    /// Create a new OutputConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of decimal places.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set the output format.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Get the number of decimal places.
    pub fn get_precision(&self) -> usize {
        self.precision
    }

    /// Get the output format.
    pub fn get_format(&self) -> OutputFormat {
        self.format
    }
}

#[derive(Serialize)]
struct Report {
    input: Quantity,
    #[serde(flatten)]
    span: RickerSpan,
}

/// Render `span`, with `input` being the quantity the user supplied.
pub fn render(span: &RickerSpan, input: Quantity, config: &OutputConfig) -> Result<String> {
    let precision = config.get_precision();
    match config.get_format() {
        OutputFormat::Text => Ok(render_text(span, input, precision)),
        OutputFormat::Json => render_json(span, input, precision),
    }
}

fn input_label(quantity: Quantity) -> &'static str {
    match quantity {
        Quantity::Frequency => "Input frequency (Hz)",
        Quantity::ZeroCrossingLength => "Input zero-crossing length L (s)",
        Quantity::HalfSpanMs => "Input half zero-crossing span (ms)",
    }
}

fn render_text(span: &RickerSpan, input: Quantity, precision: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {:.*}", input_label(input), precision, span.get(input));
    for quantity in RickerSpan::derived_order(input) {
        let _ = writeln!(
            out,
            "{}: {:.*}",
            quantity.description(),
            precision,
            span.get(quantity)
        );
    }
    out
}

/// Round through the same formatting the text output uses.
fn round_to(value: f64, precision: usize) -> Result<f64> {
    let text = format!("{:.*}", precision, value);
    text.parse()
        .with_context(|| format!("Failed to round {} to {} places", value, precision))
}

fn render_json(span: &RickerSpan, input: Quantity, precision: usize) -> Result<String> {
    let report = Report {
        input,
        span: RickerSpan {
            frequency_hz: round_to(span.frequency_hz, precision)?,
            length_s: round_to(span.length_s, precision)?,
            half_span_ms: round_to(span.half_span_ms, precision)?,
        },
    };
    let mut json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    json.push('\n');
    Ok(json)
}
