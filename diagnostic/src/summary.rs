//! Orchestration for `diagnostic power`, `life-support` and `report`.
//!
//! Loads config and report, computes the requested sections, and renders
//! them as text or JSON. Nothing is rendered until every section succeeded.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::core::rating::{
    LifeSupport, PowerConsumption, Rating, life_support, power_consumption,
};
use crate::core::types::Report;
use crate::error::DiagnosticError;
use crate::io::config::DiagnosticConfig;
use crate::io::report::load_report;

/// Which ratings a command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Power,
    LifeSupport,
    All,
}

impl Section {
    fn includes_power(self) -> bool {
        matches!(self, Section::Power | Section::All)
    }

    fn includes_life_support(self) -> bool {
        matches!(self, Section::LifeSupport | Section::All)
    }
}

/// Computed ratings for one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<PowerConsumption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_support: Option<LifeSupport>,
}

/// Output format for a rendered summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Compute the requested sections for an in-memory report.
pub fn summarize(report: &Report, section: Section) -> Result<Summary, DiagnosticError> {
    let power = section.includes_power().then(|| power_consumption(report));
    let life = if section.includes_life_support() {
        Some(life_support(report)?)
    } else {
        None
    };
    Ok(Summary {
        power,
        life_support: life,
    })
}

/// Load the report at `input` and summarize it.
pub fn summarize_file(
    input: &Path,
    config: &DiagnosticConfig,
    section: Section,
) -> Result<Summary> {
    let report = load_report(input, config.width)
        .with_context(|| format!("load report {}", input.display()))?;
    let summary = summarize(&report, section)
        .with_context(|| format!("rate report {}", input.display()))?;
    info!(
        input = %input.display(),
        readings = report.len(),
        width = report.width(),
        ?section,
        "report rated"
    );
    Ok(summary)
}

pub fn render(summary: &Summary, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(summary)),
        Format::Json => {
            let mut payload =
                serde_json::to_string_pretty(summary).context("serialize summary json")?;
            payload.push('\n');
            Ok(payload)
        }
    }
}

/// Human-readable rendering; each section keeps a fixed line order.
pub fn render_text(summary: &Summary) -> String {
    let mut out = String::new();
    if let Some(power) = &summary.power {
        push_rating(&mut out, "gamma rate", &power.gamma);
        push_rating(&mut out, "epsilon rate", &power.epsilon);
        let _ = writeln!(out, "power consumption: {}", power.power_consumption);
    }
    if let Some(life) = &summary.life_support {
        push_rating(&mut out, "most common rating", &life.most_common);
        push_rating(&mut out, "least common rating", &life.least_common);
        let _ = writeln!(out, "life support: {}", life.life_support);
    }
    out
}

fn push_rating(out: &mut String, label: &str, rating: &Rating) {
    let _ = writeln!(out, "{}: {} ({})", label, rating.reading, rating.value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ReportDir, SAMPLE_REPORT, sample_report};

    #[test]
    fn life_support_text_has_fixed_order() {
        let summary = summarize(&sample_report(), Section::LifeSupport).expect("summary");
        assert_eq!(
            render_text(&summary),
            "most common rating: 10111 (23)\n\
             least common rating: 01010 (10)\n\
             life support: 230\n"
        );
    }

    #[test]
    fn all_sections_render_power_first() {
        let summary = summarize(&sample_report(), Section::All).expect("summary");
        let text = render_text(&summary);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "gamma rate: 10110 (22)",
                "epsilon rate: 01001 (9)",
                "power consumption: 198",
                "most common rating: 10111 (23)",
                "least common rating: 01010 (10)",
                "life support: 230",
            ]
        );
    }

    #[test]
    fn json_omits_unrequested_sections() {
        let summary = summarize(&sample_report(), Section::Power).expect("summary");
        let json = render(&summary, Format::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");
        assert_eq!(value["power"]["gamma"]["reading"], "10110");
        assert_eq!(value["power"]["power_consumption"], 198);
        assert!(value.get("life_support").is_none());
    }

    #[test]
    fn summarizing_twice_is_identical() {
        let report = sample_report();
        let first = summarize(&report, Section::All).expect("first");
        let second = summarize(&report, Section::All).expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn summarize_file_applies_config_width() {
        let dir = ReportDir::new().expect("dir");
        let path = dir.write_report("report.txt", SAMPLE_REPORT).expect("write");
        let config = DiagnosticConfig {
            width: Some(6),
            json: false,
        };
        let err = summarize_file(&path, &config, Section::All).expect_err("width mismatch");
        let root = err
            .downcast_ref::<DiagnosticError>()
            .expect("diagnostic error");
        assert!(matches!(root, DiagnosticError::MalformedRecord { line: 1, .. }));
    }
}
