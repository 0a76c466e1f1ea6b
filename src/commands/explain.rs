use anyhow::Result;
use serde_json::json;

use schoolspace::docs::{method_note, DISCLAIMER, RULE_CITATION};
use schoolspace::{ComplianceMethod, FlexibilityLevel};

use crate::cli::ColorWhen;
use crate::ui::json::{emit_event, events::DataEvent};
use crate::ui::terminal::detect_capabilities;
use crate::ui::views::explain::render_explain;

pub fn cmd_explain(brief: bool, json: bool, color: Option<ColorWhen>, verbose: u8) -> Result<()> {
    if json {
        let levels: Vec<_> = FlexibilityLevel::ALL
            .iter()
            .map(|level| json!({ "level": level, "description": level.description() }))
            .collect();
        let data = json!({
            "name": "schoolspace",
            "version": env!("CARGO_PKG_VERSION"),
            "purpose": "Minimum space program and plumbing fixture estimator for K-12 campuses",
            "rule": RULE_CITATION,
            "commands": {
                "schoolspace compute": "Compute the minimum space program",
                "schoolspace tables": "Print the regulatory tables",
                "schoolspace explain": "Explain methods and limits"
            },
            "methods": {
                "quantitative": method_note(ComplianceMethod::Quantitative),
                "qualitative": method_note(ComplianceMethod::Qualitative)
            },
            "flexibility_levels": levels,
            "disclaimer": DISCLAIMER,
            "brief": brief
        });
        emit_event(&DataEvent::new("explain", "explain", data))?;
        return Ok(());
    }

    let color = match color {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        _ => detect_capabilities().supports_color,
    };
    print!("{}", render_explain(brief, verbose, color));
    Ok(())
}
