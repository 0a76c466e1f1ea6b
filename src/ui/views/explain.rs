use schoolspace::docs::{method_note, DISCLAIMER, RULE_CITATION};
use schoolspace::{ComplianceMethod, FlexibilityLevel};

use crate::ui::primitives::text::ColoredText;

const KEY_COMMANDS: &[(&str, &str)] = &[
    (
        "schoolspace compute --campus high -e 1800",
        "Size a campus from flags",
    ),
    (
        "schoolspace compute --request program.json --json",
        "Size a saved request, emit NDJSON",
    ),
    ("schoolspace tables", "Print the regulatory tables"),
    ("schoolspace explain", "This text"),
];

pub fn render_explain(brief: bool, verbose: u8, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("Schoolspace v{}\n", env!("CARGO_PKG_VERSION")));
    out.push_str("Minimum space program and plumbing fixture estimator for K-12 campuses.\n\n");

    out.push_str(&heading("KEY COMMANDS:", color));
    for (command, what) in KEY_COMMANDS {
        out.push_str(&format!("  {command:<52} {what}\n"));
    }
    if brief {
        return out;
    }
    out.push('\n');

    out.push_str(&heading("RULE:", color));
    out.push_str(&format!("  {RULE_CITATION}\n\n"));

    out.push_str(&heading("COMPLIANCE METHODS:", color));
    for method in [ComplianceMethod::Quantitative, ComplianceMethod::Qualitative] {
        out.push_str(&format!("  {}\n", method_note(method)));
    }
    out.push('\n');

    out.push_str(&heading("FLEXIBILITY LEVELS:", color));
    for level in FlexibilityLevel::ALL {
        out.push_str(&format!("  {:?}  {}\n", level, level.description()));
    }
    out.push('\n');

    out.push_str(&heading("CONFIGURATION:", color));
    out.push_str("  ./schoolspace.toml, else <config dir>/schoolspace/config.toml\n");
    out.push_str("  [program] campus, enrollment, flexibility, class_size, method,\n");
    out.push_str("            cafeteria_credit, code_edition, net_to_gross\n");
    out.push_str("  [advanced] periods_per_day, utilization, sped_pct, sped_room_cap,\n");
    out.push_str("             science_config, elective_rooms\n");
    out.push_str("  [output] color, unicode\n");
    out.push_str("  Env: SCHOOLSPACE_CAMPUS, SCHOOLSPACE_ENROLLMENT, SCHOOLSPACE_FLEXIBILITY,\n");
    out.push_str("       SCHOOLSPACE_CODE_EDITION, SCHOOLSPACE_COLOR\n\n");

    if verbose > 0 {
        out.push_str(&heading("EXAMPLES:", color));
        out.push_str("  # Middle school under the qualitative method with cafeteria credit\n");
        out.push_str(
            "  schoolspace compute --campus middle -e 900 --method qualitative --cafeteria-credit\n\n",
        );
        out.push_str("  # Fail a CI job when the program misses the aggregate standard\n");
        out.push_str("  schoolspace compute --fail-on-deficit --class-size 18\n\n");
    }

    out.push_str(&heading("DISCLAIMER:", color));
    out.push_str(&format!("  {DISCLAIMER}\n"));
    out
}

fn heading(title: &str, color: bool) -> String {
    format!("{}\n", ColoredText::plain(title).bold().render(color))
}
