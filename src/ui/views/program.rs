use schoolspace::docs::{method_note, DISCLAIMER, RULE_CITATION};
use schoolspace::domain::policies::{facility, RegulatoryProfile};
use schoolspace::{CalculationResult, PlumbingDetail};

use super::{signed_sf, thousands};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::{Align, Table};

/// Full text report for one computed program
pub fn render_program(result: &CalculationResult, color: bool, unicode: bool) -> String {
    let profile = RegulatoryProfile::for_edition(result.code_edition);
    let mut out = render_program_header(result, profile, color, unicode);
    out.push('\n');

    if result.is_empty() {
        out.push_str("No enrollment: there is nothing to size.\n\n");
        out.push_str(&render_disclaimer(color));
        return out;
    }

    out.push_str(&section("Section 1 - Instructional Spaces", color));
    out.push_str(&render_instructional(result, color, unicode));
    out.push('\n');
    out.push_str(&section("Section 2 - Support & Service Spaces", color));
    out.push_str(&render_support(result, color, unicode));
    out.push('\n');
    if let Some(plumbing) = &result.plumbing {
        out.push_str(&render_plumbing(plumbing, profile, color, unicode));
        out.push('\n');
    }
    out.push_str(&section("Section 3 - Gross Building Area", color));
    out.push_str(&render_gross(result, color, unicode));
    out.push('\n');
    out.push_str(&render_compliance(result, color, unicode));
    out.push('\n');
    out.push_str(&ColoredText::dim(method_note(result.method)).render(color));
    out.push_str("\n\n");
    out.push_str(&render_disclaimer(color));
    out
}

fn render_program_header(
    result: &CalculationResult,
    profile: &RegulatoryProfile,
    color: bool,
    unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Program, "Space Program");
    header.add("Campus", result.campus.display_name());
    header.add("Enrollment", format!("{} students", thousands(result.enrollment)));
    header.add("Class size", result.class_size.to_string());
    header.add("Area basis", format!("{} SF/student", result.sf_per_student));
    header.add("Code", profile.label);
    header.add(
        "Method",
        format!(
            "{} ({})",
            result.method.display_name(),
            result.method.citation()
        ),
    );
    header.add("Rule", RULE_CITATION);
    header.render(color, unicode)
}

fn section(title: &str, color: bool) -> String {
    format!("{}\n", ColoredText::info(title).bold().render(color))
}

fn render_instructional(result: &CalculationResult, color: bool, unicode: bool) -> String {
    let mut t = Table::default()
        .column("Space Type", Align::Left)
        .column("Qty", Align::Right)
        .column("SF/Room", Align::Right)
        .column("SF/Stud.", Align::Right)
        .column("Total SF", Align::Right)
        .column("Code", Align::Left)
        .column("Notes", Align::Left);

    for room in &result.rooms {
        t.add_row(vec![
            room.space_type.clone(),
            room.count.to_string(),
            thousands(room.sf_per_room),
            room.sf_per_student.to_string(),
            thousands(room.total_sf()),
            room.code.clone(),
            room.note.clone(),
        ]);
    }
    t.add_row(vec![
        "Library".into(),
        "-".into(),
        thousands(result.library_sf),
        "-".into(),
        thousands(result.library_sf),
        "§61.1040(g)(1)(A)".into(),
        "Scaled by enrollment".into(),
    ]);
    t.add_row(vec![
        "Gymnasium / PE".into(),
        "-".into(),
        thousands(result.gym_sf),
        "-".into(),
        thousands(result.gym_sf),
        "§61.1040(g)(1)(B)".into(),
        "Minimum by campus type".into(),
    ]);
    if result.cafeteria_instructional_credit > 0 {
        t.add_row(vec![
            "Cafeteria Credit".into(),
            "-".into(),
            "-".into(),
            format!("x{}", facility::CAFETERIA_CREDIT_FRACTION),
            thousands(result.cafeteria_instructional_credit),
            "§61.1040(i)(2)".into(),
            "Qualitative only".into(),
        ]);
    }
    t.set_footer(vec![
        "Instructional subtotal".into(),
        String::new(),
        String::new(),
        String::new(),
        thousands(result.instructional_with_shared_sf()),
    ]);
    t.render(color, unicode)
}

fn render_support(result: &CalculationResult, color: bool, unicode: bool) -> String {
    let mut t = Table::default()
        .column("Space Type", Align::Left)
        .column("Total SF", Align::Right)
        .column("Code", Align::Left)
        .column("Notes", Align::Left);

    for item in &result.support {
        t.add_row(vec![
            item.space_type.clone(),
            thousands(item.sf),
            item.code.clone(),
            item.note.clone(),
        ]);
    }
    t.set_footer(vec![
        "Support subtotal".into(),
        thousands(result.total_support_sf),
    ]);

    let mut out = format!("Staff: {}\n", result.staff_count);
    out.push_str(&t.render(color, unicode));
    out
}

fn render_plumbing(
    plumbing: &PlumbingDetail,
    profile: &RegulatoryProfile,
    color: bool,
    unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Plumbing, "Plumbing Fixtures");
    header.add("Basis", format!("{} §2902.1 / TAS Ch. 6", profile.label));
    let mut out = header.render(color, unicode);

    let mut t = Table::default()
        .column("Restrooms", Align::Left)
        .column("WC M/F", Align::Right)
        .column("Lav M/F", Align::Right)
        .column("Clusters", Align::Right)
        .column("Per cluster (M)", Align::Left)
        .column("Area SF", Align::Right);
    for (label, set) in [("Student", &plumbing.student), ("Staff", &plumbing.staff)] {
        let male = set.layout.male;
        t.add_row(vec![
            label.to_string(),
            format!("{}/{}", set.wc_male, set.wc_female),
            format!("{}/{}", set.lav_male, set.lav_female),
            set.clusters.to_string(),
            format!(
                "{} acc. + {} std. + {} urinal, {} lav",
                male.accessible_stalls, male.standard_stalls, male.urinals, male.lavatories
            ),
            thousands(set.sf),
        ]);
    }
    t.set_footer(vec![
        "Total".into(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        thousands(plumbing.total_sf),
    ]);
    out.push_str(&t.render(color, unicode));

    let fountains = if plumbing.drinking_fountains == 0 {
        format!(
            "Drinking fountains: 0 (exempt, occupant load <= {} per {})",
            profile.drinking_fountain_exempt_threshold, profile.label
        )
    } else {
        format!(
            "Drinking fountains: {} (1:{} occupants, hi-lo accessible, TAS §602)",
            plumbing.drinking_fountains,
            facility::fixture_ratio::DRINKING_FOUNTAIN
        )
    };
    out.push_str(&fountains);
    out.push('\n');
    out.push_str(&format!(
        "Urinal substitution max {:.0}% of male WC\n",
        profile.urinal_substitution_max * 100.0
    ));

    if plumbing.gender_neutral {
        out.push_str(
            &ColoredText::dim(format!(
                "{} permits multi-user gender-neutral facilities with compliant privacy partitions (IPC §405.3.4).",
                profile.label
            ))
            .render(color),
        );
        out.push('\n');
    }
    out
}

fn render_gross(result: &CalculationResult, color: bool, unicode: bool) -> String {
    let mut t = Table::default()
        .column("Area", Align::Left)
        .column("SF", Align::Right);
    t.add_row(vec![
        "Instructional + Common".into(),
        thousands(result.instructional_with_shared_sf()),
    ]);
    t.add_row(vec![
        "Support & Service".into(),
        thousands(result.total_support_sf),
    ]);
    t.add_row(vec!["Total Net SF".into(), thousands(result.net_sf)]);
    t.add_row(vec![
        "Net-to-Gross Factor".into(),
        format!("x{:.2}", result.net_to_gross),
    ]);
    t.set_footer(vec![
        "Estimated Gross Building SF".into(),
        thousands(result.gross_sf),
    ]);
    t.render(color, unicode)
}

fn render_compliance(result: &CalculationResult, color: bool, unicode: bool) -> String {
    let compliance = &result.compliance;
    let mut summary = if compliance.meets_aggregate {
        ResultSummary::success("Meets aggregate standard")
    } else {
        ResultSummary::partial("Below aggregate standard")
    };

    summary.add_stat(
        "Instructional",
        format!("{} SF", thousands(result.total_instructional_sf)),
    );
    summary.add_stat(
        "Aggregate standard",
        format!("{} SF", thousands(result.aggregate_sf)),
    );
    summary.add_stat(
        if compliance.meets_aggregate {
            "Surplus"
        } else {
            "Deficit"
        },
        signed_sf(compliance.surplus_sf),
    );
    summary.add_stat("Gross building", format!("{} SF", thousands(result.gross_sf)));

    summary.add_info(format!(
        "Aggregate = {} SF/student x {}",
        result.sf_per_student,
        thousands(result.enrollment)
    ));
    if result.cafeteria_instructional_credit > 0 {
        summary.add_info(format!(
            "Cafeteria credit: {} SF at {} factor, §61.1040(i)(2)",
            thousands(result.cafeteria_instructional_credit),
            facility::CAFETERIA_CREDIT_FRACTION
        ));
    }
    if !compliance.meets_aggregate {
        summary.with_next_step("add classrooms, raise the flexibility level or reduce class size");
    }
    summary.render(color, unicode)
}

fn render_disclaimer(color: bool) -> String {
    format!(
        "{} {}\n",
        ColoredText::warning("Disclaimer:").bold().render(color),
        ColoredText::dim(DISCLAIMER).render(color)
    )
}
