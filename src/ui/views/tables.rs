use schoolspace::domain::policies::{facility, CampusStandard, RegulatoryProfile};
use schoolspace::{CampusType, CodeEdition, FlexibilityLevel};

use super::thousands;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::{Align, Table};

pub fn render_tables(color: bool, unicode: bool) -> String {
    let header = CommandHeader::new(Icon::Tables, "Regulatory Tables");
    let mut out = header.render(color, unicode);
    out.push('\n');

    out.push_str(&heading("Campus standards", color));
    out.push_str(&render_campus_standards(color, unicode));
    out.push('\n');
    out.push_str(&heading("Support benchmarks (SF per student)", color));
    out.push_str(&render_support_benchmarks(color, unicode));
    out.push('\n');
    out.push_str(&heading("Code editions", color));
    out.push_str(&render_code_profiles(color, unicode));
    out.push('\n');
    out.push_str(&heading("Fixed constants", color));
    out.push_str(&render_constants());
    out
}

fn heading(title: &str, color: bool) -> String {
    format!("{}\n", ColoredText::info(title).bold().render(color))
}

fn render_campus_standards(color: bool, unicode: bool) -> String {
    let mut t = Table::default().column("Campus", Align::Left);
    for level in FlexibilityLevel::ALL {
        t = t.column(format!("{level:?}"), Align::Right);
    }
    let mut t = t
        .column("Class", Align::Right)
        .column("Sci. class", Align::Right)
        .column("Combo", Align::Right)
        .column("Lab", Align::Right)
        .column("Gym SF", Align::Right)
        .column("Staff", Align::Right)
        .column("N:G", Align::Right);

    for campus in CampusType::ALL {
        let s = CampusStandard::for_campus(campus);
        let mut row = vec![campus.display_name().to_string()];
        row.extend(
            FlexibilityLevel::ALL
                .iter()
                .map(|level| s.sf_per_student(*level).to_string()),
        );
        row.extend([
            format!("{}/{}", s.default_class_size, s.max_class_size),
            s.science_max_class_size.to_string(),
            s.science.combo.to_string(),
            s.science
                .separate_lab
                .map_or_else(|| "-".to_string(), |sf| sf.to_string()),
            thousands(s.gym_area),
            format!("{:.0}%", s.staff_ratio * 100.0),
            format!("{:.2}", s.net_to_gross),
        ]);
        t.add_row(row);
    }
    t.render(color, unicode)
}

fn render_support_benchmarks(color: bool, unicode: bool) -> String {
    let mut t = Table::default()
        .column("Campus", Align::Left)
        .column("Admin", Align::Right)
        .column("Teacher work", Align::Right)
        .column("Cafeteria", Align::Right)
        .column("Custodial", Align::Right)
        .column("Mechanical", Align::Right);
    for campus in CampusType::ALL {
        let b = CampusStandard::for_campus(campus).support;
        t.add_row(vec![
            campus.display_name().to_string(),
            format!("{:.1}", b.admin),
            format!("{:.1}", b.teacher_work),
            format!("{:.1}", b.cafeteria),
            format!("{:.1}", b.custodial),
            format!("{:.1}", b.mechanical),
        ]);
    }
    t.render(color, unicode)
}

fn render_code_profiles(color: bool, unicode: bool) -> String {
    let mut t = Table::default()
        .column("Edition", Align::Left)
        .column("Gender-neutral", Align::Left)
        .column("Single-user", Align::Left)
        .column("Urinal max", Align::Right)
        .column("DF exempt <=", Align::Right)
        .column("Note", Align::Left);
    for edition in CodeEdition::ALL {
        let p = RegulatoryProfile::for_edition(edition);
        t.add_row(vec![
            p.label.to_string(),
            yes_no(p.gender_neutral_provisions).to_string(),
            yes_no(p.single_user_contribute).to_string(),
            format!("{:.0}%", p.urinal_substitution_max * 100.0),
            p.drinking_fountain_exempt_threshold.to_string(),
            p.note.to_string(),
        ]);
    }
    t.render(color, unicode)
}

fn render_constants() -> String {
    use facility::{fixture_ratio, restroom_area};

    let mut out = String::new();
    out.push_str(&format!(
        "Fixture ratios: WC 1:{}/sex, Lav 1:{}/sex, DF 1:{}\n",
        fixture_ratio::WATER_CLOSET,
        fixture_ratio::LAVATORY,
        fixture_ratio::DRINKING_FOUNTAIN
    ));
    out.push_str(&format!(
        "Restroom areas: standard stall {} SF, accessible stall {} SF, urinal {} SF, lavatory {} SF, circulation x{}\n",
        restroom_area::STANDARD_STALL,
        restroom_area::ACCESSIBLE_STALL,
        restroom_area::URINAL,
        restroom_area::LAVATORY,
        restroom_area::CIRCULATION
    ));
    out.push_str(&format!(
        "Special education: {} SF/student minimum\n",
        facility::SPED_SF_PER_STUDENT
    ));
    out.push_str(&format!(
        "Library: {} SF up to 100 students, {} SF at 500, {} SF at 2,000\n",
        thousands(facility::library_area(100)),
        thousands(facility::library_area(500)),
        thousands(facility::library_area(2000))
    ));
    out.push_str(&format!(
        "Net-to-gross override: {} to {}\n",
        facility::NET_TO_GROSS_MIN,
        facility::NET_TO_GROSS_MAX
    ));
    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
