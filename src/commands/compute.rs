use anyhow::{Context, Result};
use tracing::{debug, info};

use schoolspace::config::{load_request, Config};
use schoolspace::domain::policies::CampusStandard;
use schoolspace::{compute, ProgramRequest};

use crate::cli::{ColorWhen, ComputeArgs};
use crate::commands::project_root::current_project_root;
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::ResultEvent};
use crate::ui::output::print_config_warnings;
use crate::ui::views::program::render_program;

/// Exit status when `--fail-on-deficit` is set and the program falls short
pub const DEFICIT_EXIT_CODE: i32 = 2;

pub fn cmd_compute(
    args: &ComputeArgs,
    json: bool,
    color: Option<ColorWhen>,
    verbose: u8,
) -> Result<i32> {
    let config = load_config(args, json)?;
    let ui = UiContext::new(json, verbose, color, &config);

    let request = apply_flags(base_request(args, &config)?, args);
    debug!(?request, "resolved program request");

    let result = compute(&request);
    info!(
        campus = result.campus.as_str(),
        enrollment = result.enrollment,
        gross_sf = result.gross_sf,
        "program computed"
    );

    if ui.json {
        emit_event(&ResultEvent::new(&result)).context("writing result event")?;
    } else {
        print!("{}", render_program(&result, ui.color, ui.unicode));
    }

    if args.fail_on_deficit && !result.compliance.meets_aggregate {
        return Ok(DEFICIT_EXIT_CODE);
    }
    Ok(0)
}

fn load_config(args: &ComputeArgs, json: bool) -> Result<Config> {
    let Some(path) = &args.config else {
        return Ok(Config::load_or_default(current_project_root().as_deref()));
    };

    let (config, warnings) = Config::load_with_warnings(path)?;
    let config = config.with_env_overrides();
    let preview = UiContext::new(json, 0, None, &config);
    print_config_warnings(&warnings, json, "compute", preview.color, preview.unicode);
    Ok(config)
}

/// Request file when given, otherwise the config; `--campus` is applied here
/// so the advanced defaults follow the chosen campus.
fn base_request(args: &ComputeArgs, config: &Config) -> Result<ProgramRequest> {
    match &args.request {
        Some(path) => {
            let mut request = load_request(path)?;
            if let Some(campus) = args.campus.filter(|c| *c != request.campus) {
                request.campus = campus;
                request.advanced = CampusStandard::for_campus(campus).default_advanced();
            }
            Ok(request)
        }
        None => {
            let mut config = config.clone();
            if args.campus.is_some() {
                config.program.campus = args.campus;
            }
            Ok(config.to_request())
        }
    }
}

fn apply_flags(mut request: ProgramRequest, args: &ComputeArgs) -> ProgramRequest {
    if let Some(enrollment) = args.enrollment {
        request.enrollment = enrollment;
    }
    if let Some(level) = args.flexibility {
        request.flexibility = level;
    }
    if let Some(size) = args.class_size {
        request.class_size = Some(size);
    }
    if let Some(method) = args.method {
        request.method = method;
    }
    if args.cafeteria_credit {
        request.cafeteria_credit = true;
    }
    if args.no_cafeteria_credit {
        request.cafeteria_credit = false;
    }
    if let Some(edition) = args.code_edition {
        request.code_edition = edition;
    }
    if let Some(factor) = args.net_to_gross {
        request.net_to_gross = Some(factor);
    }

    let advanced = &mut request.advanced;
    if let Some(periods) = args.periods {
        advanced.periods_per_day = periods;
    }
    if let Some(utilization) = args.utilization {
        advanced.utilization = utilization;
    }
    if let Some(pct) = args.sped_pct {
        advanced.sped_pct = pct;
    }
    if let Some(cap) = args.sped_room_cap {
        advanced.sped_room_cap = cap;
    }
    if let Some(science) = args.science {
        advanced.science_config = science;
    }
    if let Some(electives) = args.electives {
        advanced.elective_rooms = electives;
    }
    request
}
