//! One-shot CLI commands: plan, catalog, course listing.

use anyhow::Context;

use crate::PlanArgs;
use crate::state::AppState;
use shotplan::{
    CatalogResponse, Course, Distance, ShotInputs, ShotPlan, UnitSystem, Velocity, WindVector,
};

pub fn plan(state: &AppState, args: &PlanArgs) -> anyhow::Result<()> {
    let (player, target) = match (args.from, args.to, args.hole) {
        (Some(from), Some(to), _) => (from, to),
        (_, _, Some(number)) => {
            let course = state
                .course()
                .context("--hole needs a course file (set `course` in the config)")?;
            let hole = course.hole(number)?;
            (hole.tee, hole.green)
        }
        _ => anyhow::bail!("give either --from and --to, or --hole"),
    };

    let inputs = ShotInputs {
        player,
        target,
        wind: args.wind,
        club: args.club,
        shape: args.shape,
        trajectory: args.trajectory,
    };
    let plan = shotplan::plan(&inputs, state.session.model())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        let units = args.units.unwrap_or(state.config.default_units);
        print!("{}", render_plan(&plan, units));
    }
    Ok(())
}

fn render_plan(plan: &ShotPlan, units: UnitSystem) -> String {
    let yards = |v: f64| Distance::Yards(v).in_system(units);
    let r = &plan.result;
    let wind = &plan.inputs.wind;
    let drift_side = match r.lateral_drift_yards {
        d if d > 0 => " left",
        d if d < 0 => " right",
        _ => "",
    };

    let mut out = String::new();
    out.push_str(&format!(
        "target     {}  (bearing {:.0}°)\n",
        fmt_distance(yards(f64::from(r.distance_to_target_yards))),
        plan.target_bearing_rad.to_degrees().rem_euclid(360.0),
    ));
    out.push_str(&format!(
        "equipment  {} / {} / {}\n",
        plan.inputs.club.name(),
        plan.inputs.shape.name(),
        plan.inputs.trajectory.name(),
    ));
    out.push_str(&format!("wind       {}\n", fmt_wind(wind, plan, units)));
    out.push_str(&format!(
        "carry      {}\n",
        fmt_distance(yards(f64::from(r.carry_yards)))
    ));
    out.push_str(&format!(
        "drift      {}{drift_side}\n",
        fmt_distance(yards(f64::from(r.lateral_drift_yards.abs())))
    ));
    out.push_str(&format!(
        "remaining  {}\n",
        fmt_distance(yards(plan.remaining_yards() as f64))
    ));
    out
}

fn fmt_distance(d: Distance) -> String {
    format!("{:.0}{}", d.value(), d.unit_suffix())
}

fn fmt_wind(wind: &WindVector, plan: &ShotPlan, units: UnitSystem) -> String {
    if wind.speed_mph == 0.0 {
        return "calm".into();
    }
    let speed = |mph: f64| {
        let v = Velocity::MilesPerHour(mph).in_system(units);
        format!("{:.1}{}", v.value(), v.unit_suffix())
    };
    let along = if plan.headwind_mph >= 0.0 {
        "head"
    } else {
        "tail"
    };
    format!(
        "{} from {:.0}°  ({} {along}, {} cross)",
        speed(wind.speed_mph),
        wind.bearing_deg,
        speed(plan.headwind_mph.abs()),
        speed(plan.crosswind_mph.abs()),
    )
}

pub fn print_catalog() {
    let catalog = CatalogResponse::current();
    println!("clubs:");
    for c in &catalog.clubs {
        println!("  {:<4}{:<16}{:>5.0}yd", c.id.code(), c.name, c.base_carry_yards);
    }
    println!("shapes:");
    for s in &catalog.shapes {
        println!("  {:<20}x{:.2}", s.id.id(), s.carry_factor);
    }
    println!("trajectories:");
    for t in &catalog.trajectories {
        println!("  {:<20}wind x{:.2}", t.id.id(), t.wind_sensitivity);
    }
}

pub fn print_course(course: Option<&Course>) -> anyhow::Result<()> {
    let course = course.context("no course configured (set `course` in the config)")?;
    println!("{} (par {})", course.name, course.total_par());
    for h in &course.holes {
        let measured = shotplan::geo::distance_yards(&h.tee, &h.green)?;
        println!(
            "  #{:<3}par {}  hcp {:<3}{:>4}yd  (tee→green {measured}yd)",
            h.number, h.par, h.handicap, h.length_yards
        );
    }
    Ok(())
}
