use std::env;
use std::io::{self, Write};

use chrono::Local;
use plotters::prelude::*;

use projectile_lab::core::energy::{check_conservation, total_mechanical_energy};
use projectile_lab::core::kinematics::{Gravity, LaunchParameters, compute};
use projectile_lab::core::quiz::{
    ApexFact, QuizAnswer, apex_energy_question, apex_fact_question, grade,
};
use projectile_lab::core::sequencer::checkpoints;
use projectile_lab::core::trajectory::{DEFAULT_SAMPLE_COUNT, TrajectoryPath, full_path, state_at};
use projectile_lab::core::window::axis_window;

const ENERGY_TABLE_ROWS: usize = 9;

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn parse_gravity(value: &str) -> Result<Gravity, String> {
    match value.to_ascii_lowercase().as_str() {
        "earth" => Ok(Gravity::Earth),
        "moon" => Ok(Gravity::Moon),
        "mars" => Ok(Gravity::Mars),
        other => {
            let g = parse_f64(other, "gravity")?;
            Ok(Gravity::Custom(g))
        }
    }
}

fn read_f64(prompt: &str) -> Result<f64, String> {
    loop {
        print!("{prompt}");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {e}"))?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Could not read input: {e}"))?;

        if bytes == 0 {
            return Err("Input ended unexpectedly (EOF).".to_string());
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn read_gravity() -> Result<Gravity, String> {
    loop {
        print!("Planet [earth/moon/mars or g in m/s^2]: ");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {e}"))?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Could not read input: {e}"))?;

        if bytes == 0 {
            return Err("Input ended unexpectedly (EOF).".to_string());
        }

        match parse_gravity(line.trim()) {
            Ok(g) => return Ok(g),
            Err(_) => eprintln!("Please enter earth, moon, mars, or a positive number."),
        }
    }
}

fn get_params_from_user() -> Result<LaunchParameters, String> {
    let speed = read_f64("Launch speed (m/s): ")?;
    let angle = read_f64("Launch angle (degrees): ")?;
    let gravity = read_gravity()?;
    Ok(LaunchParameters::new(speed, angle, gravity))
}

fn get_params_from_args(args: &[String]) -> Result<LaunchParameters, String> {
    if args.len() < 3 || args.len() > 5 {
        return Err(
            "Expected 2 to 4 arguments: <speed_mps> <angle_deg> [planet|gravity] [mass_kg]."
                .to_string(),
        );
    }

    let speed = parse_f64(&args[1], "speed")?;
    let angle = parse_f64(&args[2], "angle")?;
    let gravity = if args.len() >= 4 {
        parse_gravity(&args[3])?
    } else {
        Gravity::Earth
    };

    let mut params = LaunchParameters::new(speed, angle, gravity);
    if args.len() == 5 {
        params = params.with_mass(parse_f64(&args[4], "mass")?);
    }
    Ok(params)
}

fn print_worked_solution(params: &LaunchParameters) {
    let theta = params.angle_deg.to_radians();
    let vx = params.speed_mps * theta.cos();
    let vy = params.speed_mps * theta.sin();
    let g = params.gravity.mps2();
    let flight_time = 2.0 * vy / g;

    println!(
        "\nWorked solution ({}, g = {g:.2} m/s^2):",
        params.gravity.label()
    );
    println!(
        "  1. Vx = V0*cos(theta) = {:.1}*cos({:.0} deg) = {vx:.2} m/s",
        params.speed_mps, params.angle_deg
    );
    println!(
        "  2. Vy = V0*sin(theta) = {:.1}*sin({:.0} deg) = {vy:.2} m/s",
        params.speed_mps, params.angle_deg
    );
    println!("  3. Flight time = 2*Vy/g = 2*{vy:.2}/{g:.2} = {flight_time:.2} s");
    println!(
        "  4. Range = Vx*t = {vx:.2}*{flight_time:.2} = {:.2} m",
        vx * flight_time
    );
    println!(
        "  5. Max height = Vy^2/(2g) = {:.2} m",
        (vy * vy) / (2.0 * g)
    );
}

fn print_energy_table(params: &LaunchParameters) -> Result<(), String> {
    let (coeffs, summary) = compute(params).map_err(|e| e.to_string())?;
    let g = params.gravity.mps2();
    let reference = total_mechanical_energy(params);

    println!("\nEnergy along the flight (total should stay at {reference:.1} J):");
    println!(
        "  {:>7} {:>9} {:>8} {:>9} {:>9}",
        "t (s)", "x (m)", "y (m)", "KE (J)", "PE (J)"
    );
    for t in checkpoints(summary.flight_time_s, ENERGY_TABLE_ROWS) {
        let state = state_at(coeffs, &summary, g, params.mass_kg, t).map_err(|e| e.to_string())?;
        check_conservation(&state, params).map_err(|e| e.to_string())?;
        println!(
            "  {:>7.2} {:>9.1} {:>8.1} {:>9.1} {:>9.1}",
            state.t_s, state.x_m, state.y_m, state.energy.kinetic_j, state.energy.potential_j
        );
    }
    Ok(())
}

fn export_chart(
    params: &LaunchParameters,
    path: &TrajectoryPath,
    file: &str,
) -> Result<(), String> {
    let raw_max_x = path.iter().fold(0.0f64, |acc, p| acc.max(p.0));
    let raw_max_y = path.iter().fold(0.0f64, |acc, p| acc.max(p.1));
    let (x_span, y_span) = axis_window(raw_max_x, raw_max_y);

    let root = BitMapBackend::new(file, (900, 540)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| format!("Could not fill chart background: {e}"))?;

    let caption = format!(
        "V0 = {:.0} m/s, angle = {:.0} deg, {} (g = {:.2})",
        params.speed_mps,
        params.angle_deg,
        params.gravity.label(),
        params.gravity.mps2()
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..x_span, 0.0..y_span)
        .map_err(|e| format!("Could not build chart axes: {e}"))?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(|e| format!("Could not draw chart mesh: {e}"))?;

    chart
        .draw_series(AreaSeries::new(path.iter().copied(), 0.0, RED.mix(0.1)))
        .map_err(|e| format!("Could not draw area fill: {e}"))?;
    chart
        .draw_series(LineSeries::new(path.iter().copied(), RED.stroke_width(3)))
        .map_err(|e| format!("Could not draw trajectory: {e}"))?;

    root.present()
        .map_err(|e| format!("Could not write '{file}': {e}"))?;
    println!("\nChart written to {file}");
    Ok(())
}

fn run_quiz(params: &LaunchParameters) -> Result<(), String> {
    let (coeffs, _) = compute(params).map_err(|e| e.to_string())?;

    let energy_item = apex_energy_question(coeffs, params.mass_kg);
    println!("\nQuiz 1: {}", energy_item.prompt());
    let answer = read_f64("Your answer (J): ")?;
    if grade(&energy_item, &QuizAnswer::Numeric(answer)) {
        println!("Correct! The horizontal velocity persists at the apex.");
    } else {
        println!(
            "Not quite. KE at the apex is 0.5*m*Vx^2 = {:.1} J.",
            0.5 * params.mass_kg * coeffs.vx_mps * coeffs.vx_mps
        );
    }

    let fact_item = apex_fact_question();
    println!("\nQuiz 2: {}", fact_item.prompt());
    for (i, fact) in ApexFact::CHOICES.iter().enumerate() {
        println!("  {}. {}", i + 1, fact.label());
    }
    let picked = read_f64("Your answer (1-4): ")? as usize;
    let answer = picked
        .checked_sub(1)
        .and_then(|i| ApexFact::CHOICES.get(i))
        .copied();
    match answer {
        Some(fact) if grade(&fact_item, &QuizAnswer::Choice(fact)) => println!("Correct!"),
        _ => println!("Not quite. {}.", ApexFact::VerticalVelocityZero.label()),
    }
    Ok(())
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program}");
    println!("  {program} <speed_mps> <angle_deg> [planet|gravity] [mass_kg] [--chart [file.png]]");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 50 45");
    println!("  {program} 60 45 moon 2.0 --chart");
    println!("  {program} 50 45 3.71 --chart flight.png");
}

fn run() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    // `--chart [file]` may trail the positional arguments.
    let mut chart_file: Option<String> = None;
    if let Some(pos) = args.iter().position(|a| a == "--chart") {
        let explicit = args.get(pos + 1).cloned();
        chart_file = Some(explicit.unwrap_or_else(|| {
            format!("trajectory_{}.png", Local::now().format("%Y%m%d_%H%M%S"))
        }));
        args.truncate(pos);
    }

    let interactive = args.len() == 1;
    let params = if interactive {
        get_params_from_user()?
    } else {
        get_params_from_args(&args)?
    };

    let (coeffs, summary) = compute(&params).map_err(|e| e.to_string())?;
    let path = full_path(coeffs, &summary, params.gravity.mps2(), DEFAULT_SAMPLE_COUNT);

    print_worked_solution(&params);
    println!("\nFlight time: {:.4} s", summary.flight_time_s);
    println!("Range: {:.4} m", summary.range_m);
    println!("Max height: {:.4} m", summary.max_height_m);

    print_energy_table(&params)?;

    if let Some(file) = chart_file {
        export_chart(&params, &path, &file)?;
    }

    if interactive {
        run_quiz(&params)?;
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{get_params_from_args, parse_gravity};
    use projectile_lab::core::kinematics::Gravity;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_planet_names_and_custom_gravity() {
        assert_eq!(parse_gravity("Earth").unwrap(), Gravity::Earth);
        assert_eq!(parse_gravity("moon").unwrap(), Gravity::Moon);
        assert_eq!(parse_gravity("MARS").unwrap(), Gravity::Mars);
        assert_eq!(parse_gravity("3.71").unwrap(), Gravity::Custom(3.71));
        assert!(parse_gravity("jupiter").is_err());
    }

    #[test]
    fn builds_parameters_from_positional_args() {
        let params = get_params_from_args(&args(&["prog", "60", "45", "moon", "2.0"]))
            .expect("full argument list");
        assert_eq!(params.speed_mps, 60.0);
        assert_eq!(params.angle_deg, 45.0);
        assert_eq!(params.gravity, Gravity::Moon);
        assert_eq!(params.mass_kg, 2.0);

        let defaulted =
            get_params_from_args(&args(&["prog", "50", "45"])).expect("planet and mass default");
        assert_eq!(defaulted.gravity, Gravity::Earth);
        assert_eq!(defaulted.mass_kg, 1.0);
    }

    #[test]
    fn rejects_wrong_argument_counts() {
        assert!(get_params_from_args(&args(&["prog"])).is_err());
        assert!(get_params_from_args(&args(&["prog", "50"])).is_err());
        assert!(get_params_from_args(&args(&["prog", "50", "45", "moon", "2", "9"])).is_err());
    }
}
