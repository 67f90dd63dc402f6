use fairway_core::handicap::compute_handicap;

use crate::error::CliError;

pub fn run_handicap(
    index: f64,
    slope: u32,
    rating: f64,
    par: u32,
    allowance: f64,
    as_json: bool,
) -> Result<(), CliError> {
    let calculation = compute_handicap(index, slope, rating, par, allowance);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&calculation)?);
        return Ok(());
    }

    println!("Course handicap: {}", calculation.course_handicap);
    println!(
        "Playing handicap ({allowance}%): {}",
        calculation.playing_handicap
    );
    Ok(())
}
