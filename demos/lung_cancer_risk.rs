//! Demonstration of the smoking-risk crate.
//!
//! Run with: `cargo run --example lung_cancer_risk`

use smoking_risk::{InitiationBand, RiskInputs, calculate_risk_score};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let age = 45;
    let pack_years = 20.5;
    let age_first_cigarette = 16;

    let score = calculate_risk_score(age, pack_years, age_first_cigarette)?;
    println!("Estimated lung cancer risk score: {score:.2}");
    println!();

    // Same inputs, component by component
    println!("=== Breakdown ===\n");
    let breakdown = RiskInputs::new(age, pack_years, age_first_cigarette)?.breakdown();
    println!("  Base risk ({pack_years} pack-years): {:.2}", breakdown.base_risk);
    println!(
        "  Early initiation ({}): {:.2}",
        breakdown.band, breakdown.early_initiation_penalty
    );
    println!("  Age factor ({age} years): {:.2}", breakdown.age_factor);
    println!("  Total: {breakdown}");
    println!();

    println!("=== Initiation Bands ===\n");
    for start in [16, 18, 24, 25, 30] {
        let band = InitiationBand::from_age_first_cigarette(start);
        let penalty = InitiationBand::penalty(start);
        println!("  first cigarette at {start}: {band}, penalty {penalty:.2}");
    }
    println!();

    println!("=== Rejected Input ===\n");
    match calculate_risk_score(age, -1.0, age_first_cigarette) {
        Ok(score) => println!("  unexpected score {score:.2}"),
        Err(err) => println!("  {err:?}: {err}"),
    }

    Ok(())
}
