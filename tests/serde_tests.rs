#![cfg(feature = "serde")]

use naval_grid::{Alignment, AttackOutcome, Grid, GridError, Vessel};

#[test]
fn test_alignment_uses_upper_case_tags() {
    assert_eq!(serde_json::to_string(&Alignment::Vertical).unwrap(), "\"VERTICAL\"");
    let parsed: Alignment = serde_json::from_str("\"HORIZONTAL\"").unwrap();
    assert_eq!(parsed, Alignment::Horizontal);
}

#[test]
fn test_attack_outcome_and_status_serialize() -> Result<(), GridError> {
    let mut grid = Grid::new(5, 5)?;
    let id = grid
        .place_vessel(Some(Vessel::new(1, 1, 1)?), Alignment::Horizontal)
        .expect("vessel fits");
    let outcome = grid.attack(1, 1);
    assert_eq!(outcome, AttackOutcome::Sunk(id));

    let json = serde_json::to_string(&outcome).unwrap();
    let back: AttackOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, outcome);

    let status = serde_json::to_value(grid.fleet_status()).unwrap();
    assert_eq!(status["placed"], 1);
    assert_eq!(status["sunk"], 1);
    assert_eq!(status["afloat"], 0);
    Ok(())
}
