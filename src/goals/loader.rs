//! Load goals from CSV
//!
//! Expected header: `GoalId,PresentValue,CurrentAge,TargetAge,ExistingSavings`
//! (`ExistingSavings` may be left empty).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use super::goal::Goal;
use crate::error::CalcResult;

/// Raw CSV row matching the goals file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "GoalId")]
    goal_id: String,
    #[serde(rename = "PresentValue")]
    present_value: f64,
    #[serde(rename = "CurrentAge")]
    current_age: u32,
    #[serde(rename = "TargetAge")]
    target_age: u32,
    #[serde(rename = "ExistingSavings", default)]
    existing_savings: Option<f64>,
}

impl CsvRow {
    fn into_goal(self) -> Goal {
        Goal::new(
            self.goal_id,
            self.present_value,
            self.current_age,
            self.target_age,
            self.existing_savings.unwrap_or(0.0),
        )
    }
}

/// Load goals from a CSV file
pub fn load_goals<P: AsRef<Path>>(path: P) -> CalcResult<Vec<Goal>> {
    let file = File::open(path.as_ref())?;
    let goals = load_goals_from_reader(file)?;
    log::info!("loaded {} goals from {}", goals.len(), path.as_ref().display());
    Ok(goals)
}

/// Load goals from any CSV reader
pub fn load_goals_from_reader<R: Read>(reader: R) -> CalcResult<Vec<Goal>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut goals = Vec::new();
    for result in csv_reader.deserialize::<CsvRow>() {
        goals.push(result?.into_goal());
    }

    Ok(goals)
}
