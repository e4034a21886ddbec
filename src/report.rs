/*
 * Copyright (c):
 * 2026 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of shift-planner.
 *
 * shift-planner is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * shift-planner is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with shift-planner. If not, see <https://www.gnu.org/licenses/>.
 */

use drivetrain::shift::shift_count;
use drivetrain::{DriveTrain, GearCombination};
use utils::numeric::{percentage_gap, round_float_to};
use crate::error::PlannerError;

pub fn closest_report(drive_train: &DriveTrain, target_ratio: f64, verbose: bool) -> Result<String, PlannerError> {
    Ok(match drive_train.find_closest_combination(target_ratio)? {
        Some(combination) => {
            format!("Closest to ratio {:.3}: {}{}",
                    target_ratio,
                    combination.format(verbose),
                    gap_suffix(target_ratio, &combination))
        }
        None => format!("No combination found for ratio {}", target_ratio)
    })
}

pub fn shift_report(drive_train: &DriveTrain,
                    target_ratio: f64,
                    start: GearCombination,
                    verbose: bool) -> Result<String, PlannerError> {
    let sequence = match drive_train.plan_shift_sequence(target_ratio, start)? {
        Some(sequence) => sequence,
        None => return Ok(format!("No shift path to ratio {}", target_ratio))
    };
    let mut lines = vec![format!("Shift sequence to ratio {:.3} ({} shifts):", target_ratio, shift_count(&sequence))];
    for (idx, combination) in sequence.iter().enumerate() {
        lines.push(format!("{:>3}: {}", idx, combination.format(verbose)));
    }
    Ok(lines.join("\n"))
}

pub fn table_report(drive_train: &DriveTrain, verbose: bool) -> Result<String, PlannerError> {
    Ok(drive_train.combinations_by_ratio()?
        .iter()
        .map(|combination| combination.format(verbose))
        .collect::<Vec<String>>()
        .join("\n"))
}

fn gap_suffix(target_ratio: f64, combination: &GearCombination) -> String {
    match combination.ratio().and_then(|ratio| percentage_gap(target_ratio, ratio)) {
        Some(gap) => format!(" ({}% under)", round_float_to(gap, 2)),
        None => String::new()
    }
}

#[cfg(test)]
mod tests {
    use drivetrain::{DriveTrain, GearCombination};
    use crate::report::{closest_report, shift_report, table_report};

    fn road_bike() -> DriveTrain {
        DriveTrain::with_cogs(&[38, 30], &[28, 23, 19, 16]).unwrap()
    }

    #[test]
    fn closest_found() {
        assert_eq!(closest_report(&road_bike(), 1.6, false).unwrap(),
                   "Closest to ratio 1.600: F:30 R:19 Ratio 1.579 (1.32% under)");
        assert_eq!(closest_report(&road_bike(), 1.6, true).unwrap(),
                   "Closest to ratio 1.600: Front: 30, Rear: 19, Ratio 1.579 (1.32% under)");
    }

    #[test]
    fn closest_not_found() {
        assert_eq!(closest_report(&road_bike(), 0.4, false).unwrap(), "No combination found for ratio 0.4");
    }

    #[test]
    fn shift_sequence_listing() {
        let report = shift_report(&road_bike(), 1.6, GearCombination::new(38, 28), false).unwrap();
        assert_eq!(report, ["Shift sequence to ratio 1.600 (3 shifts):",
                            "  0: F:38 R:28 Ratio 1.357",
                            "  1: F:30 R:28 Ratio 1.071",
                            "  2: F:30 R:23 Ratio 1.304",
                            "  3: F:30 R:19 Ratio 1.579"].join("\n"));
    }

    #[test]
    fn shift_sequence_missing() {
        let report = shift_report(&road_bike(), 0.4, GearCombination::new(38, 28), false).unwrap();
        assert_eq!(report, "No shift path to ratio 0.4");
    }

    #[test]
    fn table_is_sorted_by_ratio() {
        let report = table_report(&road_bike(), false).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "F:30 R:28 Ratio 1.071");
        assert_eq!(lines[7], "F:38 R:16 Ratio 2.375");
    }
}
