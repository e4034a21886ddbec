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

use itertools::{iproduct, Itertools};
use tracing::{debug, info, warn};
use crate::cogs::validate_cog_list;
use crate::combination::GearCombination;
use crate::error::{Error, ErrorKind, Result};

#[derive(Clone, Debug)]
pub(crate) struct CogSets {
    pub(crate) front: Vec<u32>,
    pub(crate) rear: Vec<u32>
}

/// A chain drive made up of a set of front cogs and a set of rear cogs.
///
/// The drive train must be configured with both cog lists, each sorted
/// largest first, before any search can be made against it.
#[derive(Clone, Debug, Default)]
pub struct DriveTrain {
    cogs: Option<CogSets>
}

impl DriveTrain {
    pub fn new() -> DriveTrain {
        DriveTrain { cogs: None }
    }

    pub fn with_cogs(front: &[u32], rear: &[u32]) -> Result<DriveTrain> {
        let mut drive_train = DriveTrain::new();
        drive_train.configure(front, rear)?;
        Ok(drive_train)
    }

    /// Set the cogs fitted to this drive train.
    ///
    /// On failure any previously accepted cogs are discarded and the drive
    /// train is left unconfigured until a valid set is provided
    pub fn configure(&mut self, front: &[u32], rear: &[u32]) -> Result<()> {
        self.cogs = None;
        if let Err(e) = validate_cog_list("front", front).and_then(|_| validate_cog_list("rear", rear)) {
            warn!("Rejected drive train configuration. {}", e);
            return Err(e);
        }
        info!("Drive train configured with front cogs {:?} and rear cogs {:?}", front, rear);
        self.cogs = Some(CogSets { front: front.to_vec(), rear: rear.to_vec() });
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.cogs.is_some()
    }

    pub fn front_cogs(&self) -> Option<&[u32]> {
        self.cogs.as_ref().map(|c| c.front.as_slice())
    }

    pub fn rear_cogs(&self) -> Option<&[u32]> {
        self.cogs.as_ref().map(|c| c.rear.as_slice())
    }

    pub(crate) fn cogs(&self) -> Result<&CogSets> {
        self.cogs.as_ref().ok_or_else(|| {
            Error::new(ErrorKind::NotConfigured, "No cogs have been fitted".to_string())
        })
    }

    /// Find the combination whose ratio is closest to, without exceeding,
    /// `target_ratio`.
    ///
    /// Returns `Ok(None)` if every combination has a higher ratio than the
    /// target. When two combinations are equally close the one found first
    /// wins, i.e. the larger front cog and then the larger rear cog.
    pub fn find_closest_combination(&self, target_ratio: f64) -> Result<Option<GearCombination>> {
        let cogs = self.cogs()?;
        if !target_ratio.is_finite() {
            return Err(Error::new(ErrorKind::ArgumentError,
                                  format!("Target ratio {} is not a finite number", target_ratio)));
        }

        let mut closest: Option<(GearCombination, f64)> = None;
        for &front in &cogs.front {
            for &rear in &cogs.rear {
                let candidate = GearCombination::new(front, rear);
                let ratio = match candidate.ratio() {
                    Some(r) => r,
                    None => continue
                };
                // Rear cogs are largest first so the ratio only climbs from here
                if ratio > target_ratio {
                    break;
                }
                let difference = target_ratio - ratio;
                match closest {
                    Some((_, best_difference)) if difference >= best_difference => {}
                    _ => {
                        closest = Some((candidate, difference));
                    }
                }
            }
        }

        match &closest {
            Some((combination, difference)) => {
                debug!("Closest combination to {} is {} (short by {})", target_ratio, combination, difference);
            }
            None => {
                debug!("No combination at or below ratio {}", target_ratio);
            }
        }
        Ok(closest.map(|(combination, _)| combination))
    }

    /// Every front/rear pairing, front cogs in the outer order and rear cogs
    /// in the inner order
    pub fn combinations(&self) -> Result<Vec<GearCombination>> {
        let cogs = self.cogs()?;
        Ok(iproduct!(cogs.front.iter(), cogs.rear.iter())
            .map(|(front, rear)| GearCombination::new(*front, *rear))
            .collect())
    }

    /// All combinations ordered from lowest to highest ratio. Combinations
    /// with equal ratios keep their relative [DriveTrain::combinations] order
    pub fn combinations_by_ratio(&self) -> Result<Vec<GearCombination>> {
        Ok(self.combinations()?
            .into_iter()
            .sorted_by(|a, b| {
                a.ratio().unwrap_or(0.0).total_cmp(&b.ratio().unwrap_or(0.0))
            })
            .collect())
    }

    pub fn highest_combination(&self) -> Result<GearCombination> {
        let cogs = self.cogs()?;
        Ok(GearCombination::new(cogs.front[0], cogs.rear[cogs.rear.len() - 1]))
    }

    pub fn lowest_combination(&self) -> Result<GearCombination> {
        let cogs = self.cogs()?;
        Ok(GearCombination::new(cogs.front[cogs.front.len() - 1], cogs.rear[0]))
    }
}
