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

use clap::{Parser, Subcommand};
use drivetrain::cogs::parse_cog_list;
use drivetrain::DriveTrain;
use crate::error::PlannerError;
use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "shift-planner", version, about = "Find gear combinations and shift sequences for a chain drive")]
pub struct Cli {
    #[arg(long, global = true, help = "Front cogs, largest first (e.g. 38,30). Overrides settings")]
    pub front: Option<String>,
    #[arg(long, global = true, help = "Rear cogs, largest first (e.g. 28,23,19,16). Overrides settings")]
    pub rear: Option<String>,
    #[arg(short, long, global = true, help = "Print combinations in long form")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Find the combination closest to, but not above, a ratio
    Closest {
        target: f64,
    },
    /// Plan the shifts from a starting combination to the closest one to a ratio
    Shift {
        target: f64,
        #[arg(long)]
        from_front: u32,
        #[arg(long)]
        from_rear: u32,
    },
    /// List every combination from lowest to highest ratio
    Table,
}

impl Cli {
    pub fn drive_train(&self, settings: &Settings) -> Result<DriveTrain, PlannerError> {
        let front = match &self.front {
            Some(list) => parse_cog_list(list)?,
            None => settings.front_cogs().to_vec()
        };
        let rear = match &self.rear {
            Some(list) => parse_cog_list(list)?,
            None => settings.rear_cogs().to_vec()
        };
        Ok(DriveTrain::with_cogs(&front, &rear)?)
    }

    pub fn verbose(&self, settings: &Settings) -> bool {
        self.verbose || settings.verbose()
    }
}
