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

mod cli;
mod error;
mod report;
mod settings;

use std::env;
use std::process::ExitCode;
use clap::Parser;
use tracing_subscriber;
use tracing_appender;
use tracing::{error, info};

use drivetrain::GearCombination;
use crate::cli::{Cli, Commands};
use crate::error::PlannerError;
use crate::settings::Settings;


fn main() -> ExitCode {
    let cli = Cli::parse();
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, "shift_planner.log");
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e.to_string());
            eprintln!("{}", e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, PlannerError> {
    let settings = Settings::load()?;
    let drive_train = cli.drive_train(&settings)?;
    let verbose = cli.verbose(&settings);
    info!("Running {:?}", cli.command);
    match cli.command {
        Commands::Closest { target } => {
            report::closest_report(&drive_train, target, verbose)
        }
        Commands::Shift { target, from_front, from_rear } => {
            report::shift_report(&drive_train, target, GearCombination::new(from_front, from_rear), verbose)
        }
        Commands::Table => {
            report::table_report(&drive_train, verbose)
        }
    }
}
