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

pub mod error;
pub mod cogs;
pub mod combination;
pub mod drive_train;
pub mod shift;

pub use combination::GearCombination;
pub use drive_train::DriveTrain;
pub use error::{Error, ErrorKind, Result};
