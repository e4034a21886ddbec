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

pub fn round_float_to(float: f64, decimal_places: u32) -> f64 {
    let precision_base: u64 = 10;
    let precision_factor = precision_base.pow(decimal_places) as f64;
    (float * precision_factor).round() / precision_factor
}

/// How far `actual` falls short of (or beyond) `target`, expressed as a
/// percentage of `target`. Positive means `actual` is below `target`.
///
/// Returns `None` when `target` is zero as no meaningful percentage exists
pub fn percentage_gap(target: f64, actual: f64) -> Option<f64> {
    if target == 0.0 {
        return None;
    }
    Some(((target - actual) / target) * 100.0)
}

/// True if every element is strictly smaller than the one before it.
/// Empty and single-element slices are considered descending
pub fn is_strictly_descending<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] > pair[1])
}
