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

use std::fmt::{Display, Formatter};
use tracing::warn;

/// A single front/rear cog pairing.
///
/// Identity is the pair of tooth counts; two combinations with the same
/// ratio but different cogs are different combinations.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GearCombination {
    front: u32,
    rear: u32
}

impl GearCombination {
    pub fn new(front: u32, rear: u32) -> GearCombination {
        GearCombination { front, rear }
    }

    pub fn front(&self) -> u32 {
        self.front
    }

    pub fn rear(&self) -> u32 {
        self.rear
    }

    /// The front tooth count divided by the rear tooth count.
    ///
    /// Returns `None` when the rear cog has no teeth
    pub fn ratio(&self) -> Option<f64> {
        if self.rear == 0 {
            warn!("Can't calculate ratio for f={} r={}. Rear cog has zero teeth", self.front, self.rear);
            return None;
        }
        Some(self.front as f64 / self.rear as f64)
    }

    pub fn format(&self, verbose: bool) -> String {
        let ratio = format_ratio(self.ratio());
        match verbose {
            true => format!("Front: {}, Rear: {}, Ratio {}", self.front, self.rear, ratio),
            false => format!("F:{} R:{} Ratio {}", self.front, self.rear, ratio)
        }
    }
}

impl Display for GearCombination {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format(f.alternate()))
    }
}

fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.3}", r),
        None => "None".to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::combination::GearCombination;

    fn check_ratio(front: u32, rear: u32) {
        let ratio = front as f64 / rear as f64;
        let ratio_str = format!("{:.3}", ratio);
        let gc = GearCombination::new(front, rear);
        assert_eq!(gc.ratio(), Some(ratio));
        assert_eq!(gc.format(true), format!("Front: {}, Rear: {}, Ratio {}", front, rear, ratio_str));
        assert_eq!(gc.format(false), format!("F:{} R:{} Ratio {}", front, rear, ratio_str));
    }

    #[test]
    fn simple_combination() {
        let gc = GearCombination::new(23, 45);
        assert_eq!(gc.ratio(), Some(23.0 / 45.0));
        assert_eq!(gc.format(true), "Front: 23, Rear: 45, Ratio 0.511");
        assert_eq!(gc.format(false), "F:23 R:45 Ratio 0.511");
    }

    #[test]
    fn straightforward_ratios() {
        check_ratio(38, 19);
        check_ratio(38, 16);
        check_ratio(30, 28);
        check_ratio(52, 11);
    }

    #[test]
    fn zero_rear_cog_has_no_ratio() {
        let gc = GearCombination::new(38, 0);
        assert!(gc.ratio().is_none());
        assert_eq!(gc.format(true), "Front: 38, Rear: 0, Ratio None");
        assert_eq!(gc.format(false), "F:38 R:0 Ratio None");
    }

    #[test]
    fn display_uses_compact_and_alternate_verbose() {
        let gc = GearCombination::new(38, 16);
        assert_eq!(format!("{}", gc), "F:38 R:16 Ratio 2.375");
        assert_eq!(format!("{:#}", gc), "Front: 38, Rear: 16, Ratio 2.375");
    }

    #[test]
    fn equality_is_by_cogs_not_ratio() {
        let a = GearCombination::new(36, 6);
        let b = GearCombination::new(24, 4);
        assert_eq!(a.ratio(), b.ratio());
        assert_ne!(a, b);
        assert_eq!(a, GearCombination::new(36, 6));
    }
}
