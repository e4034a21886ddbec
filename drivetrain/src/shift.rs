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

use tracing::{debug, warn};
use crate::combination::GearCombination;
use crate::drive_train::DriveTrain;
use crate::error::{Error, ErrorKind, Result};

impl DriveTrain {
    /// Move `from` a single cog position toward `to`.
    ///
    /// The front cog is shifted first; the rear cog only moves once the
    /// front cogs already match. Asking to step from a combination to
    /// itself is logged and `from` is handed back unchanged.
    pub fn next_step_toward(&self, from: GearCombination, to: GearCombination) -> Result<GearCombination> {
        let cogs = self.cogs()?;
        if from == to {
            warn!("Asked to shift from {} to itself", from);
            return Ok(from);
        }

        let from_front = cog_position(&cogs.front, from.front(), "front")?;
        let to_front = cog_position(&cogs.front, to.front(), "front")?;
        if from_front != to_front {
            let next = GearCombination::new(cogs.front[step_index(from_front, to_front)], from.rear());
            debug!("Front shift {} -> {}", from, next);
            return Ok(next);
        }

        let from_rear = cog_position(&cogs.rear, from.rear(), "rear")?;
        let to_rear = cog_position(&cogs.rear, to.rear(), "rear")?;
        let next = GearCombination::new(from.front(), cogs.rear[step_index(from_rear, to_rear)]);
        debug!("Rear shift {} -> {}", from, next);
        Ok(next)
    }

    /// Plan the shifts needed to get from `start` to the combination
    /// closest to `target_ratio`.
    ///
    /// The returned sequence begins with `start` and ends with the closest
    /// combination; each neighbouring pair differs by exactly one cog
    /// position. `Ok(None)` means no combination fits under the target.
    pub fn plan_shift_sequence(&self, target_ratio: f64, start: GearCombination) -> Result<Option<Vec<GearCombination>>> {
        let end = match self.find_closest_combination(target_ratio)? {
            Some(end) => end,
            None => {
                debug!("No shift path to ratio {}", target_ratio);
                return Ok(None);
            }
        };

        let cogs = self.cogs()?;
        cog_position(&cogs.front, start.front(), "front")?;
        cog_position(&cogs.rear, start.rear(), "rear")?;

        let mut sequence = vec![start];
        let mut current = start;
        while current != end {
            current = self.next_step_toward(current, end)?;
            sequence.push(current);
        }
        debug!("Planned {} shifts from {} to {}", shift_count(&sequence), start, end);
        Ok(Some(sequence))
    }
}

/// The number of individual cog changes in a planned sequence
pub fn shift_count(sequence: &[GearCombination]) -> usize {
    sequence.len().saturating_sub(1)
}

fn cog_position(cogs: &[u32], teeth: u32, name: &str) -> Result<usize> {
    cogs.iter().position(|cog| *cog == teeth).ok_or_else(|| {
        Error::new(ErrorKind::UnknownCog,
                   format!("No {} tooth {} cog in {:?}", teeth, name, cogs))
    })
}

fn step_index(from: usize, to: usize) -> usize {
    if to > from { from + 1 } else { from - 1 }
}

#[cfg(test)]
mod tests {
    use crate::combination::GearCombination;
    use crate::drive_train::DriveTrain;
    use crate::error::ErrorKind;
    use crate::shift::shift_count;

    fn road_bike() -> DriveTrain {
        DriveTrain::with_cogs(&[38, 30], &[28, 23, 19, 16]).unwrap()
    }

    fn gc(front: u32, rear: u32) -> GearCombination {
        GearCombination::new(front, rear)
    }

    #[test]
    fn front_moves_before_rear() {
        let drive_train = road_bike();
        assert_eq!(drive_train.next_step_toward(gc(38, 28), gc(30, 19)).unwrap(), gc(30, 28));
        assert_eq!(drive_train.next_step_toward(gc(30, 28), gc(30, 19)).unwrap(), gc(30, 23));
        assert_eq!(drive_train.next_step_toward(gc(30, 23), gc(30, 19)).unwrap(), gc(30, 19));
    }

    #[test]
    fn steps_move_in_both_directions() {
        let drive_train = DriveTrain::with_cogs(&[50, 39, 30], &[28, 23, 19, 16]).unwrap();
        assert_eq!(drive_train.next_step_toward(gc(30, 16), gc(50, 28)).unwrap(), gc(39, 16));
        assert_eq!(drive_train.next_step_toward(gc(50, 16), gc(50, 28)).unwrap(), gc(50, 19));
        assert_eq!(drive_train.next_step_toward(gc(50, 28), gc(50, 16)).unwrap(), gc(50, 23));
    }

    #[test]
    fn step_to_self_returns_unchanged() {
        assert_eq!(road_bike().next_step_toward(gc(38, 19), gc(38, 19)).unwrap(), gc(38, 19));
    }

    #[test]
    fn step_with_unknown_cog_fails() {
        let drive_train = road_bike();
        assert_eq!(drive_train.next_step_toward(gc(40, 28), gc(30, 19)).unwrap_err().kind(), ErrorKind::UnknownCog);
        assert_eq!(drive_train.next_step_toward(gc(30, 28), gc(30, 11)).unwrap_err().kind(), ErrorKind::UnknownCog);
        assert_eq!(DriveTrain::new().next_step_toward(gc(30, 28), gc(30, 19)).unwrap_err().kind(), ErrorKind::NotConfigured);
    }

    #[test]
    fn shift_sequence_to_target() {
        let sequence = road_bike().plan_shift_sequence(1.6, gc(38, 28)).unwrap().unwrap();
        assert_eq!(sequence, vec![gc(38, 28), gc(30, 28), gc(30, 23), gc(30, 19)]);
        assert_eq!(shift_count(&sequence), 3);
    }

    #[test]
    fn shift_sequence_already_at_target() {
        let drive_train = road_bike();
        let start = drive_train.find_closest_combination(1.6).unwrap().unwrap();
        let sequence = drive_train.plan_shift_sequence(1.6, start).unwrap().unwrap();
        assert_eq!(sequence, vec![start]);
        assert_eq!(shift_count(&sequence), 0);
    }

    #[test]
    fn shift_sequence_to_unreachable_target() {
        assert_eq!(road_bike().plan_shift_sequence(0.4, gc(38, 28)).unwrap(), None);
    }

    #[test]
    fn shift_sequence_from_unknown_start_fails() {
        assert_eq!(road_bike().plan_shift_sequence(1.6, gc(38, 11)).unwrap_err().kind(), ErrorKind::UnknownCog);
    }

    #[test]
    fn shift_sequence_is_single_cog_steps() {
        let front = [53, 39, 34];
        let rear = [28, 25, 23, 21, 19, 17, 15, 13, 12, 11];
        let drive_train = DriveTrain::with_cogs(&front, &rear).unwrap();
        let sequence = drive_train.plan_shift_sequence(4.0, gc(34, 28)).unwrap().unwrap();
        assert_eq!(sequence.first(), Some(&gc(34, 28)));
        assert_eq!(sequence.last(), Some(&drive_train.find_closest_combination(4.0).unwrap().unwrap()));
        for pair in sequence.windows(2) {
            let front_moves = pair[0].front() != pair[1].front();
            let rear_moves = pair[0].rear() != pair[1].rear();
            assert!(front_moves ^ rear_moves);
        }
    }
}
