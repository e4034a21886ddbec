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

use tracing::debug;
use utils::numeric::is_strictly_descending;
use crate::error::{Error, ErrorKind, Result};

/// Check a cog list is usable by a drive train.
///
/// The list must be non-empty, sorted strictly descending (largest cog
/// first) and contain no zero-tooth cogs. Nothing is re-ordered; an
/// unsorted list is rejected.
pub fn validate_cog_list(name: &str, cogs: &[u32]) -> Result<()> {
    if cogs.is_empty() {
        return Err(Error::new(ErrorKind::EmptyCogList,
                              format!("No {} cogs provided", name)));
    }
    if !is_strictly_descending(cogs) {
        return Err(Error::new(ErrorKind::UnsortedCogList,
                              format!("{} cogs {:?} must be sorted largest first with no repeats", name, cogs)));
    }
    if let Some(pos) = cogs.iter().position(|teeth| *teeth == 0) {
        return Err(Error::new(ErrorKind::InvalidCog,
                              format!("{} cog {} has zero teeth", name, pos)));
    }
    Ok(())
}

/// Parse a textual cog list such as `38,30`, `[28, 23, 19, 16]` or `28 23 19`.
///
/// Ordering is left untouched so that [validate_cog_list] can reject it.
/// An empty list parses successfully and is rejected later on as empty.
pub fn parse_cog_list(input: &str) -> Result<Vec<u32>> {
    let trimmed = input.trim();
    let body = match (trimmed.find('['), trimmed.rfind(']')) {
        (None, None) => trimmed,
        (Some(0), Some(closing_bracket_pos)) if closing_bracket_pos == trimmed.len() - 1 => {
            &trimmed[1..closing_bracket_pos]
        }
        _ => {
            return Err(Error::new(ErrorKind::InvalidShape,
                                  format!("'{}' is not a list of cogs", input)));
        }
    };
    if body.contains('[') || body.contains(']') {
        return Err(Error::new(ErrorKind::InvalidShape,
                              format!("'{}' contains a nested list", input)));
    }

    let mut cogs = Vec::new();
    for token in body.split(|c: char| c == ',' || c.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        let teeth = token.parse::<u32>().map_err(|e| {
            Error::new(ErrorKind::ParseError,
                       format!("'{}' is not a valid tooth count. {}", token, e))
        })?;
        cogs.push(teeth);
    }
    debug!("Parsed cog list '{}' as {:?}", input, cogs);
    Ok(cogs)
}
