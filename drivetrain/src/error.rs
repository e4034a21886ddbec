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

use std::{error, fmt, num, result};
use std::fmt::{Display, Formatter};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub struct Error{
    kind: ErrorKind,
    details: String
}

impl Error {
    pub fn new(kind: ErrorKind, details: String) -> Error {
        Error{ kind, details }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.kind.as_str(), self.details)
    }
}

impl error::Error for Error {}

impl From<num::ParseIntError> for Error {
    fn from(e: num::ParseIntError) -> Self {
        Error::new(ErrorKind::ParseError, e.to_string())
    }
}


#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ErrorKind {
    NotConfigured,
    InvalidShape,
    EmptyCogList,
    UnsortedCogList,
    InvalidCog,
    UnknownCog,
    ParseError,
    ArgumentError
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotConfigured => "drive train not configured",
            ErrorKind::InvalidShape => "cog list is not a sequence",
            ErrorKind::EmptyCogList => "empty cog list",
            ErrorKind::UnsortedCogList => "cog list not sorted descending",
            ErrorKind::InvalidCog => "invalid cog",
            ErrorKind::UnknownCog => "cog not fitted to drive train",
            ErrorKind::ParseError => "parse error",
            ErrorKind::ArgumentError => "argument error"
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{Error, ErrorKind};

    #[test]
    fn display_includes_kind_and_details() {
        let err = Error::new(ErrorKind::EmptyCogList, "front cogs".to_string());
        assert_eq!(err.to_string(), "empty cog list - front cogs");
        assert_eq!(err.kind(), ErrorKind::EmptyCogList);
        assert_eq!(err.details(), "front cogs");
    }

    #[test]
    fn parse_int_errors_convert() {
        let err: Error = "x".parse::<u32>().unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::ParseError);
    }
}
