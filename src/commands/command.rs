use std::str::FromStr;

use super::error::{CommandError, CommandResult};
use crate::domain::Polygon;
use crate::parse::{parse_leading_polygon, parse_polygon_line};
use crate::store::AreaFilter;

/// Every command the handler understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Echo,
    GetArea,
    Area,
    Max,
    Min,
}

impl Command {
    /// Resolve a command by its exact (case-sensitive) name
    pub fn from_name(name: &str) -> Option<Command> {
        match name {
            "ECHO" => Some(Command::Echo),
            "GET_AREA" => Some(Command::GetArea),
            "AREA" => Some(Command::Area),
            "MAX" => Some(Command::Max),
            "MIN" => Some(Command::Min),
            _ => None,
        }
    }

    /// Parse the rest of the command line into a fully-typed request
    pub fn parse_args(self, args: &str) -> CommandResult<Request> {
        match self {
            Command::Echo => {
                let polygon = parse_leading_polygon(args).map_err(|_| CommandError::Unknown)?;
                Ok(Request::Echo(polygon))
            }
            Command::GetArea => {
                let polygon = parse_polygon_line(args).map_err(|_| CommandError::Unknown)?;
                Ok(Request::GetArea(polygon))
            }
            Command::Area => {
                let mut words = args.split_whitespace();
                let request = match words.next() {
                    Some("ODD") => Request::AreaSum(AreaFilter::Odd),
                    Some("EVEN") => Request::AreaSum(AreaFilter::Even),
                    Some("MEAN") => Request::MeanArea,
                    Some(word) => {
                        let count = word.parse::<i64>().map_err(|_| CommandError::Unknown)?;
                        Request::AreaSum(AreaFilter::VertexCount(count))
                    }
                    None => return Err(CommandError::Unknown),
                };
                expect_no_more_args(words)?;
                Ok(request)
            }
            Command::Max | Command::Min => {
                let extremum = if self == Command::Max {
                    Extremum::Max
                } else {
                    Extremum::Min
                };
                let mut words = args.split_whitespace();
                let measure = words
                    .next()
                    .and_then(|word| word.parse::<Measure>().ok())
                    .ok_or(CommandError::Unknown)?;
                expect_no_more_args(words)?;
                Ok(Request::Extreme(extremum, measure))
            }
        }
    }
}

fn expect_no_more_args<'a>(mut words: impl Iterator<Item = &'a str>) -> CommandResult<()> {
    match words.next() {
        None => Ok(()),
        Some(_) => Err(CommandError::Unknown),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

/// What MAX/MIN look at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Area,
    Vertexes,
}

impl FromStr for Measure {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AREA" => Ok(Measure::Area),
            "VERTEXES" => Ok(Measure::Vertexes),
            _ => Err(CommandError::Unknown),
        }
    }
}

/// A command together with its validated arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Echo(Polygon),
    GetArea(Polygon),
    AreaSum(AreaFilter),
    MeanArea,
    Extreme(Extremum, Measure),
}
