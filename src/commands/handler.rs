use std::io::{self, BufRead, Write};

use log::debug;

use super::command::{Command, Extremum, Measure, Request};
use super::error::{CommandError, CommandResult};
use super::response::Response;
use crate::parse::LossyLines;
use crate::store::PolygonSet;

/// Runs commands against a loaded polygon set
#[derive(Debug, Clone, Default)]
pub struct CommandHandler {
    polygons: PolygonSet,
}

impl CommandHandler {
    pub fn new(polygons: PolygonSet) -> Self {
        Self { polygons }
    }

    /// Write every loaded polygon in canonical form, one per line
    pub fn print_polygons<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for polygon in &self.polygons {
            writeln!(out, "{}", polygon)?;
        }
        Ok(())
    }

    /// Evaluate `name` with the rest of its command line
    pub fn evaluate(&self, name: &str, args: &str) -> CommandResult<Response> {
        let command = Command::from_name(name).ok_or(CommandError::Unknown)?;
        let request = command.parse_args(args)?;
        self.answer(request)
    }

    /// Evaluate a command and write its response or error line to `out`
    pub fn execute<W: Write>(&self, name: &str, args: &str, out: &mut W) -> io::Result<()> {
        match self.evaluate(name, args) {
            Ok(response) => writeln!(out, "{}", response),
            Err(err) => {
                debug!("{} {:?} rejected: {:?}", name, args.trim(), err);
                writeln!(out, "{}", err)
            }
        }
    }

    /// Split a raw input line into command name and arguments and execute it
    ///
    /// Blank lines produce no output.
    pub fn handle_line<W: Write>(&self, line: &str, out: &mut W) -> io::Result<()> {
        let line = line.trim_start();
        if line.is_empty() {
            return Ok(());
        }
        let (name, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        self.execute(name, args, out)
    }

    /// Process every line of `input` until end of stream
    ///
    /// Undecodable bytes are replaced rather than ending the session; such a
    /// line is answered like any other malformed command.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> io::Result<()> {
        for line in LossyLines::new(input) {
            self.handle_line(&line?, out)?;
        }
        out.flush()
    }

    fn answer(&self, request: Request) -> CommandResult<Response> {
        let set = &self.polygons;
        match request {
            Request::Echo(polygon) => Ok(Response::Polygon(polygon)),
            Request::GetArea(polygon) => Ok(Response::Area(polygon.area())),
            Request::AreaSum(filter) => Ok(Response::Area(set.area_sum(filter))),
            Request::MeanArea => set
                .mean_area()
                .map(Response::Area)
                .ok_or(CommandError::EmptyCollection),
            Request::Extreme(extremum, Measure::Area) => {
                let area = match extremum {
                    Extremum::Max => set.max_area(),
                    Extremum::Min => set.min_area(),
                };
                area.map(Response::Area).ok_or(CommandError::EmptyCollection)
            }
            Request::Extreme(extremum, Measure::Vertexes) => {
                let count = match extremum {
                    Extremum::Max => set.max_vertices(),
                    Extremum::Min => set.min_vertices(),
                };
                count
                    .map(Response::VertexCount)
                    .ok_or(CommandError::EmptyCollection)
            }
        }
    }
}
