//! Line-oriented command protocol over a loaded polygon set
//!
//! Each input line is a command name followed by its arguments. Anything the
//! handler cannot make sense of is answered with `<UNKNOWN COMMAND>`; queries
//! that need polygons on an empty set get the required-polygon error.

pub mod command;
pub mod error;
pub mod handler;
pub mod response;

pub use command::{Command, Extremum, Measure, Request};
pub use error::{CommandError, CommandResult};
pub use handler::CommandHandler;
pub use response::Response;
