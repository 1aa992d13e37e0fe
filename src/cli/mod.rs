pub(crate) mod args;
pub(crate) mod commands;

pub(crate) use args::{Cli, ColorMode, ProjectionSettings, UseCase};
pub(crate) use commands::{Command, parse_command};
