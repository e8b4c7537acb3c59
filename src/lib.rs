//! polystat - Load polygons from a text file and answer statistics commands

pub mod commands;
pub mod config;
pub mod domain;
pub mod geometry;
pub mod parse;
pub mod store;
