pub mod algorithms;
pub mod config;
pub mod grid;
pub mod renderer;
pub mod simulation;
pub mod statistics;
