pub mod config;
pub mod entities;
pub mod game;
pub mod math;
pub mod maze;
pub mod physics;
