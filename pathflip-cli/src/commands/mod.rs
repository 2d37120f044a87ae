pub mod classify;
pub mod common;
pub mod model;
pub mod tags;
pub mod trace;
