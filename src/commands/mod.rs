//! Command implementations for searchkit

pub mod dispatch;
pub mod game;
pub mod informed;
pub mod uninformed;
