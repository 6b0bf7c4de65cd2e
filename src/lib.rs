//! # mars-rover
//!
//! A command-driven planar rover. A [`Rover`] holds a heading in degrees and a
//! position on the Cartesian plane, executes strings of single-character call
//! signs (`L`, `R`, `F` by default), and notifies subscribers of every change to
//! its direction or position.
//!
//! Rendering and input handling belong to the consumer; this crate only owns the
//! state machine and its change notifications.

pub mod builder;
pub mod command;
pub mod config;
pub mod direction;
pub mod error;
pub mod events;
pub mod position;
pub mod rover;

pub use builder::*;
pub use command::*;
pub use config::*;
pub use direction::*;
pub use error::*;
pub use events::*;
pub use position::*;
pub use rover::*;
