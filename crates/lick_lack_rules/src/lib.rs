//! Lick-Lack-Woah rules - pure game logic
//!
//! Board model, win evaluation and typed-move validation for a 3x3
//! game between the marks `W` and `L`. Nothing here performs I/O.
//!
//! # Example
//!
//! ```
//! use lick_lack_rules::{GameState, GameStatus, Mark, parse_move};
//!
//! let state = GameState::new(Mark::W);
//! let mv = parse_move("0,0", &state).unwrap();
//! let state = state.apply(mv);
//! assert_eq!(state.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod input;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::Move;
pub use input::{InputError, parse_move};
pub use position::Position;
pub use state::GameState;
pub use types::{Board, Cell, GameStatus, Mark};
