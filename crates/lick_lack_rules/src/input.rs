//! Parsing and validation of typed moves like `0,1`.
//!
//! Checks run in a fixed order and stop at the first failure:
//! shape, x range, y range, occupancy.

use super::{Cell, GameState, Move, Position};
use derive_more::{Display, Error};
use std::num::IntErrorKind;
use tracing::{debug, instrument};

/// Why a typed move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Not two comma-separated integers.
    #[display("Invalid input. Enter your move as a 0-indexed coordinate pair with no parens, like 0,1:")]
    Malformed,
    /// Column outside 0..=2.
    #[display("x-coord out of range.")]
    XOutOfRange,
    /// Row outside 0..=2.
    #[display("y-coord out of range.")]
    YOutOfRange,
    /// Target cell already holds a mark.
    #[display("That position is taken.")]
    PositionTaken,
}

/// Parses `input` as `x,y` and validates it against `state`.
///
/// On success the move carries the user's mark. The state is never
/// modified.
#[instrument(skip(state), fields(user_mark = %state.user_mark()))]
pub fn parse_move(input: &str, state: &GameState) -> Result<Move, InputError> {
    let (x, y) = parse_pair(input.trim())?;

    if !(0..=2).contains(&x) {
        return Err(InputError::XOutOfRange);
    }
    if !(0..=2).contains(&y) {
        return Err(InputError::YOutOfRange);
    }

    let position = Position::from_coords(x as usize, y as usize).ok_or(InputError::Malformed)?;

    match state.board().get(position) {
        Cell::Marked(_) => Err(InputError::PositionTaken),
        Cell::Empty => {
            debug!(%position, "Accepted move");
            Ok(Move::new(position, state.user_mark()))
        }
    }
}

fn parse_pair(input: &str) -> Result<(i64, i64), InputError> {
    let mut parts = input.split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::Malformed);
    };
    Ok((parse_coord(x)?, parse_coord(y)?))
}

/// Integers too large for `i64` saturate so they fail the range check.
fn parse_coord(part: &str) -> Result<i64, InputError> {
    match part.trim().parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(InputError::Malformed),
        },
    }
}
