//! Action decoding
//!
//! The decision maker sends two discrete branches per tick: a forward
//! throttle and a turn code. Decoding is strict; the agent decides what to do
//! with a rejected vector.

use crate::error::ActionError;

/// Number of action branches.
pub const ACTION_SIZE: usize = 2;

/// Codes available on each action branch, for policies that sample them.
pub const ACTION_BRANCHES: [usize; ACTION_SIZE] = [2, 3];

/// Turn request for one tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    Straight,
    Left,
    Right,
}

impl Turn {
    /// Decode a turn code: 0 straight, 1 left, 2 right.
    pub fn from_code(code: f32) -> Result<Self, ActionError> {
        if !code.is_finite() {
            return Err(ActionError::NonFinite(code));
        }
        match code {
            c if c == 0.0 => Ok(Self::Straight),
            c if c == 1.0 => Ok(Self::Left),
            c if c == 2.0 => Ok(Self::Right),
            other => Err(ActionError::UnknownTurnCode(other)),
        }
    }

    #[must_use]
    pub const fn code(self) -> f32 {
        match self {
            Self::Straight => 0.0,
            Self::Left => 1.0,
            Self::Right => 2.0,
        }
    }

    /// Sign applied to the turn rate; positive yaw turns right.
    #[must_use]
    pub const fn direction(self) -> f32 {
        match self {
            Self::Straight => 0.0,
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// A decoded action
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Action {
    /// Forward throttle, usually 0 or 1
    pub throttle: f32,
    pub turn: Turn,
}

impl Action {
    pub const IDLE: Self = Self {
        throttle: 0.0,
        turn: Turn::Straight,
    };

    #[must_use]
    pub const fn new(throttle: f32, turn: Turn) -> Self {
        Self { throttle, turn }
    }

    /// Decode a raw action vector.
    pub fn decode(values: &[f32]) -> Result<Self, ActionError> {
        let [throttle, turn] = values else {
            return Err(ActionError::WrongLength {
                expected: ACTION_SIZE,
                actual: values.len(),
            });
        };
        if !throttle.is_finite() {
            return Err(ActionError::NonFinite(*throttle));
        }
        Ok(Self::new(*throttle, Turn::from_code(*turn)?))
    }

    #[must_use]
    pub fn encode(self) -> [f32; ACTION_SIZE] {
        [self.throttle, self.turn.code()]
    }
}
