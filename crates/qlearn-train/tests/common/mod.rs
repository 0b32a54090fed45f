#![allow(dead_code)]

use qlearn_train::Environment;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    Left,
    Right,
}

/// Positions `0..=length`; reaching `length` pays 10 and ends the episode,
/// every other step costs 1.
#[derive(Debug, Clone)]
pub struct Corridor {
    pub length: u8,
}

impl Environment for Corridor {
    type State = u8;
    type Action = Move;

    fn reset(&mut self) -> u8 {
        0
    }

    fn legal_actions(&self, state: &u8) -> Vec<Move> {
        if *state >= self.length {
            Vec::new()
        } else {
            vec![Move::Left, Move::Right]
        }
    }

    fn step(&mut self, state: &u8, action: &Move) -> (u8, f64) {
        match action {
            Move::Left => (state.saturating_sub(1), -1.0),
            Move::Right if *state + 1 == self.length => (self.length, 10.0),
            Move::Right => (*state + 1, -1.0),
        }
    }
}

/// Corridor where a right move only succeeds with probability `grip`.
#[derive(Debug, Clone)]
pub struct SlipperyCorridor {
    pub inner: Corridor,
    pub grip: f64,
    rng: ChaCha8Rng,
}

impl SlipperyCorridor {
    pub fn new(length: u8, grip: f64, seed: u64) -> Self {
        SlipperyCorridor {
            inner: Corridor { length },
            grip,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Environment for SlipperyCorridor {
    type State = u8;
    type Action = Move;

    fn reset(&mut self) -> u8 {
        self.inner.reset()
    }

    fn legal_actions(&self, state: &u8) -> Vec<Move> {
        self.inner.legal_actions(state)
    }

    fn step(&mut self, state: &u8, action: &Move) -> (u8, f64) {
        let sample = (self.rng.next_u64() as f64) / ((u64::MAX as f64) + 1.0);
        if *action == Move::Right && sample >= self.grip {
            return (*state, -1.0);
        }
        self.inner.step(state, action)
    }
}
