use std::path::PathBuf;

use qlearn_core::{LinearQ, QTable, SparseVector};
use qlearn_train::{Environment, Session, TrainingConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Move {
    Left,
    Right,
}

struct Corridor {
    length: u8,
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

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => TrainingConfig::from_yaml_path(&path).expect("failed to load training config"),
        None => TrainingConfig::from_default_yaml().expect("bundled config is valid"),
    };
    let episodes = config.num_training + 10;
    let mut env = Corridor { length: 6 };

    let mut tabular = Session::seeded(config.clone(), QTable::new(), 12345)
        .expect("invalid training config");
    let run = tabular.run(&mut env, episodes).expect("tabular run failed");
    println!(
        "tabular: training_avg={:.3} testing_avg={:.3}",
        run.average_training_reward, run.average_testing_reward
    );

    let features = |state: &u8, action: &Move| -> SparseVector<&'static str> {
        let next = match action {
            Move::Left => state.saturating_sub(1),
            Move::Right => *state + 1,
        };
        [("bias", 1.0), ("progress", f64::from(next) / 6.0)]
            .into_iter()
            .collect()
    };
    let mut approximate: Session<LinearQ<_, &'static str>> =
        Session::seeded(config, LinearQ::new(features), 12345).expect("invalid training config");
    let run = approximate.run(&mut env, episodes).expect("approximate run failed");
    println!(
        "approximate: training_avg={:.3} testing_avg={:.3} weights={:?}",
        run.average_training_reward,
        run.average_testing_reward,
        approximate.agent().values().weights()
    );
}
