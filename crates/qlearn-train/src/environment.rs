/// Interface to the world an agent acts in.
///
/// Implementations own any randomness of their own; a session only
/// calls these methods in order and never inspects states or actions.
pub trait Environment {
    type State;
    type Action: Clone;

    /// Begin a new episode and return its initial state.
    fn reset(&mut self) -> Self::State;

    /// Actions available in `state`, in a stable order. Empty means terminal.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Execute `action` in `state` and return `(next_state, reward)`.
    fn step(&mut self, state: &Self::State, action: &Self::Action) -> (Self::State, f64);
}
