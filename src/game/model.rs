use super::action::Action;
use super::codec::Codec;
use super::outcome::Outcome;
use super::state::State;
use crate::Probability;
use crate::Reward;

/// Rules of a penny drop round for a fixed (players, spots) configuration.
///
/// A roll out of `spots` faces either hits one of the `out` spots already
/// taken (the roller is eliminated and the round ends), hits the one face
/// that changes nothing, or drops another token out. Only player 0's
/// rewards are tracked: each of its rolls costs `-1` and an elimination
/// charges the `out` tokens on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Model {
    codec: Codec,
}

impl Model {
    pub fn new(players: usize, spots: usize) -> anyhow::Result<Self> {
        Codec::new(players, spots).map(Self::from)
    }
    pub fn codec(&self) -> &Codec {
        &self.codec
    }
    pub fn players(&self) -> i32 {
        self.codec.players()
    }
    pub fn spots(&self) -> i32 {
        self.codec.spots()
    }

    /// in enumeration order, roll first
    pub fn allowed_actions(&self, state: &State) -> Vec<Action> {
        Action::all()
            .iter()
            .copied()
            .filter(|action| action.is_allowed(state.first()))
            .collect()
    }

    /// every branch of `action` taken from `state`, with probabilities summing to one
    pub fn outcomes(&self, state: &State, action: Action) -> Vec<Outcome> {
        assert!(
            self.codec.is_state_valid(state) && !state.is_terminal(),
            "no transitions from {:?}",
            state
        );
        assert!(
            action.is_allowed(state.first()),
            "{} not allowed from {:?}",
            action,
            state
        );
        match action {
            Action::Pass => vec![Outcome::from((1., 0, state.handoff(self.players())))],
            Action::Roll => self.roll(state),
        }
    }

    fn roll(&self, state: &State) -> Vec<Outcome> {
        let spots = self.spots() as Probability;
        let p_loss = state.out() as Probability / spots;
        let p_drop = 1. / spots;
        let (penalty, cost): (Reward, Reward) = match state.is_evaluator() {
            true => (state.out(), -1),
            false => (0, 0),
        };
        let mut outcomes = Vec::with_capacity(3);
        if state.out() > 0 {
            outcomes.push(Outcome::from((p_loss, penalty, State::terminal())));
        }
        // the last free spot has no advance branch: every face is taken or inert
        if state.out() + 1 < self.spots() {
            outcomes.push(Outcome::from((1. - p_loss - p_drop, cost, state.advance())));
        }
        outcomes.push(Outcome::from((p_drop, cost, state.stall())));
        outcomes
    }
}

impl From<Codec> for Model {
    fn from(codec: Codec) -> Self {
        Self { codec }
    }
}
