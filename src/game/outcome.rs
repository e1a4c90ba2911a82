use super::state::State;
use crate::Probability;
use crate::Reward;

/// One branch of a stochastic transition: with `probability`,
/// the acting state yields `reward` and moves to `next`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    probability: Probability,
    reward: Reward,
    next: State,
}

impl Outcome {
    pub fn probability(&self) -> Probability {
        self.probability
    }
    pub fn reward(&self) -> Reward {
        self.reward
    }
    pub fn next(&self) -> State {
        self.next
    }
}

impl From<(Probability, Reward, State)> for Outcome {
    fn from((probability, reward, next): (Probability, Reward, State)) -> Self {
        Self {
            probability,
            reward,
            next,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} {:>+3} -> {}", self.probability, self.reward, self.next)
    }
}
