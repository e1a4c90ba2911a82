use crate::EPSILON;
use crate::MAX_SWEEPS;
use crate::Utility;

/// Parameters of one solve.
///
/// `players` and `spots` fix the game; `epsilon` is the summed absolute
/// change per sweep at which the table counts as converged; `max_sweeps`
/// bounds the number of passes before giving up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub players: usize,
    pub spots: usize,
    pub epsilon: Utility,
    pub max_sweeps: usize,
}

impl Config {
    pub fn new(players: usize, spots: usize) -> Self {
        Self {
            players,
            spots,
            ..Self::default()
        }
    }
    pub fn with_epsilon(self, epsilon: Utility) -> Self {
        Self { epsilon, ..self }
    }
    pub fn with_max_sweeps(self, max_sweeps: usize) -> Self {
        Self { max_sweeps, ..self }
    }
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.players < 2 {
            anyhow::bail!("need at least 2 players, got {}", self.players);
        }
        if self.spots < 2 {
            anyhow::bail!("need at least 2 spots, got {}", self.spots);
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.) {
            anyhow::bail!("epsilon must be positive and finite, got {}", self.epsilon);
        }
        if self.max_sweeps == 0 {
            anyhow::bail!("sweep cap must be at least 1");
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 2,
            spots: 6,
            epsilon: EPSILON,
            max_sweeps: MAX_SWEEPS,
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "players {} spots {} epsilon {:.0e} max sweeps {}",
            self.players, self.spots, self.epsilon, self.max_sweeps
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
        assert_eq!(Config::default().epsilon, EPSILON);
    }

    #[test]
    fn rejects_small_games() {
        assert!(Config::new(1, 6).validate().is_err());
        assert!(Config::new(2, 1).validate().is_err());
        assert!(Config::new(2, 2).validate().is_ok());
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert!(Config::default().with_epsilon(0.).validate().is_err());
        assert!(Config::default().with_epsilon(-1.).validate().is_err());
        assert!(Config::default().with_epsilon(Utility::NAN).validate().is_err());
        assert!(Config::default().with_max_sweeps(0).validate().is_err());
    }
}
