use super::config::Config;
use super::convergence::Convergence;
use super::objective::Objective;
use super::sweep::Sweep;
use crate::Address;
use crate::MAX_SWEEPS;
use crate::Utility;
use crate::game::Action;
use crate::game::Model;
use crate::game::State;
use std::time::Instant;

/// Asynchronous value iteration over the packed state table.
///
/// The engine owns one value per address and is the only writer.
/// Each backup sets
///
/// `V(s) = opt_a Σ p · (r + V(s'))`
///
/// where `opt` is the state's `Objective`. Backups are applied in place,
/// so later addresses in a sweep already see earlier updates (Gauss-Seidel).
/// There is no discounting: every non-terminal state reaches the absorbing
/// terminal with positive probability, which is what makes the sweeps settle.
///
/// Address 0 is the terminal and stays pinned at zero, as do padding
/// addresses, which are never written.
pub struct Engine {
    model: Model,
    values: Vec<Utility>,
}

impl Engine {
    pub fn new(players: usize, spots: usize) -> anyhow::Result<Self> {
        Model::new(players, spots).map(Self::from)
    }
    /// build and converge a table for `config`
    pub fn solve(config: &Config) -> anyhow::Result<(Self, Convergence)> {
        config.validate()?;
        let mut engine = Self::new(config.players, config.spots)?;
        log::info!("solving {}", engine.model.codec());
        let convergence = engine.converge(config.epsilon, config.max_sweeps)?;
        Ok((engine, convergence))
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
    pub fn values(&self) -> &[Utility] {
        &self.values
    }
    pub fn value(&self, state: &State) -> Utility {
        self.values[self.model.codec().encode(state)]
    }
    /// value of a fresh round from the evaluator's seat
    pub fn opening(&self) -> Utility {
        self.value(&State::opening())
    }

    /// expected reward plus continuation value of taking `action` in `state`,
    /// read against the table as it currently stands
    pub fn action_value(&self, state: &State, action: Action) -> Utility {
        self.model
            .outcomes(state, action)
            .iter()
            .map(|o| {
                let next = self.values[self.model.codec().encode(&o.next())];
                o.probability() * (o.reward() as Utility + next)
            })
            .sum()
    }
    /// every allowed action with its current value, in enumeration order
    pub fn action_values(&self, state: &State) -> Vec<(Action, Utility)> {
        self.model
            .allowed_actions(state)
            .into_iter()
            .map(|action| (action, self.action_value(state, action)))
            .collect()
    }

    /// one Bellman backup at `address`, returning (old, new).
    /// terminal and padding addresses are left alone and report (0, 0).
    pub fn update_one(&mut self, address: Address) -> (Utility, Utility) {
        let ref state = self.model.codec().decode(address);
        if state.is_terminal() || !self.model.codec().is_state_valid(state) {
            return (0., 0.);
        }
        let old = self.values[address];
        let values = self.action_values(state).into_iter().map(|(_, v)| v);
        let Some((_, new)) = Objective::from(state).select(values) else {
            unreachable!("roll is always allowed from {}", state)
        };
        self.values[address] = new;
        (old, new)
    }

    /// one ascending pass over the whole address space
    pub fn sweep(&mut self) -> Sweep {
        let mut sweep = Sweep::default();
        for address in self.model.codec().addresses() {
            let (old, new) = self.update_one(address);
            sweep.witness(old, new);
        }
        sweep
    }

    pub fn run_to_convergence(&mut self, epsilon: Utility) -> anyhow::Result<Convergence> {
        self.converge(epsilon, MAX_SWEEPS)
    }

    /// sweep until one pass changes the table by at most `epsilon` in total,
    /// failing if that takes more than `max_sweeps` passes
    pub fn converge(&mut self, epsilon: Utility, max_sweeps: usize) -> anyhow::Result<Convergence> {
        let start = Instant::now();
        for n in 1..=max_sweeps {
            let sweep = self.sweep();
            log::debug!("{:<16}{}", format!("sweep {}", n), sweep);
            if sweep.is_stable(epsilon) {
                let convergence = Convergence::from((n, sweep, start.elapsed()));
                log::info!("converged {}", convergence);
                return Ok(convergence);
            }
        }
        log::warn!("gave up after {} sweeps", max_sweeps);
        Err(anyhow::anyhow!(
            "did not converge within {} sweeps (epsilon {:e})",
            max_sweeps,
            epsilon
        ))
    }
}

impl From<Model> for Engine {
    fn from(model: Model) -> Self {
        Self {
            values: vec![0.; model.codec().max_state_index()],
            model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    fn solved(players: usize, spots: usize) -> Engine {
        let mut engine = Engine::new(players, spots).unwrap();
        engine.run_to_convergence(EPSILON).unwrap();
        engine
    }

    #[test]
    fn rejects_degenerate_configurations() {
        assert!(Engine::new(1, 6).is_err());
        assert!(Engine::new(2, 1).is_err());
        assert!(Engine::solve(&Config::new(1, 1)).is_err());
    }

    #[test]
    fn table_spans_padded_space() {
        let engine = Engine::new(3, 5).unwrap();
        assert_eq!(engine.values().len(), engine.model().codec().max_state_index());
        assert!(engine.values().iter().all(|v| *v == 0.));
    }

    #[test]
    fn terminal_and_padding_untouched() {
        let mut engine = Engine::new(3, 5).unwrap();
        let codec = *engine.model().codec();
        let padding = codec
            .addresses()
            .filter(|a| !codec.is_state_valid(&codec.decode(*a)))
            .collect::<Vec<_>>();
        assert!(!padding.is_empty());
        for _ in 0..8 {
            engine.sweep();
            assert_eq!(engine.values()[0], 0.);
        }
        for address in padding {
            assert_eq!(engine.update_one(address), (0., 0.));
            assert_eq!(engine.values()[address], 0.);
        }
        assert_eq!(engine.update_one(0), (0., 0.));
    }

    #[test]
    fn update_reports_before_and_after() {
        let mut engine = Engine::new(2, 6).unwrap();
        let address = engine.model().codec().encode(&State::opening());
        // evaluator pays one per roll and cannot be eliminated on the opening roll
        let (old, new) = engine.update_one(address);
        assert_eq!(old, 0.);
        assert!((new - -1.).abs() < 1e-12);
        assert_eq!(engine.values()[address], new);
    }

    #[test]
    fn converges_two_players_six_spots() {
        let mut engine = Engine::new(2, 6).unwrap();
        let convergence = engine.run_to_convergence(EPSILON).unwrap();
        assert!(convergence.sweeps() > 1);
        assert!(convergence.last().is_stable(EPSILON));
        assert_eq!(convergence.last().visits(), 33);
        assert_eq!(engine.values()[0], 0.);
        assert!(engine.values().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn convergence_is_idempotent() {
        let mut engine = solved(2, 6);
        let before = engine.values().to_vec();
        let again = engine.run_to_convergence(EPSILON).unwrap();
        assert!(again.last().is_stable(EPSILON));
        for (a, b) in before.iter().zip(engine.values()) {
            assert!((a - b).abs() <= EPSILON);
        }
    }

    #[test]
    fn fixed_point_satisfies_backup() {
        let engine = solved(3, 4);
        let codec = *engine.model().codec();
        for (address, state) in codec.states().filter(|(a, _)| *a != 0) {
            let values = engine.action_values(&state).into_iter().map(|(_, v)| v);
            let (_, best) = Objective::from(&state).select(values).unwrap();
            assert!((engine.values()[address] - best).abs() < 1e-5, "{}", state);
        }
    }

    #[test]
    fn two_spot_game_in_closed_form() {
        // with one token out every value is zero: a roll either eliminates
        // the roller or repeats the position. from the opening the evaluator
        // keeps rolling, V = -1 + V/2 with the advance branch worth zero.
        let engine = solved(2, 2);
        assert!((engine.opening() - -2.).abs() < 1e-5);
        assert!(engine.value(&State::new(1, 0, false)).abs() < 1e-5);
        assert!(engine.value(&State::new(1, 1, false)).abs() < 1e-5);
        assert!(engine.value(&State::new(0, 1, false)).abs() < 1e-5);
        assert!((engine.value(&State::new(0, 0, false)) - -2.).abs() < 1e-5);
    }

    #[test]
    fn sweep_cap_reports_non_convergence() {
        let mut engine = Engine::new(2, 6).unwrap();
        assert!(engine.converge(EPSILON, 1).is_err());
        let config = Config::new(2, 6).with_max_sweeps(1);
        assert!(Engine::solve(&config).is_err());
    }

    #[test]
    fn solve_from_config() {
        let (engine, convergence) = Engine::solve(&Config::new(3, 2)).unwrap();
        assert_eq!(engine.values().len(), 17);
        assert!(convergence.sweeps() >= 1);
    }
}
