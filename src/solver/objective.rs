use crate::Utility;
use crate::game::State;

/// Which way a state's value is optimized over its action values.
///
/// The evaluator (player 0) minimizes its expected penalty;
/// every other seat maximizes it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Objective {
    Minimize,
    Maximize,
}

impl Objective {
    /// strictly better, so the incumbent survives ties
    pub fn prefers(&self, challenger: Utility, incumbent: Utility) -> bool {
        match self {
            Self::Minimize => challenger < incumbent,
            Self::Maximize => challenger > incumbent,
        }
    }
    /// index and value of the optimum, first occurrence winning ties
    pub fn select<I>(&self, values: I) -> Option<(usize, Utility)>
    where
        I: IntoIterator<Item = Utility>,
    {
        values
            .into_iter()
            .enumerate()
            .fold(None, |best, (i, value)| match best {
                Some((_, incumbent)) if !self.prefers(value, incumbent) => best,
                _ => Some((i, value)),
            })
    }
}

impl From<&State> for Objective {
    fn from(state: &State) -> Self {
        if state.is_evaluator() {
            Self::Minimize
        } else {
            Self::Maximize
        }
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minimize => write!(f, "min"),
            Self::Maximize => write!(f, "max"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluator_minimizes() {
        assert_eq!(Objective::from(&State::new(0, 0, true)), Objective::Minimize);
        assert_eq!(Objective::from(&State::new(0, 1, true)), Objective::Maximize);
        assert_eq!(Objective::from(&State::new(3, 4, false)), Objective::Maximize);
    }

    #[test]
    fn select_extremes() {
        let values = [2.0, -1.0, 3.5, 0.0];
        assert_eq!(Objective::Minimize.select(values), Some((1, -1.0)));
        assert_eq!(Objective::Maximize.select(values), Some((2, 3.5)));
    }

    #[test]
    fn first_wins_ties() {
        let values = [1.0, 1.0, 0.5];
        assert_eq!(Objective::Maximize.select(values), Some((0, 1.0)));
        let values = [0.5, 1.0, 0.5];
        assert_eq!(Objective::Minimize.select(values), Some((0, 0.5)));
    }

    #[test]
    fn select_nothing() {
        assert_eq!(Objective::Minimize.select(std::iter::empty()), None);
    }
}
