/// A position in a round of penny drop.
///
/// `out` counts the tokens already out, `player` is the seat to act and
/// `first` is set until that player has rolled once on this turn.
/// The absorbing terminal state is the sentinel `(-1, -1, first)`.
///
/// Fields are signed so that the sentinel and decoded padding patterns are
/// representable; validity against a configuration is the `Codec`'s concern.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct State {
    out: i32,
    player: i32,
    first: bool,
}

impl State {
    pub const fn new(out: i32, player: i32, first: bool) -> Self {
        Self { out, player, first }
    }
    pub const fn terminal() -> Self {
        Self::new(-1, -1, true)
    }
    /// fresh round, evaluator to act
    pub const fn opening() -> Self {
        Self::new(0, 0, true)
    }
    pub const fn out(&self) -> i32 {
        self.out
    }
    pub const fn player(&self) -> i32 {
        self.player
    }
    pub const fn first(&self) -> bool {
        self.first
    }
    pub const fn is_terminal(&self) -> bool {
        self.out == -1 && self.player == -1
    }
    /// player 0 is the seat whose penalty is being evaluated
    pub const fn is_evaluator(&self) -> bool {
        self.player == 0
    }
    /// priority moves to the next seat, who must roll before passing again
    pub const fn handoff(&self, players: i32) -> Self {
        Self::new(self.out, (self.player + 1) % players, true)
    }
    /// one more token goes out and the same player keeps the turn
    pub const fn advance(&self) -> Self {
        Self::new(self.out + 1, self.player, false)
    }
    /// roll that changes nothing but spends the first action
    pub const fn stall(&self) -> Self {
        Self::new(self.out, self.player, false)
    }
}

impl From<(i32, i32, bool)> for State {
    fn from((out, player, first): (i32, i32, bool)) -> Self {
        Self::new(out, player, first)
    }
}

impl From<State> for (i32, i32, bool) {
    fn from(state: State) -> Self {
        (state.out, state.player, state.first)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_terminal() {
            write!(f, "XX")
        } else {
            let mark = if self.first { "*" } else { " " };
            write!(f, "P{} {:>2} out{}", self.player, self.out, mark)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_sentinel() {
        assert!(State::terminal().is_terminal());
        assert!(State::terminal() == State::from((-1, -1, true)));
        assert!(!State::opening().is_terminal());
    }

    #[test]
    fn handoff_wraps_to_evaluator() {
        let state = State::new(3, 2, false);
        assert!(state.handoff(3) == State::new(3, 0, true));
        assert!(state.handoff(4) == State::new(3, 3, true));
    }

    #[test]
    fn advance_and_stall_keep_player() {
        let state = State::new(1, 1, true);
        assert!(state.advance() == State::new(2, 1, false));
        assert!(state.stall() == State::new(1, 1, false));
    }

    #[test]
    fn bijective_tuple() {
        let state = State::new(4, 1, false);
        assert!(state == State::from(<(i32, i32, bool)>::from(state)));
    }
}
