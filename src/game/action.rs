/// The two choices available on a turn.
///
/// Declaration order is enumeration order, which is also the
/// tie-break order when two actions share the optimal value.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Roll,
    Pass,
}

impl Action {
    pub const fn all() -> &'static [Self] {
        &[Self::Roll, Self::Pass]
    }
    /// a player must roll at least once before passing
    pub const fn is_allowed(&self, first: bool) -> bool {
        match self {
            Self::Roll => true,
            Self::Pass => !first,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Roll => write!(f, "ROLL"),
            Self::Pass => write!(f, "PASS"),
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "ROLL" => Ok(Self::Roll),
            "PASS" => Ok(Self::Pass),
            other => Err(anyhow::anyhow!("unknown action {}", other)),
        }
    }
}
