use crate::Utility;

/// Change diagnostics accumulated over one pass of the address space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sweep {
    total: Utility,
    max: Utility,
    visits: usize,
}

impl Sweep {
    /// record one backup's before and after values
    pub fn witness(&mut self, old: Utility, new: Utility) {
        let change = (old - new).abs();
        self.total += change;
        self.max = self.max.max(change);
        self.visits += 1;
    }
    /// summed absolute change
    pub fn total(&self) -> Utility {
        self.total
    }
    /// largest single absolute change
    pub fn max(&self) -> Utility {
        self.max
    }
    /// addresses visited, padding included
    pub fn visits(&self) -> usize {
        self.visits
    }
    pub fn is_stable(&self, epsilon: Utility) -> bool {
        self.total <= epsilon
    }
}

impl std::fmt::Display for Sweep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<24}{:<24}",
            format!("total {:.3e}", self.total),
            format!("max {:.3e}", self.max),
        )
    }
}
