use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of groups visited during a solve.
    pub groups: usize,

    /// A count of groups visited with every clause already satisfied.
    pub inactive_groups: usize,

    /// A count of atoms fixed by the majority heuristic.
    pub narrowed: usize,

    /// A count of atoms fixed by unit propagation.
    pub propagated: usize,

    /// A count of passes made over the formula during unit propagation.
    pub propagation_passes: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

impl std::fmt::Display for Counters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "c GROUPS             {}", self.groups)?;
        writeln!(f, "c INACTIVE GROUPS    {}", self.inactive_groups)?;
        writeln!(f, "c NARROWED           {}", self.narrowed)?;
        writeln!(f, "c PROPAGATED         {}", self.propagated)?;
        writeln!(f, "c PROPAGATION PASSES {}", self.propagation_passes)?;
        write!(f, "c TIME               {:.2?}", self.time)
    }
}
