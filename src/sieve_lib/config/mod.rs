/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
The default configuration is the full procedure: each group is checked for exhaustion, narrowed by the majority heuristic, and then propagated.
*/

pub mod defaults;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Boolean valued configurations.
    pub switch: Switches,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            switch: Switches::default(),
        }
    }
}

/// Boolean valued context configurations
///
/// When set to true things related to the identifier are enabled.
#[derive(Clone, Debug)]
pub struct Switches {
    /// Treat a group with at least 2^n clauses over n atoms as a contradiction.
    pub exhaustion: bool,

    /// Fix the value of an atom when more than 2^(n-1) open clauses of a group over n atoms agree on its polarity.
    pub narrowing: bool,
}

impl Default for Switches {
    fn default() -> Self {
        Switches {
            exhaustion: defaults::EXHAUSTION,
            narrowing: defaults::NARROWING,
        }
    }
}
