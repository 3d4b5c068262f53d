/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
Note, no log implementation is provided.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [canonicalisation](crate::preprocessing::canonical)
    pub const CANONICAL: &str = "canonical";

    /// Logs related to [grouping](crate::preprocessing::groups)
    pub const GROUPING: &str = "grouping";

    /// Logs related to the [majority heuristic](crate::procedures::narrow)
    pub const NARROWING: &str = "narrowing";

    /// Logs related to [unit propagation](crate::procedures::propagate)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the [domain map](crate::structures::valuation)
    pub const VALUATION: &str = "valuation";

    /// Logs related to [building](crate::builder) a context
    pub const BUILD: &str = "build";
}
