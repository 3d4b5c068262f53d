pub const EXHAUSTION: bool = true;
pub const NARROWING: bool = true;

/// The prefix to an atom when displaying an assignment.
pub const ATOM_PREFIX: &str = "x";
