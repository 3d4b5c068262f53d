/*!
The domain of an atom --- the set of (boolean) values the atom may still take.

A domain is one of:
- {false, true}, i.e. the atom is [free](Domain::Free).
- {false} or {true}, i.e. the value of the atom is [fixed](Domain::Fixed).

The empty domain is never constructed.
Instead, an attempt to exclude the last value of a domain is a [contradiction](crate::types::err::Contradiction).

Domains only ever narrow.
A fixed domain is never made free again during a solve.

```rust
# use sieve_lib::structures::domain::Domain;
let free = Domain::default();
assert!(free.admits(true) && free.admits(false));
assert_eq!(free.to_string(), "[0, 1]");

let fixed = Domain::Fixed(false);
assert_eq!(fixed.value(), Some(false));
assert!(!fixed.admits(true));
assert_eq!(fixed.to_string(), "[0]");
```
*/

/// The values an atom may still take.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Both values are possible.
    #[default]
    Free,

    /// Only the given value is possible.
    Fixed(bool),
}

impl Domain {
    /// The value of the domain, if fixed.
    pub fn value(&self) -> Option<bool> {
        match self {
            Self::Free => None,
            Self::Fixed(value) => Some(*value),
        }
    }

    /// Whether the domain contains the given value.
    pub fn admits(&self, value: bool) -> bool {
        match self {
            Self::Free => true,
            Self::Fixed(fixed) => *fixed == value,
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// The values of the domain, with false before true.
    pub fn values(&self) -> impl Iterator<Item = bool> {
        let admits = *self;
        [false, true].into_iter().filter(move |v| admits.admits(*v))
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => write!(f, "[0, 1]"),
            Self::Fixed(false) => write!(f, "[0]"),
            Self::Fixed(true) => write!(f, "[1]"),
        }
    }
}
