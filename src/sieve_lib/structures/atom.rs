/*!
An atom (aka. a 'variable').

Each atom is a positive u32, and is the magnitude of some [literal](crate::structures::literal).

```rust
# use sieve_lib::structures::atom::{Atom, ATOM_MAX};
let atom: Atom = 97;
assert!(atom <= ATOM_MAX);
```

# Notes
- Atoms are not required to be contiguous, and are used as the keys of an ordered map rather than the indicies of a vector.
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
