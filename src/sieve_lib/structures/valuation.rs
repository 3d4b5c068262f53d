/*!
A total map from atoms to [domains](crate::structures::domain).

The map is built eagerly from every atom of a formula, with each atom free.
From then on, domains are only ever narrowed by [fixing](DomainMap::fix) a literal.

```rust
# use sieve_lib::structures::valuation::{DomainMap, FixOk};
# use sieve_lib::structures::domain::Domain;
# use sieve_lib::types::err::Contradiction;
let mut domains = DomainMap::fresh([1, 2, 3]);
assert_eq!(domains.free_atoms().count(), 3);

assert_eq!(domains.fix(-2), Ok(FixOk::Fixed));
assert_eq!(domains.fix(-2), Ok(FixOk::Unchanged));
assert_eq!(domains.fix(2), Err(Contradiction::Conflict(2)));

assert_eq!(domains.domain_of(2), Domain::Fixed(false));
assert_eq!(domains.value_of(1), None);
```

# Soundness

Atoms outside the map are treated as free.
As the map is built from the atoms of the formula, every atom examined during a solve is in the map.
*/

use std::collections::BTreeMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        domain::Domain,
        literal::{CLiteral, Literal},
    },
    types::err::Contradiction,
};

/// Ok results when fixing a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixOk {
    /// The domain of the atom was narrowed to the polarity of the literal.
    Fixed,

    /// The domain of the atom was already fixed to the polarity of the literal.
    Unchanged,
}

/// The domain of each atom of a formula.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DomainMap {
    domains: BTreeMap<Atom, Domain>,
}

impl DomainMap {
    /// A map with each given atom free.
    pub fn fresh(atoms: impl IntoIterator<Item = Atom>) -> Self {
        DomainMap {
            domains: atoms.into_iter().map(|atom| (atom, Domain::Free)).collect(),
        }
    }

    /// The domain of an atom.
    pub fn domain_of(&self, atom: Atom) -> Domain {
        self.domains.get(&atom).copied().unwrap_or_default()
    }

    /// The value of an atom, if the value is fixed.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.domain_of(atom).value()
    }

    /// Whether the literal is true on the map, i.e. the atom of the literal is fixed to the polarity of the literal.
    pub fn entails(&self, literal: CLiteral) -> bool {
        self.value_of(literal.atom()) == Some(literal.polarity())
    }

    /// Narrows the domain of the atom of `literal` to the polarity of `literal`.
    ///
    /// Fixing a literal whose atom is fixed to the other value is a [conflict](Contradiction::Conflict).
    pub fn fix(&mut self, literal: CLiteral) -> Result<FixOk, Contradiction> {
        let domain = self.domains.entry(literal.atom()).or_default();

        match domain {
            Domain::Free => {
                *domain = Domain::Fixed(literal.polarity());
                log::trace!(target: targets::VALUATION, "Fixed {literal}");
                Ok(FixOk::Fixed)
            }

            Domain::Fixed(value) if *value == literal.polarity() => Ok(FixOk::Unchanged),

            Domain::Fixed(_) => {
                log::trace!(target: targets::VALUATION, "Fixing {literal} conflicts with {}", literal.negate());
                Err(Contradiction::Conflict(literal))
            }
        }
    }

    /// An iterator over atoms and their domains, in ascending atom order.
    pub fn iter(&self) -> impl Iterator<Item = (Atom, Domain)> + '_ {
        self.domains.iter().map(|(atom, domain)| (*atom, *domain))
    }

    /// An iterator over the free atoms of the map, in ascending order.
    pub fn free_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.iter()
            .filter(|(_, domain)| !domain.is_fixed())
            .map(|(atom, _)| atom)
    }

    /// A count of atoms in the map.
    pub fn atom_count(&self) -> usize {
        self.domains.len()
    }

    /// A count of atoms with a fixed value.
    pub fn fixed_count(&self) -> usize {
        self.domains.values().filter(|d| d.is_fixed()).count()
    }
}
