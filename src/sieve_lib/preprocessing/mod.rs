/*!
Procedures applied to a formula before any atom is given a value.

- [canonical] removes repeated literals, duplicate clauses, and reversed clauses, and fixes the order of the remaining clauses.
- [groups] partitions canonical clauses by the atoms they mention.

Each procedure is a pure transformation, and the formula given to a context is never mutated.
*/

pub mod canonical;
pub mod groups;
