//! Error-handling module for the crate

use std::fmt::Debug;

use thiserror::Error;

/// Error-collection for all the possible errors occurring in this crate
///
/// The only failure mode of the engine is an incoherent rule graph;
/// it is reported together with a witness by
/// [check_coherence][crate::rules::RuleGraph::check_coherence].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error<O>
where
    O: Debug,
{
    /// An option transitively requires an option it conflicts with.
    #[error("option {option:?} requires {dependency:?} but conflicts with it")]
    ConflictingDependency {
        /// Option whose requirements are inconsistent
        option: O,
        /// Required option that the option also conflicts with
        dependency: O,
    },
    /// Two requirements of the same option conflict with each other.
    #[error(
        "option {option:?} requires both {first:?} and {second:?}, which conflict with each other"
    )]
    ConflictingRequirements {
        /// Option whose requirements are inconsistent
        option: O,
        /// One member of the conflicting pair of requirements
        first: O,
        /// The other member of the conflicting pair of requirements
        second: O,
    },
}
