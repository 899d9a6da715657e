//! Defines [RuleGraph], the dependency and conflict rules between options.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use petgraph::Direction;

use crate::error::Error;
use crate::util::bag::Bag;
use crate::util::labeled_graph::LabeledGraph;

/// Dependency and conflict rules over a universe of options.
///
/// An option is an opaque identifier; it is registered implicitly the first
/// time it appears in a rule declaration. A dependency is a directed edge
/// "selecting `a` requires `b`"; a conflict is a symmetric relation between
/// two options that may never be selected together. Cycles are legal.
///
/// A [RuleGraph] is built once by repeated [add_dependency][Self::add_dependency]
/// and [add_conflict][Self::add_conflict] calls and is then treated as
/// read-only by every [Selection][crate::selection::Selection] bound to it.
///
/// # Examples
/// ```
/// use rulegraph::{RuleGraph, Selection};
///
/// let mut rules = RuleGraph::new();
/// rules.add_dependency("espresso", "beans");
/// rules.add_conflict("espresso", "decaf");
/// assert!(rules.is_coherent());
///
/// let mut selection = Selection::new(&rules);
/// selection.toggle("espresso");
/// assert!(selection.is_selected(&"beans"));
/// ```
#[derive(Debug)]
pub struct RuleGraph<O>
where
    O: Debug + Clone + Eq + Hash,
{
    deps: LabeledGraph<O>,
    conflicts: Bag<O, O>,
}

impl<O> RuleGraph<O>
where
    O: Debug + Clone + Eq + Hash,
{
    /// Create a rule graph without any rules.
    pub fn new() -> Self {
        Default::default()
    }

    /// Declare that selecting `a` requires `b`.
    ///
    /// Registers both options; re-declaring an existing dependency
    /// has no effect.
    pub fn add_dependency(&mut self, a: O, b: O) {
        self.deps.add_edge(a, b);
    }

    /// Declare that `a` and `b` exclude each other.
    ///
    /// Registers both options. The conflict is recorded symmetrically;
    /// duplicate declarations are kept as-is, since conflicts are only
    /// ever queried for membership.
    pub fn add_conflict(&mut self, a: O, b: O) {
        self.deps.add_node(a.clone());
        self.deps.add_node(b.clone());

        self.conflicts.push(a.clone(), b.clone());
        self.conflicts.push(b, a);
    }

    /// Compute the set of options that `option` transitively requires,
    /// including `option` itself.
    ///
    /// An option that appears in no rule requires nothing but itself.
    pub fn forward_closure(&self, option: &O) -> HashSet<O> {
        self.closure(option, Direction::Outgoing)
    }

    /// Compute the set containing `option` and every option that
    /// transitively depends on it.
    ///
    /// An option that appears in no rule has no dependents.
    pub fn reverse_closure(&self, option: &O) -> HashSet<O> {
        self.closure(option, Direction::Incoming)
    }

    fn closure(&self, option: &O, direction: Direction) -> HashSet<O> {
        if !self.deps.contains_node(option) {
            return HashSet::from([option.clone()]);
        }

        self.deps.reachable_from(option, direction)
    }

    /// Return the options declared to conflict with `option`.
    ///
    /// An option that appears in no rule conflicts with nothing.
    pub fn conflicts_of<'a>(&'a self, option: &O) -> &'a [O] {
        self.conflicts.get(option)
    }

    /// Return an iterator over the direct requirements of `option`.
    pub fn dependencies_of<'a>(&'a self, option: &O) -> impl Iterator<Item = &'a O> + 'a {
        self.deps.neighbors(option, Direction::Outgoing)
    }

    /// Return an iterator over the options that directly require `option`.
    pub fn dependents_of<'a>(&'a self, option: &O) -> impl Iterator<Item = &'a O> + 'a {
        self.deps.neighbors(option, Direction::Incoming)
    }

    /// Return an iterator over every registered option.
    pub fn options(&self) -> impl Iterator<Item = &O> + '_ {
        self.deps.labels()
    }

    /// Return whether `option` appears in any rule.
    pub fn contains(&self, option: &O) -> bool {
        self.deps.contains_node(option)
    }

    /// Return the number of registered options.
    pub fn option_count(&self) -> usize {
        self.deps.node_count()
    }

    /// Return the number of distinct dependency declarations.
    pub fn dependency_count(&self) -> usize {
        self.deps.edge_count()
    }

    /// Check that no option can be forced into a conflict through its own
    /// dependency chain, reporting a witness if one exists.
    ///
    /// For every option, the requirement closure must neither contain one of
    /// the option's own conflict partners nor two options that conflict with
    /// each other. Which witness is reported first is unspecified.
    ///
    /// This check walks the closure of every option and is meant as an
    /// offline validation step after loading a rule set, not for the
    /// toggle path.
    pub fn check_coherence(&self) -> Result<(), Error<O>> {
        for option in self.options() {
            let closure = self.forward_closure(option);

            for dependency in &closure {
                if dependency != option && self.conflicts_of(option).contains(dependency) {
                    log::debug!(
                        "incoherent rules: {:?} requires {:?} but conflicts with it",
                        option,
                        dependency
                    );

                    return Err(Error::ConflictingDependency {
                        option: option.clone(),
                        dependency: dependency.clone(),
                    });
                }
            }

            for first in &closure {
                for second in &closure {
                    if first != second && self.conflicts_of(first).contains(second) {
                        log::debug!(
                            "incoherent rules: {:?} requires {:?} and {:?}, which conflict",
                            option,
                            first,
                            second
                        );

                        return Err(Error::ConflictingRequirements {
                            option: option.clone(),
                            first: first.clone(),
                            second: second.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Return whether the rule graph is coherent,
    /// that is, whether [check_coherence][Self::check_coherence] finds no witness.
    pub fn is_coherent(&self) -> bool {
        self.check_coherence().is_ok()
    }
}

impl<O> Default for RuleGraph<O>
where
    O: Debug + Clone + Eq + Hash,
{
    fn default() -> Self {
        Self {
            deps: Default::default(),
            conflicts: Default::default(),
        }
    }
}
