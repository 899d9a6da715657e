//! Defines [Selection], the set of currently active options.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::rules::RuleGraph;

/// The set of currently selected options, bound to a [RuleGraph].
///
/// A selection starts empty and is mutated exclusively through
/// [toggle][Self::toggle]. It borrows the rule graph it answers to;
/// several selections may share one graph.
///
/// As long as the rule graph is coherent, the following holds after every
/// toggle: every option a selected option transitively requires is selected
/// as well, and no two selected options conflict. On an incoherent graph
/// toggling still terminates, but the resulting set carries no guarantee.
#[derive(Debug)]
pub struct Selection<'a, O>
where
    O: Debug + Clone + Eq + Hash,
{
    rules: &'a RuleGraph<O>,
    selected: HashSet<O>,
}

impl<'a, O> Selection<'a, O>
where
    O: Debug + Clone + Eq + Hash,
{
    /// Create an empty selection over the given rule graph.
    pub fn new(rules: &'a RuleGraph<O>) -> Self {
        Self {
            rules,
            selected: HashSet::new(),
        }
    }

    /// Toggle a single option, propagating all dependency and conflict rules.
    ///
    /// Selecting an option selects everything it transitively requires.
    /// Every option conflicting with a newly selected one is deselected,
    /// together with everything that depends on it; the requirement closure
    /// of the toggled option always wins over a previously selected
    /// conflicting option.
    ///
    /// Deselecting an option also deselects everything that depends on it.
    /// It does not cascade forward: requirements that were pulled in by an
    /// earlier toggle stay selected.
    ///
    /// Toggling an option that appears in no rule simply selects or
    /// deselects that option.
    pub fn toggle(&mut self, option: O) {
        let rules = self.rules;

        if self.selected.contains(&option) {
            log::trace!("deselecting {:?}", option);
            self.deselect(&option);
        } else {
            log::trace!("selecting {:?}", option);

            for required in rules.forward_closure(&option) {
                let conflicting = rules.conflicts_of(&required);
                self.selected.insert(required);

                for conflict in conflicting {
                    self.deselect(conflict);
                }
            }
        }
    }

    /// Remove every selected option among `option` and its transitive
    /// dependents. Unselected members of that set are skipped.
    fn deselect(&mut self, option: &O) {
        for dependent in self.rules.reverse_closure(option) {
            if self.selected.remove(&dependent) {
                log::trace!("deselected {:?}", dependent);
            }
        }
    }

    /// Return the currently selected options.
    pub fn selection(&self) -> &HashSet<O> {
        &self.selected
    }

    /// Return whether the given option is currently selected.
    pub fn is_selected(&self, option: &O) -> bool {
        self.selected.contains(option)
    }

    /// Return the number of currently selected options.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Return whether no option is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
