//! End-to-end scenarios driving the public API the way a rule-set loader
//! and a UI layer would: declare rules, validate, then toggle options.

use std::collections::HashSet;

use rulegraph::{Error, RuleGraph, Selection};

fn set(options: &[&'static str]) -> HashSet<&'static str> {
    options.iter().copied().collect()
}

/// Rules for a small build configuration: transport features stack on top
/// of each other, and static builds rule out runtime plugin loading.
fn build_configuration() -> RuleGraph<&'static str> {
    let mut rules = RuleGraph::new();

    rules.add_dependency("http2", "tls");
    rules.add_dependency("tls", "crypto");
    rules.add_dependency("static-build", "musl");
    rules.add_dependency("plugins", "dynamic-loading");
    rules.add_conflict("static-build", "dynamic-loading");

    rules
}

#[test]
fn loader_accepts_the_build_configuration() {
    let rules = build_configuration();

    assert!(rules.is_coherent());
    assert_eq!(rules.check_coherence(), Ok(()));
}

#[test]
fn toggling_walks_the_dependency_stack() {
    let rules = build_configuration();
    let mut selection = Selection::new(&rules);

    selection.toggle("http2");
    assert_eq!(selection.selection(), &set(&["http2", "tls", "crypto"]));

    selection.toggle("plugins");
    assert_eq!(
        selection.selection(),
        &set(&["http2", "tls", "crypto", "plugins", "dynamic-loading"])
    );

    // static-build evicts dynamic-loading and with it the plugins option
    selection.toggle("static-build");
    assert_eq!(
        selection.selection(),
        &set(&["http2", "tls", "crypto", "static-build", "musl"])
    );

    // deselecting a base requirement takes the whole stack down
    selection.toggle("crypto");
    assert_eq!(selection.selection(), &set(&["static-build", "musl"]));
}

#[test]
fn loader_rejects_contradictory_rules() {
    let mut rules = build_configuration();
    rules.add_dependency("static-build", "dynamic-loading");

    assert!(!rules.is_coherent());
    assert!(matches!(
        rules.check_coherence(),
        Err(Error::ConflictingDependency {
            option: "static-build",
            dependency: "dynamic-loading",
        })
    ));
}
