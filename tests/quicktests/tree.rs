use bstviz::observer::{Event, Recorder};
use bstviz::tree::{Step, Tree};

use std::collections::HashSet;

use crate::Scenario;

#[quickcheck]
fn traversal_is_sorted_and_complete(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let mut sorted = xs.clone();
    sorted.sort();

    tree.inorder_traversal() == sorted && tree.len() == xs.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn search_path_ends_at_target(scenario: Scenario<i8>) -> bool {
    let tree: Tree<i8> = scenario.inserts.iter().copied().collect();
    let mut recorder = Recorder::new();
    let found = tree.search_with(&scenario.needle, &mut recorder);
    let visited = recorder.visited();

    if found {
        // Every visit but the last goes past the target, then it is found exactly once.
        visited.last() == Some(&scenario.needle)
            && visited[..visited.len() - 1]
                .iter()
                .all(|v| *v != scenario.needle)
            && recorder.events().last() == Some(&Event::Found(scenario.needle))
            && recorder.found() == vec![scenario.needle]
    } else {
        recorder.found().is_empty() && !scenario.inserts.contains(&scenario.needle)
    }
}

#[quickcheck]
fn search_path_descends(scenario: Scenario<i8>) -> bool {
    let tree: Tree<i8> = scenario.inserts.iter().copied().collect();
    let steps: Vec<_> = tree.search_path(&scenario.needle).collect();
    let visits = steps
        .iter()
        .filter(|s| matches!(s, Step::Visited(_)))
        .count();

    // At most one visit per level, and the walk always starts at the root.
    visits <= tree.height()
        && match (steps.first(), tree.root()) {
            (Some(Step::Visited(v)), Some(root)) => *v == root.value(),
            (None, None) => true,
            _ => false,
        }
}

#[quickcheck]
fn search_path_follows_child_links(scenario: Scenario<i8>) -> bool {
    let tree: Tree<i8> = scenario.inserts.iter().copied().collect();
    let needle = scenario.needle;
    let mut recorder = Recorder::new();
    let found = tree.search_with(&needle, &mut recorder);

    // Replay the visits from the root, stepping to the child the search should have taken. A
    // revisit or a skipped level would break the chain.
    let mut node = tree.root();
    let mut last = None;
    for visited in recorder.visited() {
        match node {
            Some(n) if *n.value() == visited => {
                last = Some(n);
                node = if needle < visited { n.left() } else { n.right() };
            }
            _ => return false,
        }
    }

    match last {
        // A hit stops at the node holding the needle.
        Some(n) if found => *n.value() == needle,
        // A miss stops at the last real node: the slot it would descend into is empty.
        Some(n) => {
            let next = if needle < *n.value() { n.left() } else { n.right() };
            next.is_none() && node.is_none()
        }
        None => !found && tree.is_empty(),
    }
}

#[quickcheck]
fn search_is_repeatable(scenario: Scenario<i8>) -> bool {
    let tree: Tree<i8> = scenario.inserts.iter().copied().collect();
    let first: Vec<_> = tree.search_path(&scenario.needle).collect();
    let second: Vec<_> = tree.search_path(&scenario.needle).collect();

    first == second
}

#[quickcheck]
fn one_notification_per_insert(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    let mut recorder = Recorder::new();
    for x in &xs {
        tree.insert_with(*x, &mut recorder);
    }

    let expected: Vec<_> = (1..=xs.len())
        .map(|len| Event::StructureChanged { len })
        .collect();
    recorder.events() == expected.as_slice()
}

#[test]
fn sample_scenario() {
    let tree: Tree<i32> = [5, 3, 7, 1, 10, 8, 4, 2].into_iter().collect();
    assert_eq!(tree.inorder_traversal(), vec![1, 2, 3, 4, 5, 7, 8, 10]);

    let mut recorder = Recorder::new();
    assert!(tree.search_with(&7, &mut recorder));
    assert_eq!(recorder.visited(), vec![5, 7]);

    recorder.clear();
    assert!(tree.search_with(&4, &mut recorder));
    assert_eq!(recorder.visited(), vec![5, 3, 4]);
}

#[test]
fn strictly_increasing_input_is_a_chain() {
    let tree: Tree<i32> = [1, 2, 3, 4, 5].into_iter().collect();

    assert_eq!(tree.height(), 5);
    let mut node = tree.root();
    while let Some(n) = node {
        assert!(n.left().is_none());
        node = n.right();
    }
}
