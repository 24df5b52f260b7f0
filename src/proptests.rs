use super::*;

use proptest::prelude::*;
use std::collections::BTreeSet;

fn validate_trie(t: &Trie) {
    let root = t.node(t.root());
    assert!(!root.is_end(), "root must never hold a word");
    assert_eq!(root.parent(), None);

    let mut stack: Vec<NodeId> = vec![t.root()];
    let mut reachable = 0usize;
    let mut edges = 0usize;
    let mut terminals = 0usize;
    while let Some(id) = stack.pop() {
        reachable += 1;
        let node = t.node(id);

        if id != t.root() {
            assert!(
                node.is_end() || node.has_children(),
                "childless non-terminal node must be pruned"
            );
        }
        if node.is_end() {
            terminals += 1;
        }

        let mut children = 0usize;
        let mut terminal_children = 0usize;
        for (tag, child_id) in node.children() {
            let child = t.node(child_id);
            assert_eq!(child.tag(), Some(tag), "edge tag must match child tag");
            assert_eq!(child.parent(), Some(id), "child must point back at its parent");
            children += 1;
            if child.is_end() {
                terminal_children += 1;
            }
            stack.push(child_id);
        }
        assert_eq!(node.prefixes(), children, "prefixes must equal child count");
        assert_eq!(node.words(), terminal_children, "words must count terminal children");
        edges += children;
    }

    assert_eq!(reachable, t.node_count(), "every live node must be reachable once");
    assert_eq!(edges, t.total_prefixes(None));
    assert_eq!(terminals, t.total_words(None));
}

#[derive(Clone, Debug)]
enum Op {
    Insert(String),
    Delete(String),
    Find(String),
}

fn word_strategy() -> impl Strategy<Value = String> + Clone {
    // A small alphabet keeps prefixes shared.
    "[abc]{1,6}"
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let word = word_strategy();
    let op = prop_oneof![
        50 => word.clone().prop_map(Op::Insert),
        30 => word.clone().prop_map(Op::Delete),
        20 => word.clone().prop_map(Op::Find),
    ];
    prop::collection::vec(op, 0..=300)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t = Trie::new();
        let mut m: BTreeSet<String> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(word) => {
                    let before = t.total_prefixes(None);
                    let new_t = t.insert(&word).unwrap();
                    let new_m = m.insert(word);
                    prop_assert_eq!(new_t, new_m);
                    if !new_t {
                        prop_assert_eq!(t.total_prefixes(None), before);
                    }
                }
                Op::Delete(word) => {
                    let has_children = m.iter().any(|w| w.len() > word.len() && w.starts_with(&word));
                    let outcome = t.delete(&word);
                    let expected = if !m.remove(&word) {
                        DeleteOutcome::NotFound
                    } else if has_children {
                        DeleteOutcome::ValueCleared
                    } else {
                        DeleteOutcome::NodeRemoved
                    };
                    prop_assert_eq!(outcome, expected);
                }
                Op::Find(word) => {
                    prop_assert_eq!(t.find(&word), m.contains(&word));
                }
            }

            prop_assert_eq!(t.total_words(None), m.len());
        }

        validate_trie(&t);
        let expected: Vec<String> = m.into_iter().collect();
        prop_assert_eq!(t.words(), expected);
    }

    #[test]
    fn prop_non_member_prefixes_not_found(words in prop::collection::btree_set(word_strategy(), 1..20)) {
        let mut t = Trie::new();
        for w in &words {
            t.insert(w).unwrap();
        }
        for w in &words {
            prop_assert!(t.find(w));
            for (i, _) in w.char_indices().skip(1) {
                let prefix = &w[..i];
                prop_assert_eq!(t.find(prefix), words.contains(prefix));
            }
        }
    }

    #[test]
    fn prop_tolerance_is_monotone(
        words in prop::collection::btree_set(word_strategy(), 1..20),
        query in word_strategy(),
        k in 0usize..4,
        seed in any::<u64>(),
    ) {
        let mut t = Trie::new();
        for w in &words {
            t.insert(w).unwrap();
        }

        let low = t.lookup(&query, k, &mut RandomBranch::seeded(seed));
        let high = t.lookup(&query, k + 1, &mut RandomBranch::seeded(seed));
        if !low.is_empty() {
            prop_assert!(!high.is_empty());
        }
        let high_words: BTreeSet<String> = high.words().into_iter().collect();
        for w in low.words() {
            prop_assert!(high_words.contains(&w), "{} reached with {} but not {}", w, k, k + 1);
        }

        let low: BTreeSet<String> = t.lookup(&query, k, &mut ExhaustiveBranch).words().into_iter().collect();
        let high: BTreeSet<String> = t.lookup(&query, k + 1, &mut ExhaustiveBranch).words().into_iter().collect();
        prop_assert!(low.is_subset(&high));

        // Every reconstructed word is a stored word.
        for w in &high {
            prop_assert!(words.contains(w));
        }
    }
}

/// Calls `f` with every ordering of `items`, generated by Heap's algorithm.
fn each_ordering<T: Clone>(items: &[T], mut f: impl FnMut(&[T])) {
    let mut order = items.to_vec();
    let mut counters = vec![0usize; order.len()];
    f(&order);

    let mut i = 1;
    while i < order.len() {
        if counters[i] < i {
            let j = if i % 2 == 0 { 0 } else { counters[i] };
            order.swap(j, i);
            f(&order);
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
}

const SMALL_SET: [&str; 6] = ["a", "ab", "abc", "abd", "b", "ba"];

#[test]
fn each_ordering_covers_all_permutations() {
    let mut seen = BTreeSet::new();
    each_ordering(&[1, 2, 3, 4], |order| {
        assert!(seen.insert(order.to_vec()), "repeated ordering {order:?}");
    });
    assert_eq!(seen.len(), 24);
}

#[test]
fn exhaustive_insert_order_small_set() {
    each_ordering(&SMALL_SET, |order| {
        let mut t = Trie::new();
        for &w in order {
            assert!(t.insert(w).unwrap());
        }
        validate_trie(&t);
        assert_eq!(t.words(), SMALL_SET);
        // a, b, c, d below "ab", and b-a.
        assert_eq!(t.total_prefixes(None), 6);
    });
}

#[test]
fn exhaustive_delete_order_small_set() {
    let mut base = Trie::new();
    for w in SMALL_SET {
        base.insert(w).unwrap();
    }

    each_ordering(&SMALL_SET, |order| {
        let mut t = Trie::new();
        for w in SMALL_SET {
            t.insert(w).unwrap();
        }
        assert_eq!(t.capacity(), base.capacity());
        let mut left: BTreeSet<&str> = SMALL_SET.into_iter().collect();

        for &w in order {
            assert!(t.delete(w).is_found());
            left.remove(w);
            validate_trie(&t);
            assert_eq!(t.total_words(None), left.len());
            for other in &left {
                assert!(t.find(other));
            }
        }
        assert_eq!(t.node_count(), 1);
        assert_eq!(t.total_prefixes(None), 0);

        // Freed slots are reused, so rebuilding does not grow the arena.
        for w in SMALL_SET {
            t.insert(w).unwrap();
        }
        validate_trie(&t);
        assert_eq!(t.capacity(), base.capacity());
        assert_eq!(t.node_count(), base.node_count());
    });
}
