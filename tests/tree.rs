use std::collections::BTreeSet;

use catalog_index::tree::Tree;

#[test]
fn insert_search_and_list() {
    let mut tree = Tree::new();
    tree.insert("B");
    tree.insert("A");
    tree.insert("C");

    assert_eq!(tree.in_order(), vec![&"A", &"B", &"C"]);
    assert_eq!(tree.search(&"A"), Some(&"A"));
    assert_eq!(tree.search(&"D"), None);
}

#[test]
fn hundred_increasing_keys() {
    let tree: Tree<u32> = (0..100).collect();

    assert_eq!(tree.len(), 100);
    assert!(tree.iter().copied().eq(0..100));
}

#[test]
fn borrowed_iteration() {
    let tree: Tree<char> = "bstree".chars().collect();
    let mut seen = String::new();
    for c in &tree {
        seen.push(*c);
    }

    assert_eq!(seen, "berst");
}

quickcheck::quickcheck! {
    fn in_order_matches_sorted_set(xs: Vec<i32>) -> bool {
        let tree: Tree<i32> = xs.iter().copied().collect();
        let set: BTreeSet<i32> = xs.into_iter().collect();

        tree.len() == set.len() && tree.iter().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn extend_is_repeated_insert(xs: Vec<i8>, ys: Vec<i8>) -> bool {
        let mut extended: Tree<i8> = xs.iter().copied().collect();
        extended.extend(ys.iter().copied());

        let mut inserted = Tree::new();
        for x in xs.into_iter().chain(ys) {
            inserted.insert(x);
        }

        extended.in_order() == inserted.in_order()
    }
}
