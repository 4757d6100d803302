//! Brute-force checks over every ordering of small value sets.
//!
//! For n values there are n! insertion orders, and for the add/delete check n! * n! combinations, so
//! sizes stay small.

use std::fmt::Debug;

use itertools::Itertools;
use treeset::{Ascending, Compare, Descending, TreeSet};

/// `[0, 1, .. n-1]`
fn ints(n: usize) -> Vec<i32> {
    (0..).take(n).collect()
}

/// `["AA", "BBB", "CCCC", ..]`, n values.
fn strings(n: usize) -> Vec<String> {
    assert!(n <= 26);
    (b'A'..).take(n).enumerate().map(|(i, letter)| char::from(letter).to_string().repeat(i + 2)).collect()
}

fn sorted_by<T: Clone, C: Compare<T> + Default>(values: &[T]) -> Vec<T> {
    let cmp = C::default();
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| cmp.compare(a, b));
    sorted
}

fn add_all<T: Clone + Debug, C: Compare<T> + Default>(order: &[T]) -> TreeSet<T, C> {
    let mut set = TreeSet::default();
    for value in order {
        assert!(set.add(value.clone()), "add({value:?}) in order {order:?}");
    }
    set
}

/// Adds `values` in every order, and for each of those deletes them in every order.
fn check_add_del_all_orders<T: Clone + Debug, C: Compare<T> + Default>(values: &[T]) {
    for add_order in values.iter().cloned().permutations(values.len()) {
        for del_order in values.iter().cloned().permutations(values.len()) {
            let mut set: TreeSet<T, C> = add_all(&add_order);
            assert_eq!(set.len(), values.len());
            assert!(values.iter().all(|value| set.contains(value)));

            for (deleted, value) in del_order.iter().enumerate() {
                assert!(set.del(value), "del({value:?}) after {add_order:?}, deleting {del_order:?}");
                assert!(!set.del(value));
                assert!(!set.contains(value));
                assert_eq!(set.len(), values.len() - deleted - 1);
            }

            assert!(set.is_empty());
            assert!(values.iter().all(|value| !set.contains(value)));
        }
    }
}

/// Adds `values` in every order and checks iteration, equality and rendering of the result.
fn check_all_insertion_orders<T, C>(values: &[T])
where
    T: Clone + Debug + std::fmt::Display,
    C: Compare<T> + Default,
{
    let expected = sorted_by::<T, C>(values);
    let expected_text = format!("[{}]", expected.iter().join(","));
    let reference: TreeSet<T, C> = add_all(&expected);
    let empty: TreeSet<T, C> = TreeSet::default();

    for add_order in values.iter().cloned().permutations(values.len()) {
        let set: TreeSet<T, C> = add_all(&add_order);

        let mut cursor = set.begin();
        for value in &expected {
            assert_eq!(C::default().compare(cursor.value(), value), std::cmp::Ordering::Equal);
            cursor.advance();
        }
        assert!(cursor == set.end(), "{add_order:?} yields more than {} values", expected.len());

        assert!(set == reference, "{add_order:?}");
        assert!(set != empty);
        assert_eq!(set.to_string(), expected_text);
    }
}

#[test]
fn add_del_all_orders_ints() {
    for n in 1..=6 {
        check_add_del_all_orders::<_, Ascending>(&ints(n));
        check_add_del_all_orders::<_, Descending>(&ints(n));
    }
}

#[test]
fn add_del_all_orders_strings() {
    for n in 1..=5 {
        check_add_del_all_orders::<_, Ascending>(&strings(n));
        check_add_del_all_orders::<_, Descending>(&strings(n));
    }
}

#[test]
fn insertion_orders_ints() {
    for n in 0..=7 {
        check_all_insertion_orders::<_, Ascending>(&ints(n));
        check_all_insertion_orders::<_, Descending>(&ints(n));
    }
}

#[test]
fn insertion_orders_strings() {
    for n in 0..=6 {
        check_all_insertion_orders::<_, Ascending>(&strings(n));
        check_all_insertion_orders::<_, Descending>(&strings(n));
    }
}

#[test]
fn string_values_are_distinct_and_growing() {
    assert_eq!(strings(3), ["AA", "BBB", "CCCC"]);
}
