//! Shared contract tests for containers implementing `IterableOnce` and `List`.
//!
//! Each macro expands into a module of `rstest` tests parameterized by a
//! constructor `fn(Vec<i32>) -> Container`, so every sequence container is
//! checked against the same expectations.

/// Generates the `IterableOnce` contract tests for a container type.
macro_rules! iterable_once_contract {
    ($module:ident, $container:ty, $creator:expr) => {
        mod $module {
            #[allow(unused_imports)]
            use super::*;
            use functional_collections::typeclass::IterableOnce;
            use rstest::rstest;

            fn create(values: &[i32]) -> $container {
                ($creator)(values.to_vec())
            }

            #[rstest]
            #[case(vec![], 0)]
            #[case(vec![1, 2, 3], 3)]
            fn length(#[case] values: Vec<i32>, #[case] expected: usize) {
                assert_eq!(create(&values).length(), expected);
            }

            #[rstest]
            fn is_empty() {
                assert!(create(&[]).is_empty());
                assert!(!create(&[1, 2, 3]).is_empty());
            }

            #[rstest]
            #[case(vec![])]
            #[case(vec![1, 2, 3])]
            fn to_vec_preserves_order(#[case] values: Vec<i32>) {
                assert_eq!(create(&values).to_vec(), values);
            }

            #[rstest]
            #[case(vec![], vec![])]
            #[case(vec![1, 2, 3], vec![2, 4, 6])]
            fn map(#[case] values: Vec<i32>, #[case] expected: Vec<i32>) {
                assert_eq!(create(&values).map(|value| value * 2).to_vec(), expected);
            }

            #[rstest]
            #[case(vec![], vec![])]
            #[case(vec![1, 2, 3], vec![1, 2, 2, 4, 3, 6])]
            fn flat_map(#[case] values: Vec<i32>, #[case] expected: Vec<i32>) {
                let flattened = create(&values).flat_map(|value| create(&[*value, value * 2]));
                assert_eq!(flattened.to_vec(), expected);
            }

            #[rstest]
            #[case(vec![], vec![])]
            #[case(vec![1, 2, 3, 4], vec![2, 4])]
            fn filter(#[case] values: Vec<i32>, #[case] expected: Vec<i32>) {
                let kept = create(&values).filter(|value| value % 2 == 0);
                assert_eq!(kept.to_vec(), expected);
            }

            #[rstest]
            #[case(vec![], vec![])]
            #[case(vec![1, 2, 3, 4], vec![1, 3])]
            fn filter_not(#[case] values: Vec<i32>, #[case] expected: Vec<i32>) {
                let kept = create(&values).filter_not(|value| value % 2 == 0);
                assert_eq!(kept.to_vec(), expected);
            }

            #[rstest]
            #[case(vec![], 0)]
            #[case(vec![1, 2, 3, 4], 2)]
            fn count(#[case] values: Vec<i32>, #[case] expected: usize) {
                assert_eq!(create(&values).count(|value| value % 2 == 0), expected);
            }

            #[rstest]
            #[case(vec![], false)]
            #[case(vec![1, 3], false)]
            #[case(vec![1, 2, 3], true)]
            fn exists(#[case] values: Vec<i32>, #[case] expected: bool) {
                assert_eq!(create(&values).exists(|value| value % 2 == 0), expected);
            }

            #[rstest]
            #[case(vec![], true)]
            #[case(vec![1, 3], false)]
            #[case(vec![1, 2, 3], false)]
            #[case(vec![2, 4], true)]
            fn for_all(#[case] values: Vec<i32>, #[case] expected: bool) {
                assert_eq!(create(&values).for_all(|value| value % 2 == 0), expected);
            }

            #[rstest]
            #[case(vec![], 0)]
            #[case(vec![1], 1)]
            #[case(vec![1, 3], 5)]
            #[case(vec![3, 1], 7)]
            #[case(vec![1, 3, 5], 15)]
            #[case(vec![5, 1, 3], 25)]
            fn reduce_left(#[case] values: Vec<i32>, #[case] expected: i32) {
                let folded = create(&values).reduce_left(0, |accumulator, value| accumulator * 2 + value);
                assert_eq!(folded, expected);
            }

            #[rstest]
            #[case(vec![], 0)]
            #[case(vec![1], 2)]
            #[case(vec![1, 3], -4)]
            #[case(vec![3, 1], 4)]
            #[case(vec![1, 3, 5], 6)]
            #[case(vec![5, 1, 3], 14)]
            fn reduce_right(#[case] values: Vec<i32>, #[case] expected: i32) {
                let folded = create(&values).reduce_right(0, |value, accumulator| value * 2 - accumulator);
                assert_eq!(folded, expected);
            }

            #[rstest]
            #[case(vec![], 0, 0)]
            #[case(vec![1, 2, 3], 3, 6)]
            fn for_each(#[case] values: Vec<i32>, #[case] calls: usize, #[case] sum: i32) {
                let mut counter = 0;
                let mut total = 0;
                create(&values).for_each(|value| {
                    counter += 1;
                    total += value;
                });
                assert_eq!(counter, calls);
                assert_eq!(total, sum);
            }

            #[rstest]
            #[case(vec![], 0, 0)]
            #[case(vec![1, 2, 3], 3, 6)]
            fn iter(#[case] values: Vec<i32>, #[case] calls: usize, #[case] sum: i32) {
                let container = create(&values);
                let mut counter = 0;
                let mut total = 0;
                for value in container.iter() {
                    counter += 1;
                    total += value;
                }
                assert_eq!(counter, calls);
                assert_eq!(total, sum);
            }

            #[rstest]
            fn iter_restarts_on_every_call() {
                let container = create(&[4, 5, 6]);
                let first: Vec<&i32> = container.iter().collect();
                let second: Vec<&i32> = container.iter().collect();
                assert_eq!(first, second);
                assert_eq!(first, vec![&4, &5, &6]);
            }

            #[rstest]
            fn at() {
                assert!(create(&[]).at(0).is_err());
                let container = create(&[1, 2, 3]);
                assert_eq!(container.at(0), Ok(&1));
                assert_eq!(container.at(1), Ok(&2));
                assert_eq!(container.at(2), Ok(&3));
                let error = container.at(3).unwrap_err();
                assert_eq!((error.index, error.length), (3, 3));
            }

            #[rstest]
            fn transforms_leave_receiver_untouched() {
                let container = create(&[1, 2, 3]);
                let _ = container.map(|value| value + 1);
                let _ = container.filter(|value| *value > 1);
                let _ = container.flat_map(|value| create(&[*value]));
                assert_eq!(container.to_vec(), vec![1, 2, 3]);
            }
        }
    };
}

/// Generates the `List` growth contract tests for a container type.
macro_rules! list_contract {
    ($module:ident, $container:ty, $creator:expr) => {
        mod $module {
            #[allow(unused_imports)]
            use super::*;
            use functional_collections::typeclass::{IterableOnce, List};
            use rstest::rstest;

            fn create(values: &[i32]) -> $container {
                ($creator)(values.to_vec())
            }

            #[rstest]
            fn concat() {
                let joined: $container = create(&[1, 2, 3]).concat(&create(&[4, 5, 6]));
                assert_eq!(joined.to_vec(), vec![1, 2, 3, 4, 5, 6]);
            }

            #[rstest]
            fn append() {
                let list = create(&[1, 2, 3]);
                let appended: $container = list.append(4);
                assert_eq!(appended.to_vec(), vec![1, 2, 3, 4]);
                assert_eq!(appended.at(list.length()), Ok(&4));
            }

            #[rstest]
            fn append_all() {
                let joined: $container = create(&[1, 2, 3]).append_all(&create(&[4, 5, 6]));
                assert_eq!(joined.to_vec(), vec![1, 2, 3, 4, 5, 6]);
            }

            #[rstest]
            fn prepend() {
                let prepended: $container = create(&[1, 2, 3]).prepend(4);
                assert_eq!(prepended.to_vec(), vec![4, 1, 2, 3]);
                assert_eq!(prepended.at(0), Ok(&4));
            }

            #[rstest]
            fn prepend_all() {
                let joined: $container = create(&[1, 2, 3]).prepend_all(&create(&[4, 5, 6]));
                assert_eq!(joined.to_vec(), vec![4, 5, 6, 1, 2, 3]);
            }

            #[rstest]
            fn growth_on_empty() {
                let empty = create(&[]);
                assert_eq!(empty.append(1).to_vec(), vec![1]);
                assert_eq!(empty.prepend(1).to_vec(), vec![1]);
                assert!(empty.concat(&create(&[])).is_empty());
            }

            #[rstest]
            fn growth_leaves_receiver_untouched() {
                let list = create(&[1, 2]);
                let _ = list.append(3);
                let _ = list.prepend(0);
                let _ = list.concat(&create(&[9]));
                assert_eq!(list.to_vec(), vec![1, 2]);
            }
        }
    };
}
