//! In-place ordering of sections and navigation items by their `index` key.
//!
//! Partition-exchange sort around the middle element. Equal keys end up in
//! whatever order the swaps leave them: stable ordering is not guaranteed
//! when two items share the same `index`. Callers that need registration
//! order among ties must fold it into the key themselves.

/// An item carrying an integer display-order key.
pub trait Indexed {
    fn index(&self) -> i32;
}

impl<T: Indexed + ?Sized> Indexed for &T {
    fn index(&self) -> i32 {
        (**self).index()
    }
}

/// Sort `items` ascending by [`Indexed::index`], in place.
///
/// Returns the same slice for chaining. Empty and single-item slices are
/// returned untouched.
pub fn sort_by_index<T: Indexed>(items: &mut [T]) -> &mut [T] {
    if items.len() > 1 {
        let right = items.len() as isize - 1;
        quick_sort(items, 0, right);
    }
    items
}

fn quick_sort<T: Indexed>(items: &mut [T], left: isize, right: isize) {
    let split = partition(items, left, right);
    if left < split - 1 {
        quick_sort(items, left, split - 1);
    }
    if split < right {
        quick_sort(items, split, right);
    }
}

/// Hoare partition of `items[left..=right]`.
///
/// Returns the first position of the right-hand partition. `j` may step to
/// `left - 1`, hence the signed cursors.
fn partition<T: Indexed>(items: &mut [T], left: isize, right: isize) -> isize {
    let pivot = items[((left + right) / 2) as usize].index();
    let mut i = left;
    let mut j = right;

    while i <= j {
        while items[i as usize].index() < pivot {
            i += 1;
        }
        while items[j as usize].index() > pivot {
            j -= 1;
        }
        if i <= j {
            items.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
        }
    }

    i
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        index: i32,
        label: &'static str,
    }

    impl Indexed for Item {
        fn index(&self) -> i32 {
            self.index
        }
    }

    fn item(index: i32, label: &'static str) -> Item {
        Item { index, label }
    }

    fn keys(items: &[Item]) -> Vec<i32> {
        items.iter().map(|i| i.index).collect()
    }

    #[test]
    fn empty_and_single_are_untouched() {
        let mut empty: Vec<Item> = Vec::new();
        assert!(sort_by_index(&mut empty).is_empty());

        let mut one = vec![item(7, "only")];
        sort_by_index(&mut one);
        assert_eq!(one, vec![item(7, "only")]);
    }

    #[test]
    fn sorts_distinct_keys_ascending() {
        let mut items = vec![
            item(3, "d"),
            item(0, "a"),
            item(2, "c"),
            item(1, "b"),
            item(-4, "neg"),
        ];
        sort_by_index(&mut items);
        assert_eq!(keys(&items), vec![-4, 0, 1, 2, 3]);
        assert_eq!(items[1].label, "a");
    }

    #[test]
    fn handles_reverse_and_sorted_input() {
        let mut reversed: Vec<Item> = (0..10).rev().map(|i| item(i, "x")).collect();
        sort_by_index(&mut reversed);
        assert_eq!(keys(&reversed), (0..10).collect::<Vec<_>>());

        let mut sorted: Vec<Item> = (0..10).map(|i| item(i, "x")).collect();
        sort_by_index(&mut sorted);
        assert_eq!(keys(&sorted), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn ties_keep_all_items() {
        let mut items = vec![item(1, "a"), item(0, "b"), item(1, "c"), item(0, "d")];
        sort_by_index(&mut items);
        assert_eq!(keys(&items), vec![0, 0, 1, 1]);

        let mut labels: Vec<_> = items.iter().map(|i| i.label).collect();
        labels.sort_unstable();
        assert_eq!(labels, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn returns_same_slice_for_chaining() {
        let mut items = vec![item(2, "b"), item(1, "a")];
        let first = sort_by_index(&mut items).first().map(|i| i.label);
        assert_eq!(first, Some("a"));
    }

    #[test]
    fn sorts_references() {
        let owned = vec![item(5, "e"), item(1, "a"), item(3, "c")];
        let mut refs: Vec<&Item> = owned.iter().collect();
        sort_by_index(&mut refs);
        let labels: Vec<_> = refs.iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["a", "c", "e"]);
    }
}
