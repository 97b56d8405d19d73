use crate::models::{Activatable, Ordered};

/// Stable ascending sort by `order`; equal orders keep fetch order.
pub fn sort_by_order<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(T::order);
}

pub fn sorted_by_order<T: Ordered + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    sort_by_order(&mut out);
    out
}

/// Active items only, sorted for display.
pub fn active_sorted<T: Ordered + Activatable + Clone>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = items.iter().filter(|i| i.is_active()).cloned().collect();
    sort_by_order(&mut out);
    out
}

/// Swap item `idx` with its neighbour and renumber `order` to match positions.
pub fn move_item<T, F>(items: &mut [T], idx: usize, up: bool, mut set_order: F) -> bool
where
    F: FnMut(&mut T, i64),
{
    let target = match (up, idx) {
        (_, i) if i >= items.len() => return false,
        (true, 0) => return false,
        (true, i) => i - 1,
        (false, i) if i + 1 >= items.len() => return false,
        (false, i) => i + 1,
    };
    items.swap(idx, target);
    for (pos, item) in items.iter_mut().enumerate() {
        set_order(item, pos as i64);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        order: i64,
        active: bool,
    }

    impl Ordered for Item {
        fn order(&self) -> i64 {
            self.order
        }
    }

    impl Activatable for Item {
        fn is_active(&self) -> bool {
            self.active
        }
    }

    fn item(name: &'static str, order: i64) -> Item {
        Item {
            name,
            order,
            active: true,
        }
    }

    #[test]
    fn equal_orders_keep_fetch_order() {
        let fetched = vec![item("a", 2), item("b", 1), item("c", 2), item("d", 1)];
        let once = sorted_by_order(&fetched);
        assert_eq!(once.iter().map(|i| i.name).collect::<Vec<_>>(), vec!["b", "d", "a", "c"]);
        assert_eq!(sorted_by_order(&once), once);
    }

    #[test]
    fn move_item_renumbers() {
        let mut items = vec![item("a", 5), item("b", 9), item("c", 11)];
        assert!(move_item(&mut items, 2, true, |i, o| i.order = o));
        assert_eq!(items.iter().map(|i| (i.name, i.order)).collect::<Vec<_>>(), vec![("a", 0), ("c", 1), ("b", 2)]);
        assert!(!move_item(&mut items, 0, true, |i, o| i.order = o));
        assert!(!move_item(&mut items, 2, false, |i, o| i.order = o));
        assert!(!move_item(&mut items, 7, true, |i, o| i.order = o));
    }

    #[test]
    fn active_sorted_filters_inactive() {
        let mut hidden = item("hidden", 0);
        hidden.active = false;
        let out = active_sorted(&[item("b", 2), hidden, item("a", 1)]);
        assert_eq!(out.iter().map(|i| i.name).collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
