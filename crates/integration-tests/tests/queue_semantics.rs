//! Queue semantics against both backing stores
//!
//! Every check runs once over the list store and once over the ring buffer.

mod common;

use common::{contents, queue_of};
use launchq_core::domain::{QueueElement, QueueError};
use launchq_core::port::OrderedStore;

fn s(id: &str) -> String {
    id.to_string()
}

fn fifo_order_without_reordering<S: OrderedStore<String> + Default>() {
    let ids: Vec<String> = (0..50).map(|i| format!("group-{}", i)).collect();
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let queue = queue_of::<S>(&refs);

    for (drained, expected) in ids.iter().enumerate() {
        assert_eq!(queue.count(), ids.len() - drained);
        assert_eq!(&queue.dequeue().unwrap(), expected);
    }
    assert_eq!(queue.count(), 0);
    assert_eq!(queue.dequeue().unwrap_err(), QueueError::Empty);
}

fn move_to_front_then_dequeue<S: OrderedStore<String> + Default>() {
    for target in ["a", "b", "c", "d"] {
        let queue = queue_of::<S>(&["a", "b", "c", "d"]);
        queue.move_to_front(&s(target)).unwrap();
        assert_eq!(queue.dequeue().unwrap(), target);
        assert_eq!(queue.count(), 3);
    }
}

fn move_to_back_drains_last<S: OrderedStore<String> + Default>() {
    let queue = queue_of::<S>(&["a", "b", "c", "d"]);
    let moved = queue.move_to_back(&s("b")).unwrap();
    assert_eq!(moved, QueueElement::new(s("b"), 3));

    let drained: Vec<String> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
    assert_eq!(drained, vec!["a", "c", "d", "b"]);
}

fn move_keeps_relative_order_of_others<S: OrderedStore<String> + Default>() {
    let queue = queue_of::<S>(&["a", "b", "c", "d", "e"]);
    queue.move_to_front(&s("d")).unwrap();
    assert_eq!(contents(&queue), vec!["d", "a", "b", "c", "e"]);
    queue.move_to_back(&s("a")).unwrap();
    assert_eq!(contents(&queue), vec!["d", "b", "c", "e", "a"]);
    // Already in place
    queue.move_to_front(&s("d")).unwrap();
    queue.move_to_back(&s("a")).unwrap();
    assert_eq!(contents(&queue), vec!["d", "b", "c", "e", "a"]);
}

fn swap_exchanges_only_the_pair<S: OrderedStore<String> + Default>() {
    let queue = queue_of::<S>(&["a", "b", "c", "d", "e"]);
    let outcome = queue.swap(&s("b"), &s("e")).unwrap();

    assert_eq!(outcome.a, QueueElement::new(s("b"), 4));
    assert_eq!(outcome.b, QueueElement::new(s("e"), 1));
    assert_eq!(contents(&queue), vec!["a", "e", "c", "d", "b"]);
    assert_eq!(queue.count(), 5);

    // Argument order does not matter
    queue.swap(&s("b"), &s("e")).unwrap();
    assert_eq!(contents(&queue), vec!["a", "b", "c", "d", "e"]);
}

fn swap_with_itself<S: OrderedStore<String> + Default>() {
    let queue = queue_of::<S>(&["a", "b", "c"]);
    let outcome = queue.swap(&s("c"), &s("c")).unwrap();
    assert_eq!(outcome.a, QueueElement::new(s("c"), 2));
    assert_eq!(outcome.b, QueueElement::new(s("c"), 2));
    assert_eq!(contents(&queue), vec!["a", "b", "c"]);

    assert_eq!(
        queue.swap(&s("x"), &s("x")).unwrap_err(),
        QueueError::NotFound(s("x"))
    );
}

fn remove_then_remove_again<S: OrderedStore<String> + Default>() {
    let queue = queue_of::<S>(&["a", "b", "c"]);
    assert_eq!(queue.remove(&s("b")).unwrap(), "b");
    assert_eq!(queue.count(), 2);
    assert_eq!(contents(&queue), vec!["a", "c"]);
    assert_eq!(queue.remove(&s("b")).unwrap_err(), QueueError::NotFound(s("b")));
}

fn absent_identity_changes_nothing<S: OrderedStore<String> + Default>() {
    let queue = queue_of::<S>(&["a", "b", "c"]);
    let before = contents(&queue);
    let missing = s("zz");

    assert_eq!(queue.remove(&missing).unwrap_err(), QueueError::NotFound(s("zz")));
    assert_eq!(queue.move_to_front(&missing).unwrap_err(), QueueError::NotFound(s("zz")));
    assert_eq!(queue.move_to_back(&missing).unwrap_err(), QueueError::NotFound(s("zz")));
    assert_eq!(queue.swap(&s("a"), &missing).unwrap_err(), QueueError::NotFound(s("zz")));
    assert_eq!(queue.swap(&missing, &s("a")).unwrap_err(), QueueError::NotFound(s("zz")));

    assert_eq!(queue.count(), 3);
    assert_eq!(contents(&queue), before);
}

fn duplicate_enqueue_is_rejected<S: OrderedStore<String> + Default>() {
    let queue = queue_of::<S>(&["a", "b"]);
    assert_eq!(queue.enqueue(s("b")).unwrap_err(), QueueError::Duplicate(s("b")));
    assert_eq!(contents(&queue), vec!["a", "b"]);

    // Gone from the queue, so it may come back
    queue.remove(&s("b")).unwrap();
    assert_eq!(queue.enqueue(s("b")).unwrap(), "b");
}

fn get_matches_slice_windows<S: OrderedStore<String> + Default>() {
    let queue = queue_of::<S>(&["a", "b", "c", "d"]);
    let window = |offset, limit| -> Vec<String> {
        queue
            .get(offset, limit)
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect()
    };

    assert_eq!(window(Some(1), Some(2)), vec!["b", "c"]);
    assert_eq!(window(Some(3), Some(10)), vec!["d"]);
    assert!(window(Some(4), Some(10)).is_empty());
    assert!(window(Some(100), Some(1)).is_empty());
    assert_eq!(window(None, None), vec!["a", "b", "c", "d"]);
    assert_eq!(window(Some(2), None), vec!["c", "d"]);

    let positions: Vec<usize> = queue
        .get(Some(1), Some(3))
        .unwrap()
        .iter()
        .map(|e| e.position)
        .collect();
    assert_eq!(positions, vec![1, 2, 3]);
}

fn get_rejects_negative_bounds<S: OrderedStore<String> + Default>() {
    let queue = queue_of::<S>(&["a"]);
    assert!(matches!(queue.get(Some(-1), Some(1)), Err(QueueError::InvalidArgument(_))));
    assert!(matches!(queue.get(Some(0), Some(-3)), Err(QueueError::InvalidArgument(_))));
}

fn count_agrees_with_full_snapshot<S: OrderedStore<String> + Default>() {
    let queue = queue_of::<S>(&["a", "b", "c", "d"]);
    queue.remove(&s("c")).unwrap();
    queue.enqueue(s("e")).unwrap();
    queue.dequeue().unwrap();
    assert_eq!(queue.count(), queue.get(None, None).unwrap().len());
}

macro_rules! store_tests {
    ($($name:ident),* $(,)?) => {
        mod vec_store {
            use launchq_infra_memory::VecStore;
            $(
                #[test]
                fn $name() {
                    super::$name::<VecStore<String>>();
                }
            )*
        }

        mod ring_store {
            use launchq_infra_memory::RingStore;
            $(
                #[test]
                fn $name() {
                    super::$name::<RingStore<String>>();
                }
            )*
        }
    };
}

store_tests!(
    fifo_order_without_reordering,
    move_to_front_then_dequeue,
    move_to_back_drains_last,
    move_keeps_relative_order_of_others,
    swap_exchanges_only_the_pair,
    swap_with_itself,
    remove_then_remove_again,
    absent_identity_changes_nothing,
    duplicate_enqueue_is_rejected,
    get_matches_slice_windows,
    get_rejects_negative_bounds,
    count_agrees_with_full_snapshot,
);
