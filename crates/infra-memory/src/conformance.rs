//! Both stores must behave like a plain list under any operation sequence

use crate::{RingStore, VecStore};
use launchq_core::port::OrderedStore;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum StoreOp {
    PushBack(u8),
    PushFront(u8),
    PopFront,
    RemoveAt(usize),
    Swap(usize, usize),
}

fn store_op() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        any::<u8>().prop_map(StoreOp::PushBack),
        any::<u8>().prop_map(StoreOp::PushFront),
        Just(StoreOp::PopFront),
        (0usize..16).prop_map(StoreOp::RemoveAt),
        (0usize..16, 0usize..16).prop_map(|(a, b)| StoreOp::Swap(a, b)),
    ]
}

fn apply<S: OrderedStore<String>>(store: &mut S, op: &StoreOp) -> Option<String> {
    let len = store.len();
    match op {
        StoreOp::PushBack(n) => {
            store.push_back(n.to_string());
            None
        }
        StoreOp::PushFront(n) => {
            store.push_front(n.to_string());
            None
        }
        StoreOp::PopFront => store.pop_front(),
        StoreOp::RemoveAt(i) => store.remove_at(*i),
        // Callers only swap valid indices.
        StoreOp::Swap(a, b) if *a < len && *b < len => {
            store.swap(*a, *b);
            None
        }
        StoreOp::Swap(_, _) => None,
    }
}

fn model_apply(model: &mut Vec<String>, op: &StoreOp) -> Option<String> {
    match op {
        StoreOp::PushBack(n) => {
            model.push(n.to_string());
            None
        }
        StoreOp::PushFront(n) => {
            model.insert(0, n.to_string());
            None
        }
        StoreOp::PopFront => (!model.is_empty()).then(|| model.remove(0)),
        StoreOp::RemoveAt(i) => (*i < model.len()).then(|| model.remove(*i)),
        StoreOp::Swap(a, b) if *a < model.len() && *b < model.len() => {
            model.swap(*a, *b);
            None
        }
        StoreOp::Swap(_, _) => None,
    }
}

proptest! {
    #[test]
    fn stores_match_list_model(ops in prop::collection::vec(store_op(), 0..64)) {
        let mut model: Vec<String> = Vec::new();
        let mut list = VecStore::new();
        let mut ring = RingStore::new();

        for op in &ops {
            let expected = model_apply(&mut model, op);
            prop_assert_eq!(apply(&mut list, op), expected.clone());
            prop_assert_eq!(apply(&mut ring, op), expected);
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(ring.len(), model.len());
        }

        prop_assert_eq!(list.slice(0..model.len()), model.clone());
        prop_assert_eq!(ring.slice(0..model.len()), model.clone());
        if let Some(last) = model.last() {
            prop_assert_eq!(list.position(last), model.iter().position(|m| m == last));
            prop_assert_eq!(ring.position(last), model.iter().position(|m| m == last));
        }
    }
}
