use ordered_float::OrderedFloat;
use path_heap::{PathHeapQueue, WeightedEdge, WeightedPath};
use proptest::prelude::*;

type Weight = OrderedFloat<f64>;
type Path = WeightedPath<u32, Weight>;

// Single-edge path from vertex 0 to `sink`
fn path_to(sink: u32, weight: f64) -> Path {
    WeightedPath::empty(0).extend(&WeightedEdge::new(sink, OrderedFloat(weight)))
}

fn assert_heap_order(queue: &PathHeapQueue<u32, Weight>) {
    let items: Vec<&Path> = queue.iter().collect();
    for i in 1..items.len() {
        let parent = (i - 1) / 2;
        assert!(
            items[i].weight() >= items[parent].weight(),
            "path at {} is lighter than its parent at {}",
            i,
            parent
        );
    }
    assert!(queue.is_well_formed());
}

#[test]
fn test_empty_queue() {
    let mut queue: PathHeapQueue<u32, Weight> = PathHeapQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert!(queue.peek_min().is_none());
    assert!(queue.remove_min().is_none());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.iter().count(), 0);
    assert!(queue.is_well_formed());
}

#[test]
fn test_insert_grows_by_one_and_tracks_minimum() {
    let mut queue = PathHeapQueue::new();
    let weights = [5.0, 3.0, 8.0, 1.0, 9.0, 2.0];
    let mut minimum = f64::INFINITY;

    for (i, &weight) in weights.iter().enumerate() {
        queue.insert(path_to(i as u32, weight));
        minimum = minimum.min(weight);
        assert_eq!(queue.len(), i + 1);
        assert_eq!(queue.peek_min().map(|p| p.weight()), Some(OrderedFloat(minimum)));
        assert_heap_order(&queue);
    }
}

#[test]
fn test_remove_min_yields_non_decreasing_weights() {
    let mut queue = PathHeapQueue::new();
    for (i, weight) in [7.0, 2.0, 9.0, 4.0, 4.0, 0.0, 11.0, 3.5].into_iter().enumerate() {
        queue.offer(path_to(i as u32, weight));
    }

    let mut removed = Vec::new();
    while let Some(path) = queue.poll() {
        assert_heap_order(&queue);
        removed.push(path.weight().into_inner());
    }

    assert_eq!(removed, vec![0.0, 2.0, 3.5, 4.0, 4.0, 7.0, 9.0, 11.0]);
    assert!(queue.is_empty());
}

#[test]
fn test_peek_does_not_mutate() {
    let mut queue = PathHeapQueue::new();
    queue.insert(path_to(1, 3.0));
    queue.insert(path_to(2, 1.0));

    let first = queue.peek().cloned();
    let second = queue.peek().cloned();
    assert_eq!(queue.len(), 2);
    assert!(first.unwrap().ptr_eq(&second.unwrap()));
}

#[test]
fn test_duplicate_terminals_coexist() {
    let mut queue = PathHeapQueue::new();
    queue.insert(path_to(4, 6.0));
    queue.insert(path_to(4, 2.0));
    queue.insert(path_to(4, 6.0));

    assert_eq!(queue.len(), 3);
    assert!(queue.iter().all(|p| *p.terminal() == 4));
    assert_eq!(queue.remove_min().map(|p| p.weight()), Some(OrderedFloat(2.0)));
}

#[test]
fn test_equal_weight_insert_keeps_root() {
    let mut queue = PathHeapQueue::new();
    let first = path_to(1, 1.0);
    queue.insert(first.clone());
    queue.insert(path_to(2, 1.0));
    queue.insert(path_to(3, 1.0));

    assert!(queue.peek_min().unwrap().ptr_eq(&first));
}

#[test]
fn test_remove_min_prefers_left_child_on_tie() {
    let mut queue = PathHeapQueue::new();
    queue.insert(path_to(1, 1.0));
    queue.insert(path_to(2, 2.0));
    queue.insert(path_to(3, 2.0));
    queue.insert(path_to(4, 3.0));

    assert_eq!(queue.remove_min().map(|p| *p.terminal()), Some(1));
    assert_eq!(queue.peek_min().map(|p| *p.terminal()), Some(2));
    assert_eq!(queue.remove_min().map(|p| *p.terminal()), Some(2));
    assert_eq!(queue.remove_min().map(|p| *p.terminal()), Some(3));
    assert_eq!(queue.remove_min().map(|p| *p.terminal()), Some(4));
    assert!(queue.remove_min().is_none());
}

#[test]
fn test_collect_extend_and_sorted_drain() {
    let mut queue: PathHeapQueue<u32, Weight> =
        [4.0, 1.0, 3.0].iter().enumerate().map(|(i, &w)| path_to(i as u32, w)).collect();
    queue.extend(vec![path_to(10, 2.0), path_to(11, 0.5)]);
    assert_eq!(queue.len(), 5);
    assert_eq!((&queue).into_iter().count(), 5);
    assert_heap_order(&queue);

    let sorted: Vec<f64> = queue
        .into_sorted_vec()
        .iter()
        .map(|p| p.weight().into_inner())
        .collect();
    assert_eq!(sorted, vec![0.5, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_clear() {
    let mut queue = PathHeapQueue::with_capacity(8);
    queue.insert(path_to(1, 1.0));
    queue.insert(path_to(2, 2.0));
    queue.clear();
    assert!(queue.is_empty());
    assert!(queue.peek_min().is_none());
}

proptest! {
    #[test]
    fn prop_removals_are_sorted(weights in prop::collection::vec(0.0f64..1000.0, 0..200)) {
        let mut queue = PathHeapQueue::new();
        for (i, &weight) in weights.iter().enumerate() {
            queue.insert(path_to(i as u32, weight));
        }
        prop_assert_eq!(queue.len(), weights.len());

        let mut expected = weights.clone();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let mut actual = Vec::new();
        while let Some(path) = queue.remove_min() {
            actual.push(path.weight().into_inner());
        }
        prop_assert_eq!(actual, expected);
    }

    // `Some(w)` inserts a path of weight w, `None` removes the minimum
    #[test]
    fn prop_interleaved_operations_match_model(
        ops in prop::collection::vec(prop::option::of(0.0f64..100.0), 0..300)
    ) {
        let mut queue = PathHeapQueue::new();
        let mut model: Vec<f64> = Vec::new();

        for (i, op) in ops.into_iter().enumerate() {
            match op {
                Some(weight) => {
                    let before = queue.len();
                    queue.insert(path_to(i as u32, weight));
                    model.push(weight);
                    prop_assert_eq!(queue.len(), before + 1);
                }
                None => {
                    let removed = queue.remove_min();
                    if model.is_empty() {
                        prop_assert!(removed.is_none());
                        prop_assert_eq!(queue.len(), 0);
                    } else {
                        let (index, _) = model
                            .iter()
                            .enumerate()
                            .min_by(|a, b| a.1.partial_cmp(b.1).unwrap())
                            .unwrap();
                        let minimum = model.swap_remove(index);
                        prop_assert_eq!(removed.map(|p| p.weight().into_inner()), Some(minimum));
                    }
                }
            }

            prop_assert_eq!(queue.len(), model.len());
            let items: Vec<&Path> = queue.iter().collect();
            for j in 1..items.len() {
                prop_assert!(items[j].weight() >= items[(j - 1) / 2].weight());
            }
            prop_assert!(queue.is_well_formed());
        }
    }
}

#[test]
fn test_large_queue_drains_in_order() {
    let mut queue = PathHeapQueue::new();
    for i in 0..50_000u32 {
        // Deterministic scramble of the weights with plenty of ties
        queue.insert(path_to(i, ((i * 7919) % 1000) as f64));
    }
    assert_eq!(queue.len(), 50_000);
    assert!(queue.is_well_formed());

    let mut last = f64::NEG_INFINITY;
    while let Some(path) = queue.remove_min() {
        let weight = path.weight().into_inner();
        assert!(weight >= last);
        last = weight;
    }
    assert!(queue.is_empty());
}
