use semcoll::{
    ArrayList, ByKey, Collection, CollectionError, ErrorKind, HashMap, HashSet, LinkedList,
    LinkedQueue, LinkedStack, List, PriorityQueue, Queue, ReverseOrder, Stack, ValueSemantics,
};
use std::fmt;

/// Case-insensitive strings: equal, hashed and shown by their lowercase
/// form.
#[derive(Clone, Copy, Default)]
struct Caseless;

impl ValueSemantics<String> for Caseless {
    fn equals(&self, a: &String, b: &String) -> bool {
        a.eq_ignore_ascii_case(b)
    }

    fn hash_code(&self, value: &String) -> u64 {
        value
            .bytes()
            .fold(17u64, |h, b| h.wrapping_mul(31).wrapping_add(b.to_ascii_lowercase() as u64))
    }

    fn format(&self, value: &String, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&value.to_ascii_lowercase())
    }
}

#[test]
fn set_rejects_duplicate_add() {
    let mut s = HashSet::new();
    s.add("a").unwrap();
    s.add("b").unwrap();
    let err = s.add("a").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(err.to_string(), "already exists: a");
    assert_eq!(s.len(), 2);
    assert!(s.contains(&"a"));
}

#[test]
fn priority_queue_pops_strings_in_order() {
    let mut q = PriorityQueue::new();
    q.offer("c");
    q.offer("a");
    q.offer("b");
    assert_eq!(q.pop(), Ok("a"));
    assert_eq!(q.pop(), Ok("b"));
    assert_eq!(q.pop(), Ok("c"));
    assert_eq!(q.len(), 0);
}

#[test]
fn peek_matches_next_pop_without_changing_len() {
    let mut q: PriorityQueue<i32> = [3, 1, 2].into_iter().collect();
    while !q.is_empty() {
        let len = q.len();
        let top = *q.peek().unwrap();
        assert_eq!(q.len(), len);
        assert_eq!(q.pop(), Ok(top));
    }
}

#[test]
fn map_put_keeps_first_value() {
    let mut m = HashMap::new();
    m.put("k", 1).unwrap();
    let err = m.put("k", 2).unwrap_err();
    assert_eq!(err, CollectionError::AlreadyExists { value: "k".into() });
    assert_eq!(*m.get(&"k"), 1);
}

#[test]
fn map_put_then_delete_empties() {
    let mut m = HashMap::new();
    let keys: Vec<u32> = (0..50).collect();
    for k in &keys {
        m.put(*k, k * 10).unwrap();
    }
    for k in keys.iter().rev().step_by(2).chain(keys.iter().step_by(2)) {
        let _ = m.delete_if_present(k);
    }
    assert_eq!(m.len(), 0);
    assert!(keys.iter().all(|k| !m.contains_key(k)));
}

#[test]
fn map_replace_semantics() {
    let mut m = HashMap::new();
    m.put("k", "v1").unwrap();
    assert_eq!(m.replace("k", "v2"), Ok("v1"));
    assert_eq!(*m.get(&"k"), "v2");

    let before = m.clone();
    let err = m.replace("missing", "v3").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(m == before);
    assert_eq!(m.get_safe(&"missing").unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn remove_all_aggregates_every_miss() {
    let mut s: HashSet<&str> = ["present", "other"].into_iter().collect();
    let request: ArrayList<&str> = ["present", "absent1", "absent2"].into_iter().collect();
    let err = s.remove_all(&request).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Aggregate);
    assert_eq!(err.errors().len(), 2);
    assert!(err.errors().iter().all(|e| e.kind() == ErrorKind::NotFound));
    assert!(!s.contains(&"present"));
    assert_eq!(s.len(), 1);
}

#[test]
fn custom_semantics_flow_through_every_container() {
    let mut set = HashSet::with_semantics(Caseless);
    set.add("Apple".to_string()).unwrap();
    assert!(set.contains(&"APPLE".to_string()));
    assert_eq!(
        set.add("apple".to_string()).unwrap_err().to_string(),
        "already exists: apple"
    );

    let mut map = HashMap::with_semantics(Caseless, Caseless);
    map.put("Key".to_string(), "Value".to_string()).unwrap();
    assert_eq!(map.get(&"KEY".to_string()), "Value");
    assert_eq!(map.to_string(), "{key:value}");

    let mut list = LinkedList::with_semantics(Caseless);
    list.extend(["x".to_string(), "Y".to_string()]);
    assert_eq!(list.index_of(&"y".to_string()), Some(1));
}

#[test]
fn keys_and_values_snapshots() {
    let m: HashMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    let keys = m.keys();
    assert_eq!(keys.len(), 3);
    assert!(["a", "b", "c"].iter().all(|k| keys.contains(k)));
    let mut values = m.values().into_vec();
    values.sort();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn queue_and_stack_through_traits() {
    fn drain_queue<Q: Queue<i32>>(q: &mut Q) -> Vec<i32> {
        std::iter::from_fn(|| q.pop().ok()).collect()
    }
    fn drain_stack<S: Stack<i32>>(s: &mut S) -> Vec<i32> {
        std::iter::from_fn(|| s.pop().ok()).collect()
    }

    let mut fifo: LinkedQueue<i32> = [2, 3, 1].into_iter().collect();
    let mut by_priority = PriorityQueue::with_comparator(ReverseOrder(semcoll::NaturalOrder));
    by_priority.extend([2, 3, 1]);
    let mut lifo: LinkedStack<i32> = [2, 3, 1].into_iter().collect();

    assert_eq!(drain_queue(&mut fifo), vec![2, 3, 1]);
    assert_eq!(drain_queue(&mut by_priority), vec![3, 2, 1]);
    assert_eq!(drain_stack(&mut lifo), vec![1, 3, 2]);
    assert_eq!(Queue::peek(&fifo).unwrap_err().kind(), ErrorKind::OutOfBounds);
}

#[test]
fn lists_share_positional_contract() {
    fn exercise<L: List<&'static str>>(mut l: L) -> Vec<&'static str> {
        l.add("b").unwrap();
        l.insert(0, "a").unwrap();
        l.insert(2, "d").unwrap();
        l.insert(2, "c").unwrap();
        assert_eq!(l.insert(9, "z").unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert_eq!(l.replace(3, "e"), Ok("d"));
        assert_eq!(l.remove_at(0), Ok("a"));
        l.iter().copied().collect()
    }
    assert_eq!(exercise(ArrayList::new()), ["b", "c", "e"]);
    assert_eq!(exercise(LinkedList::new()), ["b", "c", "e"]);
}

#[test]
fn by_key_semantics_dedupe_set() {
    let s = HashSet::from_iter_with(
        ByKey::new(|w: &&str| w.len()),
        ["one", "two", "three", "four", "six"],
    );
    assert_eq!(s.len(), 3);
    assert!(s.contains(&"ten"));
}
