//! Allocation accounting for the node arena. Counters are per thread, so
//! the test harness allocating on other threads does not disturb them.
use deq::Deque;
use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
};

struct Counting;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

fn track(delta: isize) {
    // the slot may already be gone while the thread shuts down
    let _ = LIVE.try_with(|live| live.set(live.get() + delta));
}

fn live() -> isize {
    LIVE.with(|live| live.get())
}

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            track(1);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        track(-1);
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

#[test]
fn test_no_leaked_nodes() {
    let baseline = live();

    let mut deque = Deque::new();
    for i in 0..100 {
        deque.tail_put(Box::new(i));
    }
    assert_eq!(deque.len(), 100);
    assert!(live() > baseline);

    for _ in 0..50 {
        assert!(deque.head_get().is_some());
    }
    for _ in 0..50 {
        assert!(deque.tail_get().is_some());
    }
    assert_eq!(deque.len(), 0);
    deque.delete();

    assert_eq!(live(), baseline);
}

#[test]
fn test_delete_with_frees_payloads() {
    let baseline = live();

    let mut deque = Deque::new();
    for i in 0..32 {
        deque.head_put(vec![i; 8]);
    }

    let mut total = 0;
    deque.delete_with(|values| total += values.len());
    assert_eq!(total, 32 * 8);

    assert_eq!(live(), baseline);
}
