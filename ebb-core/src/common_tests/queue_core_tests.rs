use crate::data_structures::{AsyncQueue, Cursor, CursorState, TraversableExt};
use crate::error::CollectionError;
use crate::preemptive_synchronization::{CancellationSignal, CancellationSource, FutureExtension};

const NONE: CancellationSignal<'static> = CancellationSignal::NONE;

/// Seeded with 0..16: count, dequeue, peek and clear in sequence.
pub fn test_seeded_operations<C>()
where
    C: AsyncQueue<Item = i32> + FromIterator<i32>,
{
    let queue: C = (0..16).collect();

    assert_eq!(queue.count(NONE).unwrap_result(), Ok(16));

    assert_eq!(queue.dequeue(NONE).unwrap_result(), Ok(0));
    assert_eq!(queue.count(NONE).unwrap_result(), Ok(15));

    // Peek does not change the count.
    //
    assert_eq!(queue.peek(NONE).unwrap_result(), Ok(1));
    assert_eq!(queue.count(NONE).unwrap_result(), Ok(15));

    assert!(queue.clear(NONE).unwrap_result());
    assert_eq!(queue.count(NONE).unwrap_result(), Ok(0));

    // Clearing an empty queue still succeeds.
    //
    assert!(queue.clear(NONE).unwrap_result());
}

/// Empty queue: enqueue one item and take it back out.
pub fn test_enqueue_dequeue<C>()
where
    C: AsyncQueue<Item = i32> + Default,
{
    let queue = C::default();

    assert_eq!(queue.count(NONE).unwrap_result(), Ok(0));

    assert!(queue.enqueue(1337, NONE).unwrap_result());
    assert_eq!(queue.count(NONE).unwrap_result(), Ok(1));

    assert_eq!(queue.dequeue(NONE).unwrap_result(), Ok(1337));
    assert_eq!(queue.count(NONE).unwrap_result(), Ok(0));
}

/// Items come out in the order they went in, and count tracks every step.
pub fn test_fifo_order<C>(items: &[i32])
where
    C: AsyncQueue<Item = i32> + Default,
{
    let queue = C::default();

    for (i, item) in items.iter().enumerate() {
        assert!(queue.enqueue(*item, NONE).unwrap_result());
        assert_eq!(queue.count(NONE).unwrap_result(), Ok(i as u64 + 1));
    }

    for (i, item) in items.iter().enumerate() {
        assert_eq!(queue.dequeue(NONE).unwrap_result(), Ok(*item));
        assert_eq!(
            queue.count(NONE).unwrap_result(),
            Ok((items.len() - i - 1) as u64)
        );
    }
}

/// Dequeue and peek on an empty queue fail with `EmptyQueue`.
pub fn test_empty_queue_errors<C>()
where
    C: AsyncQueue<Item = i32> + Default,
{
    let queue = C::default();

    assert_eq!(
        queue.dequeue(NONE).unwrap_result(),
        Err(CollectionError::EmptyQueue)
    );
    assert_eq!(
        queue.peek(NONE).unwrap_result(),
        Err(CollectionError::EmptyQueue)
    );
    assert_eq!(queue.count(NONE).unwrap_result(), Ok(0));
}

/// A cancelled signal never mutates the queue.
pub fn test_cancelled_operations<C>()
where
    C: AsyncQueue<Item = i32> + FromIterator<i32>,
{
    let queue: C = (0..16).collect();
    let source = CancellationSource::new();
    source.cancel();
    let cancelled = source.signal();

    assert_eq!(
        queue.count(cancelled).unwrap_result(),
        Err(CollectionError::Cancelled)
    );
    assert_eq!(
        queue.dequeue(cancelled).unwrap_result(),
        Err(CollectionError::Cancelled)
    );
    assert_eq!(
        queue.peek(cancelled).unwrap_result(),
        Err(CollectionError::Cancelled)
    );
    assert!(!queue.enqueue(1337, cancelled).unwrap_result());
    assert!(!queue.clear(cancelled).unwrap_result());

    assert_eq!(queue.count(NONE).unwrap_result(), Ok(16));

    // A cursor requested under the cancelled signal is the empty sentinel,
    // even when advanced with a live signal.
    //
    let mut cursor = queue.cursor(cancelled).unwrap_result();
    assert!(!cursor.advance(NONE).unwrap_result());

    let mut cursor = queue.cursor(NONE).unwrap_result();
    assert!(cursor.advance(NONE).unwrap_result());
    cursor.dispose();

    assert_eq!(queue.count(NONE).unwrap_result(), Ok(16));
}

/// A cursor over N items advances N times, then reports exhaustion.
pub fn test_cursor_lifecycle<C>(len: i32)
where
    C: AsyncQueue<Item = i32> + FromIterator<i32>,
{
    let queue: C = (0..len).collect();
    let mut cursor = queue.cursor(NONE).unwrap_result();

    assert_eq!(cursor.state(), CursorState::Created);
    assert_eq!(
        cursor.current(NONE).unwrap_result(),
        Err(CollectionError::NotInitialized)
    );

    for expected in 0..len {
        assert!(cursor.advance(NONE).unwrap_result());
        assert_eq!(cursor.state(), CursorState::Active);
        assert_eq!(cursor.current(NONE).unwrap_result(), Ok(expected));
    }

    assert!(!cursor.advance(NONE).unwrap_result());
    assert_eq!(cursor.state(), CursorState::Exhausted);
    assert_eq!(
        cursor.current(NONE).unwrap_result(),
        Err(CollectionError::NotInitialized)
    );

    cursor.dispose();
    cursor.dispose();
    assert_eq!(cursor.state(), CursorState::Disposed);
}

/// Materializing reproduces the queue contents in order, without consuming them.
pub fn test_materialize_round_trip<C>(items: &[i32])
where
    C: AsyncQueue<Item = i32> + FromIterator<i32>,
{
    let queue: C = items.iter().copied().collect();

    let list = queue.to_list(NONE).unwrap_result().unwrap();
    let array = queue.to_array(NONE).unwrap_result().unwrap();

    assert_eq!(list, items);
    assert_eq!(&*array, items);
    assert_eq!(queue.count(NONE).unwrap_result(), Ok(items.len() as u64));
}

/// A cursor does not observe items enqueued after it was created.
pub fn test_cursor_ignores_later_writes<C>()
where
    C: AsyncQueue<Item = i32> + FromIterator<i32>,
{
    let queue: C = (0..4).collect();
    let mut cursor = queue.cursor(NONE).unwrap_result();

    assert!(queue.enqueue(99, NONE).unwrap_result());
    assert_eq!(queue.dequeue(NONE).unwrap_result(), Ok(0));

    let mut seen = vec![];
    while cursor.advance(NONE).unwrap_result() {
        seen.push(cursor.current(NONE).unwrap_result().unwrap());
    }

    assert_eq!(seen, vec![0, 1, 2, 3]);
    assert_eq!(queue.to_list(NONE).unwrap_result(), Ok(vec![1, 2, 3, 99]));
}
