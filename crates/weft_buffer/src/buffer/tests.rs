#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;

#[test]
fn new_buffer_is_inline_and_empty() {
    let buffer = MemoryBuffer::<u8>::new();
    assert!(buffer.is_empty());
    assert_eq!(buffer.capacity(), INLINE_CAPACITY);
    assert!(!buffer.spilled());
    assert_eq!(buffer.reallocations(), 0);
}

#[test]
fn with_capacity_preallocates() {
    let buffer = MemoryBuffer::<char>::with_capacity(4096);
    assert!(buffer.capacity() >= 4096);
    assert!(buffer.spilled());
    assert_eq!(buffer.len(), 0);
}

#[test]
fn push_str_appends() {
    let mut buffer = MemoryBuffer::<u8>::new();
    buffer.push_str("hello").unwrap();
    buffer.push(b' ').unwrap();
    buffer.push_str("world").unwrap();
    assert_eq!(buffer.as_slice(), b"hello world");
    assert_eq!(buffer.to_string_lossy(), "hello world");
}

#[test]
fn wide_buffer_holds_code_points() {
    let mut buffer = MemoryBuffer::<char>::new();
    buffer.push_str("añb").unwrap();
    assert_eq!(buffer.len(), 3);
    assert_eq!(buffer.as_slice(), &['a', 'ñ', 'b']);
}

#[test]
fn extend_past_inline_capacity() {
    let mut buffer = MemoryBuffer::<u8>::new();
    let chunk = [b'x'; 300];
    buffer.extend_from_slice(&chunk).unwrap();
    buffer.extend_from_slice(&chunk).unwrap();
    assert_eq!(buffer.len(), 600);
    assert!(buffer.capacity() >= 600);
    assert!(buffer.spilled());
    assert!(buffer.as_slice().iter().all(|&b| b == b'x'));
}

#[test]
fn resize_grows_with_default_units() {
    let mut buffer = MemoryBuffer::<u8>::new();
    buffer.push_str("ab").unwrap();
    buffer.resize(4);
    assert_eq!(buffer.as_slice(), &[b'a', b'b', 0, 0]);
    buffer.resize(1);
    assert_eq!(buffer.as_slice(), b"a");
}

#[test]
fn resize_clears_stale_units() {
    let mut buffer = MemoryBuffer::<u8>::new();
    buffer.push_str("stale").unwrap();
    buffer.clear();
    buffer.resize(3);
    assert_eq!(buffer.as_slice(), &[0, 0, 0]);
}

#[test]
fn resize_past_capacity_reserves() {
    let mut buffer = MemoryBuffer::<u8>::new();
    buffer.resize(INLINE_CAPACITY * 3);
    assert_eq!(buffer.len(), INLINE_CAPACITY * 3);
    assert!(buffer.capacity() >= INLINE_CAPACITY * 3);
}

#[test]
fn reserve_within_capacity_is_a_no_op() {
    let mut buffer = MemoryBuffer::<u8>::new();
    buffer.reserve(10);
    assert!(buffer.try_reserve(INLINE_CAPACITY).is_ok());
    assert_eq!(buffer.reallocations(), 0);
    assert!(!buffer.spilled());
}

#[test]
fn try_reserve_reports_overflow() {
    let mut buffer = MemoryBuffer::<u8>::new();
    assert_eq!(buffer.try_reserve(usize::MAX), Err(BufferError::CapacityOverflow));
    assert_eq!(buffer.capacity(), INLINE_CAPACITY);
}

#[test]
fn growth_policy_doubles_with_floor() {
    assert_eq!(grown_capacity(0, 1), MIN_GROWTH);
    assert_eq!(grown_capacity(500, 501), 1000);
    assert_eq!(grown_capacity(500, 5000), 5000);
    assert_eq!(grown_capacity(usize::MAX, usize::MAX), usize::MAX);
}

#[test]
fn spill_moves_storage() {
    let mut buffer = MemoryBuffer::<u8>::new();
    let inline_ptr = buffer.as_ptr();
    buffer.reserve(INLINE_CAPACITY + 1);
    assert_ne!(buffer.as_ptr(), inline_ptr);
    assert_eq!(buffer.reallocations(), 1);
}

#[test]
fn into_string_takes_written_content() {
    let mut buffer = MemoryBuffer::<u8>::new();
    buffer.push_str("done").unwrap();
    assert_eq!(buffer.into_string().ok().as_deref(), Some("done"));
}

#[test]
fn push_repeated_encodes_fill() {
    let mut buffer = MemoryBuffer::<u8>::new();
    buffer.push_repeated('·', 3).unwrap();
    assert_eq!(buffer.to_string_lossy(), "···");

    let mut wide = MemoryBuffer::<char>::new();
    wide.push_repeated('·', 3).unwrap();
    assert_eq!(wide.len(), 3);
}

#[test]
fn oversized_repeat_fails_before_writing() {
    let mut buffer = MemoryBuffer::<u8>::new();
    buffer.push_str("ab").unwrap();
    assert_eq!(
        buffer.push_repeated(' ', usize::MAX - 1),
        Err(BufferError::CapacityOverflow)
    );
    assert_eq!(buffer.as_slice(), b"ab");
    assert_eq!(buffer.capacity(), INLINE_CAPACITY);

    let mut multibyte = MemoryBuffer::<u8>::new();
    assert_eq!(
        multibyte.push_repeated('ж', usize::MAX / 2 + 1),
        Err(BufferError::CapacityOverflow)
    );
    assert!(multibyte.is_empty());
}

#[test]
fn growth_stops_at_max_capacity() {
    let mut buffer = MemoryBuffer::<u8>::new();
    buffer.set_max_capacity(INLINE_CAPACITY * 2);
    assert_eq!(buffer.max_capacity(), INLINE_CAPACITY * 2);

    buffer.extend_from_slice(&[b'a'; INLINE_CAPACITY + 1]).unwrap();
    assert_eq!(buffer.capacity(), INLINE_CAPACITY + 1);
    assert_eq!(
        buffer.extend_from_slice(&[b'b'; INLINE_CAPACITY]),
        Err(BufferError::CapacityOverflow)
    );
    assert_eq!(buffer.len(), INLINE_CAPACITY + 1);
    buffer.extend_from_slice(&[b'c'; INLINE_CAPACITY - 1]).unwrap();
    assert_eq!(buffer.len(), INLINE_CAPACITY * 2);
    assert_eq!(buffer.push(b'd'), Err(BufferError::CapacityOverflow));
}

#[test]
fn reserve_additional_counts_from_length() {
    let mut buffer = MemoryBuffer::<char>::new();
    buffer.push_str("abc").unwrap();
    buffer.reserve_additional(INLINE_CAPACITY).unwrap();
    assert!(buffer.capacity() >= INLINE_CAPACITY + 3);
    assert_eq!(
        buffer.reserve_additional(usize::MAX),
        Err(BufferError::CapacityOverflow)
    );
    assert_eq!(buffer.to_string_lossy(), "abc");
}

#[test]
fn display_and_debug() {
    let mut buffer = MemoryBuffer::<char>::new();
    buffer.push_str("hi").unwrap();
    assert_eq!(buffer.to_string(), "hi");
    let debug = format!("{buffer:?}");
    assert!(debug.contains("\"hi\""));
    assert!(debug.contains("len: 2"));
}
