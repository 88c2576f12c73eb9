#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::io;

use pretty_assertions::assert_eq;

use super::*;

/// Records every write; optionally accepts short writes or fails.
#[derive(Default)]
struct Recorder {
    writes: Vec<usize>,
    data: Vec<u8>,
    short_limit: Option<usize>,
    fail_after: Option<usize>,
    interrupt_once: bool,
}

impl Write for Recorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.interrupt_once {
            self.interrupt_once = false;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        if self.fail_after.is_some_and(|n| self.writes.len() >= n) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        }
        let n = self.short_limit.map_or(buf.len(), |limit| buf.len().min(limit));
        self.writes.push(n);
        self.data.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn plan_below_limit_is_one_chunk() {
    let plan = ChunkPlan::new(5_000_000, MAX_WRITE);
    assert_eq!(plan.len(), 1);
    assert_eq!(plan.collect::<Vec<_>>(), [5_000_000]);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn plan_above_limit_splits_at_max_write() {
    let plan = ChunkPlan::new(10_000_000_000, MAX_WRITE);
    assert_eq!(plan.len(), 5);
    assert_eq!(
        plan.collect::<Vec<_>>(),
        [
            2_147_483_647,
            2_147_483_647,
            2_147_483_647,
            2_147_483_647,
            1_410_065_412
        ]
    );
}

#[test]
fn plan_edges() {
    assert_eq!(ChunkPlan::new(0, MAX_WRITE).count(), 0);
    assert_eq!(ChunkPlan::new(8, 4).collect::<Vec<_>>(), [4, 4]);
    assert_eq!(ChunkPlan::new(3, 0).collect::<Vec<_>>(), [1, 1, 1]);
    assert_eq!(ChunkPlan::new(MAX_WRITE, MAX_WRITE).len(), 1);
}

#[test]
fn chunks_written_in_order() {
    let mut dest = Recorder::default();
    commit_chunked(&mut dest, b"abcdefghij", 4).unwrap();
    assert_eq!(dest.writes, [4, 4, 2]);
    assert_eq!(dest.data, b"abcdefghij");
}

#[test]
fn short_writes_are_continued() {
    let mut dest = Recorder {
        short_limit: Some(3),
        ..Recorder::default()
    };
    commit_chunked(&mut dest, b"abcdefgh", 5).unwrap();
    assert_eq!(dest.writes, [3, 2, 3]);
    assert_eq!(dest.data, b"abcdefgh");
}

#[test]
fn interrupted_write_is_retried() {
    let mut dest = Recorder {
        interrupt_once: true,
        ..Recorder::default()
    };
    commit_chunked(&mut dest, b"xyz", MAX_WRITE).unwrap();
    assert_eq!(dest.data, b"xyz");
}

#[test]
fn failure_stops_commit() {
    let mut dest = Recorder {
        fail_after: Some(1),
        ..Recorder::default()
    };
    let err = commit_chunked(&mut dest, b"aabbcc", 2).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(dest.writes, [2]);
    assert_eq!(dest.data, b"aa");
}

#[test]
fn empty_buffer_writes_nothing() {
    let mut dest = Recorder::default();
    commit(&mut dest, &MemoryBuffer::new()).unwrap();
    assert!(dest.writes.is_empty());
}

#[test]
fn commit_buffer_content() {
    let mut buffer = MemoryBuffer::<u8>::new();
    buffer.push_str("X=42").unwrap();
    let mut dest = Vec::new();
    commit(&mut dest, &buffer).unwrap();
    assert_eq!(dest, b"X=42");
}
