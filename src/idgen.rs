//! Connection identifier generation.
//!
//! Fresh IDs are the only "resource" the core touches. The generator is an
//! injected capability so callers (and tests) can substitute their own.

use std::sync::atomic::{AtomicU64, Ordering};

/// A source of fresh connection identifiers.
///
/// Each call must return a value unique for the lifetime of the process.
/// Cross-machine uniqueness is not required.
pub trait ConnectionIdGen {
    /// Returns a fresh identifier.
    fn next_id(&self) -> String;
}

/// Adapts a closure into a generator: `IdFn(|| "c1".to_string())`.
///
/// A wrapper rather than a blanket impl on `Fn() -> String`, which would
/// overlap with the named generator impls below.
#[derive(Debug, Clone)]
pub struct IdFn<F>(pub F);

impl<F> ConnectionIdGen for IdFn<F>
where
    F: Fn() -> String,
{
    fn next_id(&self) -> String {
        (self.0)()
    }
}

static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Default generator: `conn-<n>` from a process-wide atomic counter.
///
/// All instances share the counter, so IDs never collide within a process
/// no matter how many generators callers create.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialIdGen;

impl ConnectionIdGen for SerialIdGen {
    fn next_id(&self) -> String {
        let n = NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed);
        format!("conn-{n}")
    }
}

/// Deterministic generator with an instance-local counter: `<prefix><n>`.
///
/// Unlike [`SerialIdGen`], two instances with the same prefix produce the
/// same sequence, which is what golden-output tests want.
#[derive(Debug)]
pub struct CountingIdGen {
    prefix: String,
    next: AtomicU64,
}

impl CountingIdGen {
    /// Creates a generator starting at `<prefix>1`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl ConnectionIdGen for CountingIdGen {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_serial_ids_are_unique() {
        let id_gen = SerialIdGen;
        let ids: HashSet<String> = (0..100).map(|_| id_gen.next_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_serial_ids_unique_across_instances() {
        let a = SerialIdGen;
        let b = SerialIdGen;
        assert_ne!(a.next_id(), b.next_id());
    }

    #[test]
    fn test_closure_adapter() {
        let counter = std::cell::Cell::new(0u32);
        let id_gen = IdFn(|| {
            counter.set(counter.get() + 1);
            format!("c{}", counter.get())
        });
        assert_eq!(id_gen.next_id(), "c1");
        assert_eq!(id_gen.next_id(), "c2");
    }

    #[test]
    fn test_counting_generator_is_deterministic() {
        let a = CountingIdGen::new("c");
        assert_eq!(a.next_id(), "c1");
        assert_eq!(a.next_id(), "c2");

        let b = CountingIdGen::new("c");
        assert_eq!(b.next_id(), "c1");
    }
}
