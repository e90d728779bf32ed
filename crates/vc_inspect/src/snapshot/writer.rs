use alloc::string::String;
use core::fmt::{self, Write};

use crate::access::{Associative, Composite, Identity, Pointee, Sequence, VisitedSet};
use crate::info::Classification;
use crate::{Inspect, InspectRef};

/// Whitespace layout of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// No whitespace at all.
    #[default]
    Compact,
    /// One element per line, two spaces per nesting level.
    Pretty,
}

/// Renders values into a [`fmt::Write`].
///
/// Each call to [`SnapshotWriter::write`] is an independent traversal with
/// its own cycle guard.
pub struct SnapshotWriter<'w, W: Write + ?Sized> {
    out: &'w mut W,
    layout: Layout,
    visited: VisitedSet,
}

impl<'w, W: Write + ?Sized> SnapshotWriter<'w, W> {
    #[inline]
    pub fn new(out: &'w mut W, layout: Layout) -> Self {
        Self {
            out,
            layout,
            visited: VisitedSet::new(),
        }
    }

    #[inline]
    pub fn compact(out: &'w mut W) -> Self {
        Self::new(out, Layout::Compact)
    }

    #[inline]
    pub fn pretty(out: &'w mut W) -> Self {
        Self::new(out, Layout::Pretty)
    }

    /// Render `value`.
    ///
    /// Only errors of the underlying writer are reported; content never
    /// makes rendering fail.
    pub fn write(&mut self, value: &dyn Inspect) -> fmt::Result {
        self.visited = VisitedSet::new();
        self.write_value(value, 0)
    }

    fn write_value(&mut self, value: &dyn Inspect, level: usize) -> fmt::Result {
        match value.inspect_ref() {
            InspectRef::Null => self.out.write_str("null"),
            InspectRef::Leaf(leaf) => write!(self.out, "{leaf}"),
            InspectRef::Sequence(sequence) | InspectRef::Array(sequence) => {
                self.write_sequence(sequence, level)
            }
            InspectRef::Associative(map) => self.write_map(map, level),
            InspectRef::Composite(composite) => self.write_composite(composite, level),
            InspectRef::Indirect(indirect) => match indirect.pointee() {
                Pointee::Value(target) => self.write_value(&*target, level),
                Pointee::Dangling | Pointee::Locked => self.out.write_str("null"),
            },
        }
    }

    fn write_sequence(&mut self, sequence: &dyn Sequence, level: usize) -> fmt::Result {
        self.out.write_char('[')?;
        let mut first = true;
        for element in sequence.iter() {
            self.begin_item(&mut first, level)?;
            self.write_value(element, level + 1)?;
        }
        self.end_container(first, level)?;
        self.out.write_char(']')
    }

    fn write_map(&mut self, map: &dyn Associative, level: usize) -> fmt::Result {
        self.out.write_char('{')?;
        let mut first = true;
        for (key, value) in map.iter() {
            self.begin_item(&mut first, level)?;
            self.write_value(key, level + 1)?;
            self.write_colon()?;
            self.write_value(value, level + 1)?;
        }
        self.end_container(first, level)?;
        self.out.write_char('}')
    }

    fn write_composite(&mut self, composite: &dyn Composite, level: usize) -> fmt::Result {
        let identity = Identity::of_composite(composite);
        if !self.visited.insert(identity) {
            return self.out.write_str("{}");
        }

        self.out.write_char('{')?;
        let mut first = true;
        for field in composite.iter_fields() {
            if field.value().classify() == Classification::Null {
                continue;
            }
            self.begin_item(&mut first, level)?;
            write!(self.out, "\"{}\"", Escaped(field.name()))?;
            self.write_colon()?;
            self.write_value(field.value(), level + 1)?;
        }
        self.end_container(first, level)?;
        self.out.write_char('}')?;

        self.visited.remove(&identity);
        Ok(())
    }

    fn begin_item(&mut self, first: &mut bool, level: usize) -> fmt::Result {
        if !*first {
            self.out.write_char(',')?;
        }
        *first = false;
        self.new_line(level + 1)
    }

    fn end_container(&mut self, empty: bool, level: usize) -> fmt::Result {
        if empty {
            return Ok(());
        }
        self.new_line(level)
    }

    fn write_colon(&mut self) -> fmt::Result {
        match self.layout {
            Layout::Compact => self.out.write_char(':'),
            Layout::Pretty => self.out.write_str(": "),
        }
    }

    fn new_line(&mut self, level: usize) -> fmt::Result {
        if self.layout == Layout::Compact {
            return Ok(());
        }
        self.out.write_char('\n')?;
        for _ in 0..level {
            self.out.write_str("  ")?;
        }
        Ok(())
    }
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::info::write_escaped(f, self.0)
    }
}

/// A value paired with a layout. `Display` renders the snapshot.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    value: &'a dyn Inspect,
    layout: Layout,
}

impl<'a> Snapshot<'a> {
    #[inline]
    pub fn new(value: &'a dyn Inspect, layout: Layout) -> Self {
        Self { value, layout }
    }

    #[inline]
    pub fn compact(value: &'a dyn Inspect) -> Self {
        Self::new(value, Layout::Compact)
    }

    #[inline]
    pub fn pretty(value: &'a dyn Inspect) -> Self {
        Self::new(value, Layout::Pretty)
    }
}

impl fmt::Display for Snapshot<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        SnapshotWriter::new(f, self.layout).write(self.value)
    }
}

impl fmt::Debug for Snapshot<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

fn render(value: &dyn Inspect, layout: Layout) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = SnapshotWriter::new(&mut out, layout).write(value);
    out
}

/// Compact snapshot of `value`.
#[inline]
pub fn to_snapshot(value: &dyn Inspect) -> String {
    render(value, Layout::Compact)
}

/// Indented snapshot of `value`.
#[inline]
pub fn to_snapshot_pretty(value: &dyn Inspect) -> String {
    render(value, Layout::Pretty)
}
