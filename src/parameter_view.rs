//! # Parameter View
//!
//! A parameter view is the compact, append-only structure handed to the
//! render pipeline for a single component instance. It is a frame sequence:
//! slot 0 is a header recording how many entries have been accumulated, and
//! slots 1..N hold `(name, value)` pairs in arrival order.
//!
//! The builder is sized up front from an externally validated parameter
//! count; it performs no bounds checking of its own beyond a debug
//! assertion, since the interop gateway rejects oversized counts before a
//! builder is ever constructed.

use std::sync::Arc;

use crate::value::ParameterValue;

/// One slot of a parameter frame sequence.
///
/// The `Header` discriminant doubles as the identity marker distinguishing a
/// parameter frame sequence from any other frame buffer a renderer may hold.
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterFrame {
    Header { entries: usize },
    Parameter {
        name: String,
        value: ParameterValue,
    },
}

/// Accumulates `(name, value)` pairs for one component instance.
pub struct ParameterViewBuilder {
    frames: Vec<ParameterFrame>,
    capacity: usize,
}

impl ParameterViewBuilder {
    /// Creates a builder for at most `capacity` parameters.
    ///
    /// Allocates `capacity + 1` frames; slot 0 becomes the header with zero
    /// accumulated entries.
    pub fn new(capacity: usize) -> Self {
        let mut frames = Vec::with_capacity(capacity + 1);
        frames.push(ParameterFrame::Header { entries: 0 });
        Self { frames, capacity }
    }

    /// Appends one entry at the next free slot and bumps the header count.
    ///
    /// Callers must not add more than `capacity` entries; the count is
    /// validated upstream.
    pub fn add(&mut self, name: impl Into<String>, value: ParameterValue) {
        debug_assert!(
            self.len() < self.capacity,
            "parameter view builder capacity exceeded"
        );
        self.frames.push(ParameterFrame::Parameter {
            name: name.into(),
            value,
        });
        if let ParameterFrame::Header { entries } = &mut self.frames[0] {
            *entries += 1;
        }
    }

    /// Entries accumulated so far, as recorded by the header.
    pub fn len(&self) -> usize {
        match self.frames[0] {
            ParameterFrame::Header { entries } => entries,
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Freezes the frame sequence into a read-only view.
    pub fn into_parameter_view(self) -> ParameterView {
        ParameterView {
            frames: Arc::from(self.frames),
        }
    }
}

/// Read-only view over a completed frame sequence.
///
/// Cloning shares the underlying frames.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterView {
    frames: Arc<[ParameterFrame]>,
}

impl ParameterView {
    /// An empty view, for components rendered without parameters.
    pub fn empty() -> Self {
        ParameterViewBuilder::new(0).into_parameter_view()
    }

    /// Number of parameters in the view.
    pub fn len(&self) -> usize {
        match self.frames[0] {
            ParameterFrame::Header { entries } => entries,
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.frames.iter().filter_map(|frame| match frame {
            ParameterFrame::Parameter { name, value } => Some((name.as_str(), value)),
            ParameterFrame::Header { .. } => None,
        })
    }

    /// Looks up a parameter by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.iter()
            .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }
}
