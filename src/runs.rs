//! Run-length encoded name data and its incremental decoder.
//!
//! The names dataset is a flat list of `(skip, length, value)` triples. A
//! running code-point cursor starts at zero; each triple first advances the
//! cursor by `skip`, then assigns `value` to the next `length` code points.

use std::convert::TryFrom;
use std::iter::FusedIterator;
use std::sync::Arc;

use log::warn;
use serde_json::Value;

use crate::error::{Error, Result};

/// A resolved character name. Shared between every code point of a run.
pub type Name = Arc<str>;

/// How to treat a run sequence that is not well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// Keep every complete triple before the first bad element.
    Lenient,
    /// Reject the whole sequence.
    Strict,
}

impl Default for Validation {
    fn default() -> Self {
        Validation::Lenient
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub skip: u32,
    pub length: u32,
    pub value: Name,
}

impl Run {
    pub fn new(skip: u32, length: u32, value: impl Into<Name>) -> Run {
        Run {
            skip,
            length,
            value: value.into(),
        }
    }
}

/// An immutable, cheaply cloneable list of runs.
#[derive(Debug, Clone, Default)]
pub struct RunSequence {
    runs: Arc<[Run]>,
}

impl RunSequence {
    pub fn new(runs: Vec<Run>) -> RunSequence {
        RunSequence { runs: runs.into() }
    }

    /// Builds a sequence from the flat `[skip, length, value, ...]` JSON form.
    pub fn from_flat(values: &[Value], validation: Validation) -> Result<RunSequence> {
        let mut runs = Vec::with_capacity(values.len() / 3);

        for (n, triple) in values.chunks(3).enumerate() {
            let index = n * 3;
            match parse_triple(triple) {
                Ok(run) => runs.push(run),
                Err((offset, reason)) => {
                    if validation == Validation::Strict {
                        return Err(Error::MalformedRuns {
                            index: index + offset,
                            reason: reason.to_string(),
                        });
                    }
                    warn!(
                        "truncating run sequence at element {}: {} ({} runs kept)",
                        index + offset,
                        reason,
                        runs.len()
                    );
                    break;
                }
            }
        }

        Ok(RunSequence::new(runs))
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Run> {
        self.runs.iter()
    }

    /// Total number of code points the sequence assigns a name to.
    pub fn covered(&self) -> u64 {
        self.runs.iter().map(|run| u64::from(run.length)).sum()
    }

    pub fn decoder(&self) -> RunDecoder {
        RunDecoder::new(self.clone())
    }
}

impl From<Vec<Run>> for RunSequence {
    fn from(runs: Vec<Run>) -> RunSequence {
        RunSequence::new(runs)
    }
}

fn parse_triple(triple: &[Value]) -> std::result::Result<Run, (usize, &'static str)> {
    if triple.len() < 3 {
        return Err((triple.len(), "incomplete trailing triple"));
    }
    let skip = as_u32(&triple[0]).ok_or((0, "skip is not a non-negative integer"))?;
    let length = as_u32(&triple[1]).ok_or((1, "length is not a non-negative integer"))?;
    let value = triple[2].as_str().ok_or((2, "value is not a string"))?;
    Ok(Run::new(skip, length, value))
}

fn as_u32(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|n| u32::try_from(n).ok())
}

/// Produces `(code point, name)` pairs from a [`RunSequence`], one at a time,
/// in strictly increasing code-point order.
///
/// The decoder only moves forward. Once it returns `None` it stays exhausted.
#[derive(Debug, Clone)]
pub struct RunDecoder {
    runs: RunSequence,
    /// Index of the next run to enter.
    next_run: usize,
    /// Run currently being emitted, valid while `remaining > 0`.
    current: usize,
    remaining: u32,
    /// Next code point to assign. Kept wide so `skip + length` never wraps.
    cursor: u64,
    last: Option<u32>,
    exhausted: bool,
}

impl RunDecoder {
    pub fn new(runs: RunSequence) -> RunDecoder {
        RunDecoder {
            runs,
            next_run: 0,
            current: 0,
            remaining: 0,
            cursor: 0,
            last: None,
            exhausted: false,
        }
    }

    /// Returns the next pair, or `None` once every run has been emitted.
    pub fn produce_next(&mut self) -> Option<(u32, Name)> {
        if self.exhausted {
            return None;
        }

        // Zero-length runs only move the cursor.
        while self.remaining == 0 {
            let run = match self.runs.runs.get(self.next_run) {
                Some(run) => run,
                None => return self.exhaust(),
            };
            self.current = self.next_run;
            self.next_run += 1;
            self.cursor += u64::from(run.skip);
            self.remaining = run.length;
        }

        let cp = match u32::try_from(self.cursor) {
            Ok(cp) => cp,
            Err(_) => return self.exhaust(),
        };
        self.cursor += 1;
        self.remaining -= 1;
        self.last = Some(cp);

        Some((cp, self.runs.runs[self.current].value.clone()))
    }

    /// Highest code point produced so far.
    pub fn high_water(&self) -> Option<u32> {
        self.last
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn exhaust(&mut self) -> Option<(u32, Name)> {
        self.exhausted = true;
        self.remaining = 0;
        None
    }
}

impl Iterator for RunDecoder {
    type Item = (u32, Name);

    fn next(&mut self) -> Option<Self::Item> {
        self.produce_next()
    }
}

impl FusedIterator for RunDecoder {}
