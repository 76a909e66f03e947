//! Code point to name lookup over a lazily decoded run sequence.

use std::collections::HashMap;

use log::{debug, trace};
use tokio::task;

use crate::runs::{Name, RunDecoder, RunSequence};

/// Lazily decoded code point to name lookup.
///
/// Override entries are loaded up front. Names from the run sequence are
/// decoded only as far as a query needs and are never allowed to replace an
/// override. The cache grows monotonically; nothing is ever evicted.
#[derive(Debug, Clone)]
pub struct NameIndex {
    map: HashMap<u32, Name>,
    decoder: RunDecoder,
    yield_every: usize,
}

impl NameIndex {
    /// Creates an index over `runs`. When several override maps define the
    /// same code point the earliest one wins.
    pub fn new<I, M, N>(runs: RunSequence, overrides: I) -> NameIndex
    where
        I: IntoIterator<Item = M>,
        M: IntoIterator<Item = (u32, N)>,
        N: Into<Name>,
    {
        let mut map = HashMap::new();
        for (cp, name) in overrides.into_iter().flatten() {
            map.entry(cp).or_insert_with(|| name.into());
        }

        debug!(
            "name index created with {} runs and {} overrides",
            runs.len(),
            map.len()
        );

        NameIndex {
            map,
            decoder: runs.decoder(),
            yield_every: 1,
        }
    }

    /// Sets how many pairs the cooperative operations decode between yields.
    pub fn with_yield_every(mut self, yield_every: usize) -> NameIndex {
        self.yield_every = yield_every.max(1);
        self
    }

    pub fn get_by_code_point(&mut self, cp: u32) -> Option<&str> {
        if self.needs_decoding(cp) {
            while let Some(decoded) = self.step() {
                if decoded >= cp {
                    break;
                }
            }
        }
        self.cached(cp)
    }

    /// Decodes everything that is left and returns the complete table.
    pub fn full_table(&mut self) -> &HashMap<u32, Name> {
        while self.step().is_some() {}
        &self.map
    }

    /// Same as [`get_by_code_point`](Self::get_by_code_point), but yields to
    /// the scheduler while decoding.
    pub async fn get_by_code_point_async(&mut self, cp: u32) -> Option<&str> {
        if self.needs_decoding(cp) {
            self.populate_async(Some(cp)).await;
        }
        self.cached(cp)
    }

    /// Same as [`full_table`](Self::full_table), but yields to the scheduler
    /// while decoding.
    pub async fn full_table_async(&mut self) -> &HashMap<u32, Name> {
        self.populate_async(None).await;
        &self.map
    }

    /// Highest code point decoded from the run sequence so far.
    pub fn decoded_through(&self) -> Option<u32> {
        self.decoder.high_water()
    }

    pub fn is_fully_decoded(&self) -> bool {
        self.decoder.is_exhausted()
    }

    /// Number of cached entries, overrides included.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn cached(&self, cp: u32) -> Option<&str> {
        self.map.get(&cp).map(|name| &**name)
    }

    // Everything at or below the decoder's last code point is already cached.
    fn needs_decoding(&self, cp: u32) -> bool {
        !self.map.contains_key(&cp)
            && !self.decoder.is_exhausted()
            && self.decoder.high_water().map_or(true, |last| last < cp)
    }

    fn step(&mut self) -> Option<u32> {
        if self.decoder.is_exhausted() {
            return None;
        }
        match self.decoder.produce_next() {
            Some((cp, name)) => {
                self.map.entry(cp).or_insert(name);
                Some(cp)
            }
            None => {
                debug!("run decoder exhausted with {} names cached", self.map.len());
                None
            }
        }
    }

    async fn populate_async(&mut self, target: Option<u32>) {
        let mut since_yield = 0;
        while let Some(decoded) = self.step() {
            if target.map_or(false, |cp| decoded >= cp) {
                return;
            }
            since_yield += 1;
            if since_yield >= self.yield_every {
                since_yield = 0;
                trace!("yielding after decoding through U+{:04X}", decoded);
                task::yield_now().await;
            }
        }
    }
}
