//! Synthetic workload driver.
//!
//! Fills a [`LalaTrie`] with generated keys (`"item 1"`, `"item 2"`, ...),
//! reads every key back, probes keys that were never inserted and reports
//! timings together with the trie's allocation figures. The same workload can
//! optionally be timed against a `HashMap` for comparison.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use crate::config::trie::TrieSettings;
use crate::config::workload::WorkloadSettings;
use crate::config::Validate;
use crate::data_structures::{LalaTrie, TrieStats};
use crate::error::{LalaError, LalaResult};

/// Outcome of one workload run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadReport {
    /// Number of keys inserted
    pub keys_inserted: usize,

    /// Lookups of inserted keys that returned the stored value
    pub hits: usize,

    /// Lookups of never-inserted keys that returned the default value
    pub misses: usize,

    /// Allocation figures of the filled trie
    pub trie: TrieStats,

    /// Trie timings
    pub trie_timings: Timings,

    /// `HashMap` timings, when the comparison was requested
    pub hash_map_timings: Option<Timings>,
}

/// Wall-clock time spent in each phase, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Timings {
    /// Time spent inserting every key
    pub insert_ms: f64,

    /// Time spent reading every key back
    pub lookup_ms: f64,
}

impl Timings {
    fn new(insert: Duration, lookup: Duration) -> Self {
        Self {
            insert_ms: insert.as_secs_f64() * 1_000.0,
            lookup_ms: lookup.as_secs_f64() * 1_000.0,
        }
    }
}

/// Key number `index` of the workload.
pub fn workload_key(settings: &WorkloadSettings, index: usize) -> String {
    format!("{}{}", settings.key_prefix, index)
}

/// Runs the workload described by `workload` against a trie built from `trie`.
///
/// # Errors
///
/// Returns an error if either settings block fails validation, if the trie
/// rejects a generated key, or if a lookup does not return what was stored.
pub fn run_workload(workload: &WorkloadSettings, trie: &TrieSettings) -> LalaResult<WorkloadReport> {
    workload.validate()?;
    trie.validate()?;

    let span = info_span!("workload", key_count = workload.key_count);
    let _guard = span.enter();

    let mut map: LalaTrie<String> =
        LalaTrie::with_config(trie.to_trie_config(), trie.default_value.clone());
    let keys: Vec<String> = (1..=workload.key_count)
        .map(|i| workload_key(workload, i))
        .collect();

    let started = Instant::now();
    for key in &keys {
        map.set(key, workload.value.clone())?;
    }
    let insert = started.elapsed();
    debug!(nodes = map.node_count(), elapsed_ms = insert.as_millis() as u64, "Inserted keys");

    let started = Instant::now();
    let mut hits = 0;
    for key in &keys {
        if map.get(key)? == Some(&workload.value) {
            hits += 1;
        }
    }
    let lookup = started.elapsed();

    if hits != keys.len() {
        return Err(LalaError::Custom(format!(
            "Read back {hits} of {} inserted keys",
            keys.len()
        )));
    }

    let mut misses = 0;
    for i in (workload.key_count + 1)..=(workload.key_count * 2) {
        if map.get_stored(workload_key(workload, i))?.is_none() {
            misses += 1;
        }
    }
    if misses != workload.key_count {
        warn!(misses, expected = workload.key_count, "Absent keys were found in the trie");
    }

    let hash_map_timings = workload
        .compare_hash_map
        .then(|| run_hash_map(&keys, &workload.value));

    let report = WorkloadReport {
        keys_inserted: map.len(),
        hits,
        misses,
        trie: map.stats(),
        trie_timings: Timings::new(insert, lookup),
        hash_map_timings,
    };

    info!(
        keys = report.keys_inserted,
        nodes = report.trie.nodes,
        insert_ms = report.trie_timings.insert_ms,
        lookup_ms = report.trie_timings.lookup_ms,
        "Workload finished"
    );

    Ok(report)
}

fn run_hash_map(keys: &[String], value: &str) -> Timings {
    let mut map = HashMap::new();

    let started = Instant::now();
    for key in keys {
        map.insert(key.clone(), value.to_string());
    }
    let insert = started.elapsed();

    let started = Instant::now();
    for key in keys {
        std::hint::black_box(map.get(key));
    }
    let lookup = started.elapsed();

    Timings::new(insert, lookup)
}
