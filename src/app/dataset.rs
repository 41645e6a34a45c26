//! Synthetic result set for the demo.
//!
//! Records are generated from a fixed seed so the same pages show the same
//! rows across runs. Timestamps are spread over a window centered on `now`,
//! which keeps the "now" marker inside the timeline.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NAMES: [&str; 8] = [
    "deploy", "backup", "rebuild", "sync", "import", "export", "audit", "cleanup",
];

/// One row of the demo result set.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoRecord {
    pub id: u64,
    pub name: String,
    pub timestamp_ms: i64,
    pub duration_ms: i64,
}

/// Generates `count` records sorted by timestamp within `now_ms ± half_window_ms`.
pub fn generate_records(seed: u64, count: usize, now_ms: i64, half_window_ms: i64) -> Vec<DemoRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records: Vec<DemoRecord> = (0..count)
        .map(|_| {
            let name = NAMES[rng.gen_range(0..NAMES.len())];
            DemoRecord {
                id: 0,
                name: format!("{}-{:04}", name, rng.gen_range(0..10_000)),
                timestamp_ms: now_ms + rng.gen_range(-half_window_ms..half_window_ms),
                duration_ms: rng.gen_range(1_000..120_000),
            }
        })
        .collect();

    records.sort_by_key(|record| record.timestamp_ms);
    for (index, record) in records.iter_mut().enumerate() {
        record.id = index as u64 + 1;
    }
    records
}
