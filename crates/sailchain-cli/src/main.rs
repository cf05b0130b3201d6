// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use chrono::{DateTime, Utc};
use sailchain_engine::prelude::{ChainEngine, ChainOptions, DepthResult};
use sailchain_model::prelude::{LegTable, LegTableBuilder, SnapshotLoader};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

fn find_snapshots_dir() -> Option<PathBuf> {
    let mut cur: Option<&Path> = Some(Path::new(env!("CARGO_MANIFEST_DIR")));
    while let Some(p) = cur {
        let cand = p.join("snapshots");
        if cand.is_dir() {
            return Some(cand);
        }
        cur = p.parent();
    }
    None
}

fn snapshots() -> impl Iterator<Item = (LegTable, String)> {
    let snap_dir = find_snapshots_dir()
        .expect("Could not find a `snapshots/` directory in any ancestor of CARGO_MANIFEST_DIR");
    let mut files: Vec<PathBuf> = std::fs::read_dir(&snap_dir)
        .expect("read_dir(snapshots) failed")
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().map(|ft| ft.is_file()).unwrap_or(false)
                && e.path().extension().map(|x| x == "json").unwrap_or(false)
        })
        .map(|e| e.path())
        .collect();

    files.sort();
    files.into_iter().filter_map(|f| {
        let loader = SnapshotLoader::new();
        match loader.from_path(&f) {
            Ok(rows) => {
                let name = f
                    .file_name()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| f.to_string_lossy().into_owned());
                Some((LegTableBuilder::new(&rows).build(), name))
            }
            Err(e) => {
                tracing::error!("Skipping unreadable snapshot {}: {}", f.display(), e);
                None
            }
        }
    })
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT | FmtSpan::CLOSE)
        .init();
}

#[derive(Serialize)]
struct DepthRow {
    row: usize,
    offer: String,
    depth: u32,
}

#[derive(Serialize)]
struct SnapshotRecord {
    filename: String,
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    runtime_ms: u128,
    legs: usize,
    allowed: usize,
    depths: Vec<DepthRow>,
    side_by_side_depths: Vec<DepthRow>,
    longest_chain: Vec<String>,
}

fn depth_rows(table: &LegTable, result: &DepthResult) -> Vec<DepthRow> {
    result
        .depths()
        .iter()
        .map(|(leg, depth)| DepthRow {
            row: leg.get(),
            offer: table
                .get(*leg)
                .map(|l| l.offer().as_str().to_string())
                .unwrap_or_default(),
            depth: depth.get(),
        })
        .collect()
}

fn main() {
    enable_tracing();

    let mut results: Vec<SnapshotRecord> = Vec::new();

    for (table, file) in snapshots() {
        tracing::info!(
            "Chaining {} with {} legs ({} allowed)",
            file,
            table.len(),
            table.allowed_len()
        );

        let start_ts = Utc::now();
        let t0 = Instant::now();

        let strict = ChainEngine::new();
        let relaxed = ChainEngine::new()
            .with_options(ChainOptions::new().with_side_by_side(true));

        let depths = strict.compute_depths(&table);
        let side_by_side = relaxed.compute_depths(&table);
        let longest = relaxed.compute_longest_chain(&table);

        let runtime = t0.elapsed();
        let end_ts = Utc::now();

        let max_depth = depths.depths().values().map(|d| d.get()).max().unwrap_or(0);
        tracing::info!(
            "Finished {}: max_depth={}, longest_chain={}, runtime={:?}",
            file,
            max_depth,
            longest.len(),
            runtime
        );

        results.push(SnapshotRecord {
            filename: file,
            start_ts,
            end_ts,
            runtime_ms: runtime.as_millis(),
            legs: table.len(),
            allowed: table.allowed_len(),
            depths: depth_rows(&table, &depths),
            side_by_side_depths: depth_rows(&table, &side_by_side),
            longest_chain: longest
                .path()
                .iter()
                .map(|o| o.as_str().to_string())
                .collect(),
        });
    }

    // Persist results
    let out_path = PathBuf::from("chain_results.json");
    match File::create(&out_path).and_then(|mut f| {
        let json = serde_json::to_string_pretty(&results).expect("serialize results");
        f.write_all(json.as_bytes())
    }) {
        Ok(()) => {
            tracing::info!(
                "Wrote {} snapshot record(s) to {}",
                results.len(),
                out_path.display()
            );
        }
        Err(e) => {
            tracing::error!("Failed to write results to {}: {}", out_path.display(), e);
        }
    }
}
