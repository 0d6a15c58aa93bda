// src/log.rs
//
// stderr logger: `[hh:mm:ss.mmm][LEVEL] msg`, elapsed since first use.
// RUST_LOG, when set, wins over the verbosity flag.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the process logger. Safe to call more than once; later calls are ignored.
pub fn init(verbosity: u8) {
    start();
    let mut builder = Builder::new();
    builder
        .filter_module(env!("CARGO_CRATE_NAME"), level_for(verbosity))
        .filter_level(LevelFilter::Warn)
        .parse_env(Env::default())
        .target(Target::Stderr)
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        });
    let _ = builder.try_init();
}
