//! Logger setup for the binaries.

use std::io::Write;

use chrono::Local;
use log::LevelFilter;

use crate::error::ApiError;

/// Install an `env_logger` backend.
///
/// `RUST_LOG` is read first; `level` then applies to this crate. HTTP stack
/// internals are held at warn. Uses `try_init`, so a second call returns
/// `ApiError::Logger` instead of panicking.
pub fn init_logger(level: LevelFilter) -> Result<(), ApiError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("ureq", LevelFilter::Warn);
    builder.filter_module("ureq_proto", LevelFilter::Warn);
    builder.filter_module("rustls", LevelFilter::Warn);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder.try_init()?;
    Ok(())
}
