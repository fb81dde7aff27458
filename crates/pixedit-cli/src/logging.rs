use std::io::Write;

use log::LevelFilter;

/// Install the global logger.
///
/// Records are written to stderr as `time - LEVEL - message`. `level` is the
/// default; a `RUST_LOG` value takes precedence.
pub fn init(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .parse_default_env()
        .try_init();

    if result.is_err() {
        log::debug!("logger already initialised");
    }
}
