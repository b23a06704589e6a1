//! helpers for logging.
//!
//! Library crates only ever log through the `log` facade; binaries, benches and tests pick a sink here.  Both
//! helpers honor `RUST_LOG`.

fn builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_default_env();
    builder.format(|buf, record| {
        use std::io::Write;

        let now = time::OffsetDateTime::now_utc();

        writeln!(
            buf,
            "{} {} time={} target={}",
            record.level(),
            record.args(),
            now,
            record.target()
        )
    });
    builder
}

/// Log to stderr.
///
/// If called multiple times in the same process, only applies once.
pub fn log_to_stderr() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        builder().init();
    });
}

/// Log through the test harness's captured output, so that logs only show for failing tests.
///
/// Safe to call from every test; all but the first call are ignored.
pub fn log_for_tests() {
    let _ = builder()
        .filter_level(log::LevelFilter::Debug)
        .parse_default_env()
        .is_test(true)
        .try_init();
}
