use cfg_if::cfg_if;


/// Routes the `log` records of the `debug` feature to the test output, safe to call from every
/// test. With `debug` enabled the records are also kept so tests can check them with [`logged`].
///
pub fn init_logging() {
    cfg_if!{
        if #[cfg(feature = "debug")] {
            captured::init();
        } else {
            let _ = env_logger::builder().is_test(true).try_init();
        }
    }
}

#[cfg(feature = "debug")]
pub use captured::logged;

#[cfg(feature = "debug")]
mod captured {
    use std::sync::Mutex;
    use log::{LevelFilter, Log, Metadata, Record};

    static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());

    static LOGGER: CapturingLogger = CapturingLogger;

    struct CapturingLogger;

    impl Log for CapturingLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            let line = format!("{}", record.args());
            println!("[{}] {}", record.level(), line);
            if let Ok(mut records) = RECORDS.lock() {
                records.push(line);
            }
        }

        fn flush(&self) {}
    }

    pub fn init() {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Debug);
        }
    }

    /// Whether any record so far contains `fragment`. Tests run in parallel and share the
    /// logger, so only ever check for messages the calling test is sure to produce.
    ///
    pub fn logged(fragment: &str) -> bool {
        RECORDS
            .lock()
            .map(|records| records.iter().any(|line| line.contains(fragment)))
            .unwrap_or(false)
    }
}
