use once_cell::sync::Lazy;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;
use std::sync::Mutex;

// Global verbose log. `None` until initialised, in which case messages are dropped.
static LOGGER: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

/// Points the global logger at `log_file_path`, truncating any previous run's log.
pub fn init_global_logger(log_file_path: &Path) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file_path)?;
    let writer = BufWriter::new(file);
    match LOGGER.lock() {
        Ok(mut logger_guard) => *logger_guard = Some(writer),
        Err(poisoned) => *poisoned.into_inner() = Some(writer),
    }
    Ok(())
}

/// Writes one verbose line to the global logger.
pub fn log_verbose_message_args(args: fmt::Arguments<'_>) {
    write_line("", args);
}

/// Writes one verbose line prefixed with `ERROR: ` to the global logger.
pub fn log_verbose_error_args(args: fmt::Arguments<'_>) {
    write_line("ERROR: ", args);
}

/// Flushes buffered log lines to disk. A no-op when the logger is not set up.
pub fn flush_global_logger() -> Result<(), IoError> {
    match LOGGER.lock() {
        Ok(mut logger_guard) => match logger_guard.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        },
        Err(_) => Ok(()),
    }
}

fn write_line(prefix: &str, args: fmt::Arguments<'_>) {
    if let Ok(mut logger_guard) = LOGGER.lock() {
        if let Some(writer) = logger_guard.as_mut() {
            if writeln!(writer, "{}{}", prefix, args).is_err() {
                eprintln!("Fallback (log write failed) {}{}", prefix, args);
            }
        }
    } else {
        eprintln!("Fallback (logger mutex error) {}{}", prefix, args);
    }
}
