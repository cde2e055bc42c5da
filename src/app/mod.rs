mod cli;
mod error;
mod file_handler;
mod logger;
mod menu;
mod orchestrator;

pub use cli::Cli;
pub use error::AppError;
pub use menu::Menu;
pub use orchestrator::run_app;

// Logging macros for the child modules of `app`. When expanded in a sibling
// module (e.g. app::menu), `super` resolves to `app`, so `super::logger` is
// the logger module declared above.
macro_rules! verbose_println {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_message_args(format_args!($($arg)*));
        }
    };
}

macro_rules! verbose_eprintln {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_error_args(format_args!($($arg)*));
        }
    };
}

use verbose_eprintln;
use verbose_println;
