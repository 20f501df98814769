// Debug logging module for Hand Cricket
// Routes tracing output to a file when the --debug flag is given

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::SystemTime;

use tracing_subscriber::fmt;

/// Location of the debug log (`tail -f` it while playing)
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("handcricket-debug.log")
}

/// Initialize debug logging to file
///
/// # Arguments
/// * `enabled` - Whether debug logging should be enabled (controlled by --debug flag)
///
/// # Behavior
/// - If enabled=false: Returns immediately, no subscriber is installed and
///   every tracing macro is a no-op
/// - If enabled=true: Creates/truncates the log file, writes a header and
///   installs a global fmt subscriber writing to it. The terminal itself is
///   never written to, since ratatui owns it.
pub fn init(enabled: bool) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }

    let path = log_file_path();
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    writeln!(file, "=== Hand Cricket Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", path.display())?;
    writeln!(file, "========================================\n")?;

    let subscriber = fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
