//! Runtime settings for one ingestion run.

use std::path::PathBuf;
use std::time::Duration;

/// Default socket path, relative to the directory the ingestion server runs
/// from.
pub const DEFAULT_SOCKET_PATH: &str = "./uds_socket";

/// Send attempts allowed per collector payload, first attempt included.
pub const DEFAULT_RETRY_BUDGET: u32 = 3;

/// Default read/write timeout on the ingestion socket, in seconds.
pub const DEFAULT_IO_TIMEOUT_SECS: u64 = 30;

/// Settings the session driver needs for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Filesystem path of the ingestion server's listening socket.
    pub socket_path: PathBuf,
    /// Send attempts allowed per payload before it is dropped.
    pub retry_budget: u32,
    /// Read/write timeout applied to the socket. The wire protocol itself
    /// specifies no timeout; this is a hardening addition so a silent peer
    /// cannot wedge the run forever. A timed-out read surfaces as a fatal
    /// I/O error.
    pub io_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            socket_path: PathBuf::from(DEFAULT_SOCKET_PATH),
            retry_budget: DEFAULT_RETRY_BUDGET,
            io_timeout: Duration::from_secs(DEFAULT_IO_TIMEOUT_SECS),
        }
    }
}
