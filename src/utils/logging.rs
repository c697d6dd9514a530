use anyhow::Context;
use tracing::Subscriber;
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};

/// Builds the stderr-style fmt subscriber. `ansi` turns escape codes on or off.
pub fn build_subscriber<W>(level: &str, ansi: bool, writer: W) -> anyhow::Result<impl Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(level).with_context(|| format!("Invalid log level '{}'", level))?;

    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_writer(writer)
        .finish())
}

/// Installs the process-wide subscriber writing to stderr.
pub fn init(level: &str, ansi: bool) -> anyhow::Result<()> {
    let subscriber = build_subscriber(level, ansi, std::io::stderr)?;
    tracing::subscriber::set_global_default(subscriber).context("Failed to install log subscriber")
}

#[cfg(test)]
pub(crate) mod capture {
    use std::io;
    use std::sync::{Arc, Mutex};

    /// In-memory log sink for asserting on formatted output.
    #[derive(Clone, Default)]
    pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
