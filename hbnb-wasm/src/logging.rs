use std::io::{self, Write};

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};
use wasm_bindgen::JsValue;

/// Копит одну запись `fmt` и отдаёт её в `console.log`.
#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let line = String::from_utf8_lossy(&self.buf);
            web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
            self.buf.clear();
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

pub(crate) fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // В wasm32 нет системных часов, поэтому без времени.
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .without_time()
        .with_ansi(false)
        .with_writer(ConsoleWriter::default)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}
