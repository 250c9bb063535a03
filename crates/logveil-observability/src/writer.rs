//! A `MakeWriter` wrapper that masks formatted log lines
//!
//! Buffers bytes until a newline, then passes each complete line through the
//! masking engine before handing it to the inner sink. Masking stays
//! centralized here instead of at every log callsite.

use logveil_masking::MaskingEngine;
use std::io;
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;

/// Wraps an inner `MakeWriter`, masking each line it produces
pub struct MaskingMakeWriter<M> {
    engine: Arc<MaskingEngine>,
    inner: M,
}

impl<M> MaskingMakeWriter<M> {
    pub fn new(engine: Arc<MaskingEngine>, inner: M) -> Self {
        Self { engine, inner }
    }
}

impl<M: Clone> Clone for MaskingMakeWriter<M> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            inner: self.inner.clone(),
        }
    }
}

impl<'a, M> MakeWriter<'a> for MaskingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = MaskingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        MaskingWriter::new(Arc::clone(&self.engine), self.inner.make_writer())
    }
}

/// Line-buffering writer that masks before writing through
pub struct MaskingWriter<W: io::Write> {
    engine: Arc<MaskingEngine>,
    inner: W,
    buffer: Vec<u8>,
}

impl<W: io::Write> MaskingWriter<W> {
    pub fn new(engine: Arc<MaskingEngine>, inner: W) -> Self {
        Self {
            engine,
            inner,
            buffer: Vec::new(),
        }
    }

    fn flush_complete_lines(&mut self) -> io::Result<()> {
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            self.write_masked(&line)?;
        }
        Ok(())
    }

    fn write_masked(&mut self, raw: &[u8]) -> io::Result<()> {
        // Formatted log output is expected to be UTF-8; anything else is
        // passed through lossily rather than dropped.
        let line = String::from_utf8_lossy(raw);
        let masked = self.engine.mask(&line);
        self.inner.write_all(masked.as_bytes())
    }
}

impl<W: io::Write> io::Write for MaskingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        self.flush_complete_lines()?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_complete_lines()?;
        if !self.buffer.is_empty() {
            let rest: Vec<u8> = std::mem::take(&mut self.buffer);
            self.write_masked(&rest)?;
        }
        self.inner.flush()
    }
}

impl<W: io::Write> Drop for MaskingWriter<W> {
    fn drop(&mut self) {
        // A trailing partial line must still go out masked; errors have
        // nowhere to go here.
        let _ = io::Write::flush(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl SharedSink {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for SharedSink {
        type Writer = SharedSink;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn engine() -> Arc<MaskingEngine> {
        Arc::new(MaskingEngine::with_defaults())
    }

    #[test]
    fn masks_complete_lines() {
        let sink = SharedSink::default();
        let mut writer = MaskingWriter::new(engine(), sink.clone());

        writer.write_all(b"request phone=010-1234-5678 done\n").unwrap();

        assert_eq!(sink.contents(), "request phone=010-****-5678 done\n");
    }

    #[test]
    fn buffers_until_newline() {
        let sink = SharedSink::default();
        let mut writer = MaskingWriter::new(engine(), sink.clone());

        writer.write_all(b"phone=010-").unwrap();
        assert_eq!(sink.contents(), "");

        writer.write_all(b"1234-5678\n").unwrap();
        assert_eq!(sink.contents(), "phone=010-****-5678\n");
    }

    #[test]
    fn flush_masks_partial_trailing_line() {
        let sink = SharedSink::default();
        let mut writer = MaskingWriter::new(engine(), sink.clone());

        writer.write_all(b"pwd=secret").unwrap();
        writer.flush().unwrap();

        assert_eq!(sink.contents(), "pwd=<REDACTED>");
    }

    #[test]
    fn multiple_lines_in_one_write() {
        let sink = SharedSink::default();
        let mut writer = MaskingWriter::new(engine(), sink.clone());

        writer
            .write_all(b"phone=010-1234-5678\nlevel=INFO msg=ok\n")
            .unwrap();

        assert_eq!(
            sink.contents(),
            "phone=010-****-5678\nlevel=INFO msg=ok\n"
        );
    }

    #[test]
    fn make_writer_produces_masking_writers() {
        let sink = SharedSink::default();
        let make = MaskingMakeWriter::new(engine(), sink.clone());

        let mut writer = make.make_writer();
        writer.write_all(b"card=1234-5678-1234-5678\n").unwrap();

        assert_eq!(sink.contents(), "card=1234-56**-****-5678\n");
    }

    #[test]
    fn subscriber_output_is_masked() {
        let sink = SharedSink::default();
        let subscriber = tracing_subscriber::fmt()
            .without_time()
            .with_ansi(false)
            .with_writer(MaskingMakeWriter::new(engine(), sink.clone()))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("login phone=010-1234-5678");
        });

        let output = sink.contents();
        assert!(output.contains("phone=010-****-5678"), "got: {output}");
        assert!(!output.contains("010-1234-5678"));
    }
}
