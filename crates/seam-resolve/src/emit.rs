//! Dependency-ordered emission of resolved file contents.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::source;

/// Writes resolved files to an output destination.
///
/// Each file contributes its lines followed by one blank separator line;
/// there is no header or footer. An optional echo stream mirrors everything
/// written. Line endings are normalized to `\n`.
pub struct Emitter<W: Write> {
    out: W,
    echo: Option<Box<dyn Write>>,
}

impl Emitter<BufWriter<fs::File>> {
    /// Creates an emitter over `path`, truncating any previous contents.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = fs::File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self { out, echo: None }
    }

    /// Mirrors emitted text to `echo` as well.
    pub fn with_echo(mut self, echo: impl Write + 'static) -> Self {
        self.echo = Some(Box::new(echo));
        self
    }

    /// Emits one resolved file.
    ///
    /// A file that cannot be read is logged and skipped wholesale, separator
    /// included.
    pub fn emit(&mut self, path: &Path) -> io::Result<()> {
        let lines = match source::read_lines(path) {
            Ok(lines) => lines,
            Err(err) => {
                warn!("cannot emit '{}': {err}", path.display());
                return Ok(());
            }
        };
        for line in &lines {
            self.write_line(line)?;
        }
        self.write_line("")
    }

    /// Emits every path in order and flushes.
    pub fn emit_all(&mut self, order: &[PathBuf]) -> io::Result<()> {
        for path in order {
            self.emit(path)?;
        }
        self.finish()
    }

    /// Flushes the destination.
    pub fn finish(&mut self) -> io::Result<()> {
        self.out.flush()?;
        if let Some(echo) = &mut self.echo {
            echo.flush()?;
        }
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        if let Some(echo) = &mut self.echo {
            echo.write_all(line.as_bytes())?;
            echo.write_all(b"\n")?;
        }
        Ok(())
    }
}
