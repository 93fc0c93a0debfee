// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CSV output to standard output or a new file

use crate::constants::STDOUT_SINK;
use crate::error::{KjError, Result};
use crate::types::JobRow;
use csv::WriterBuilder;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Where the CSV rows go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    /// A file that must not exist yet
    File(PathBuf),
}

impl Sink {
    pub fn from_token(token: &str) -> Self {
        if token == STDOUT_SINK {
            Sink::Stdout
        } else {
            Sink::File(PathBuf::from(token))
        }
    }

    /// Write all rows in one pass. Files are created fresh and never overwritten.
    pub fn write(&self, rows: &[JobRow]) -> Result<()> {
        self.write_with(rows, || io::stdout().lock())
    }

    /// Like [`Sink::write`], with `stdout` supplying the writer for [`Sink::Stdout`]
    #[instrument(skip(rows, stdout), fields(rows = rows.len()))]
    pub fn write_with<W, F>(&self, rows: &[JobRow], stdout: F) -> Result<()>
    where
        W: Write,
        F: FnOnce() -> W,
    {
        match self {
            Sink::Stdout => write_rows(stdout(), rows),
            Sink::File(path) => {
                let file = create_output_file(path)?;
                write_rows(file, rows)?;
                debug!("Wrote {} rows to {}", rows.len(), path.display());
                Ok(())
            }
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => f.write_str(STDOUT_SINK),
            Sink::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn create_output_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => KjError::OutputExists(path.to_path_buf()),
            _ => KjError::Io(e),
        })
}

/// Serialize rows as headerless CSV and flush the writer
pub fn write_rows<W: Write>(writer: W, rows: &[JobRow]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    for row in rows {
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}
