// src/config/output.rs

use std::fs::File;
use std::io::{self, BufWriter, Write};

use tracing::debug;

use crate::config::model::OutputTarget;
use crate::errors::Result;

impl OutputTarget {
    /// Open the sink the serializer writes to.
    ///
    /// Files are created (or truncated). Both variants are buffered; the
    /// caller is expected to `flush` once serialization is done.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputTarget::Stdout => {
                debug!("writing DAG to stdout");
                Ok(Box::new(BufWriter::new(io::stdout().lock())))
            }
            OutputTarget::File(path) => {
                debug!(path = %path.display(), "writing DAG to file");
                let file = File::create(path)?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}
