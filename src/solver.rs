//! Framing of model dumps in the solver's textual output.
//!
//! After a [`SolverCommand::GetModel`](crate::protocol::SolverCommand::GetModel) request the
//! solver prints the satisfying model between a line reading [`MODEL_START`] and a line
//! reading [`MODEL_END`]. Everything outside those markers belongs to other responses.
//!
//! - [`split_model`] extracts the first model from an already buffered response.
//! - [`ModelReader`] pulls models one by one from a live line-oriented stream.
//!
//! # Examples
//!
//! ```rust
//! use pathflip::solver::{split_model, ModelReader};
//!
//! let response = "sat\nmodel_start\nX = 1\nY = [2]\nmodel_end\n";
//! assert_eq!(split_model(response)?, Some("X = 1\nY = [2]"));
//!
//! let mut reader = ModelReader::new(response.as_bytes());
//! assert_eq!(reader.next_model()?, Some(vec!["X = 1".to_string(), "Y = [2]".to_string()]));
//! assert_eq!(reader.next_model()?, None);
//! # Ok::<(), pathflip::Error>(())
//! ```

use std::io::BufRead;

use crate::{
    protocol::{MODEL_END, MODEL_START},
    Error::MissingDelimiter,
    Result,
};

fn is_line_break(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// Extract the first model block from `response`.
///
/// Marker lines are matched after trimming surrounding whitespace. The returned payload is
/// the text strictly between the two marker lines, minus the terminator of its last line.
/// Blank model lines are kept at both ends, so the payload splits into the same lines that
/// [`ModelReader::next_model`] yields.
///
/// # Errors
/// Returns [`crate::Error::MissingDelimiter`] with [`MODEL_END`] if a block is opened but
/// never closed, and with [`MODEL_START`] if an end marker appears before any start marker.
pub fn split_model(response: &str) -> Result<Option<&str>> {
    let mut start = None;
    let mut offset = 0;

    for line in response.split_inclusive('\n') {
        let next = offset + line.len();
        match (start, line.trim()) {
            (None, MODEL_START) => start = Some(next),
            (None, MODEL_END) => return Err(MissingDelimiter(MODEL_START)),
            (Some(begin), MODEL_END) => {
                let body = &response[begin..offset];
                let body = body
                    .strip_suffix("\r\n")
                    .or_else(|| body.strip_suffix('\n'))
                    .unwrap_or(body);
                return Ok(Some(body));
            }
            _ => {}
        }
        offset = next;
    }

    match start {
        Some(_) => Err(MissingDelimiter(MODEL_END)),
        None => Ok(None),
    }
}

/// Reads successive model blocks from a line-oriented solver output stream.
pub struct ModelReader<R> {
    reader: R,
    line: String,
    lines_read: usize,
}

impl<R: BufRead> ModelReader<R> {
    /// Wrap a buffered reader positioned at a line boundary.
    pub fn new(reader: R) -> Self {
        ModelReader {
            reader,
            line: String::new(),
            lines_read: 0,
        }
    }

    /// Number of lines consumed so far.
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Skip to the next [`MODEL_START`] line and collect the lines up to [`MODEL_END`].
    ///
    /// Returns `Ok(None)` on a clean end of stream outside a model.
    ///
    /// # Errors
    /// Returns [`crate::Error::MissingDelimiter`] if the stream ends inside a model or an
    /// end marker appears outside one, and [`crate::Error::FileError`] on I/O failure.
    pub fn next_model(&mut self) -> Result<Option<Vec<String>>> {
        let mut lines = Vec::new();
        let mut in_model = false;

        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                if in_model {
                    return Err(MissingDelimiter(MODEL_END));
                }
                return Ok(None);
            }
            self.lines_read += 1;

            let content = self.line.trim_end_matches(is_line_break);
            match (in_model, content.trim()) {
                (false, MODEL_START) => in_model = true,
                (false, MODEL_END) => return Err(MissingDelimiter(MODEL_START)),
                (false, _) => log::trace!("Skipping solver line {}", self.lines_read),
                (true, MODEL_END) => {
                    log::debug!("Read model ending at line {}", self.lines_read);
                    return Ok(Some(lines));
                }
                (true, _) => lines.push(content.to_string()),
            }
        }
    }

    /// Give back the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn no_model() {
        assert_eq!(split_model("").unwrap(), None);
        assert_eq!(split_model("unsat\n").unwrap(), None);
    }

    #[test]
    fn empty_model() {
        assert_eq!(split_model("model_start\nmodel_end\n").unwrap(), Some(""));
    }

    #[test]
    fn crlf_and_surrounding_text() {
        let response = "sat\r\nmodel_start\r\nA = 1\r\nmodel_end\r\ntrailing\r\n";
        assert_eq!(split_model(response).unwrap(), Some("A = 1"));
    }

    #[test]
    fn first_model_only() {
        let response = "model_start\nA\nmodel_end\nmodel_start\nB\nmodel_end";
        assert_eq!(split_model(response).unwrap(), Some("A"));
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(
            split_model("model_start\n\nX\n\nmodel_end\n").unwrap(),
            Some("\nX\n")
        );
        assert_eq!(split_model("model_start\n\nmodel_end").unwrap(), Some(""));
    }

    #[test]
    fn split_and_reader_agree() {
        for response in [
            "model_start\n\nX = 1\n\nmodel_end\n",
            "sat\r\nmodel_start\r\n\r\nA\r\nB\r\n\r\nmodel_end\r\n",
            "model_start\nonly\nmodel_end",
        ] {
            let body = split_model(response).unwrap().unwrap();
            let split: Vec<String> = body
                .split('\n')
                .map(|line| line.trim_end_matches('\r').to_string())
                .collect();

            let mut reader = ModelReader::new(response.as_bytes());
            assert_eq!(reader.next_model().unwrap(), Some(split), "{response:?}");
        }
    }

    #[test]
    fn unbalanced() {
        assert!(matches!(
            split_model("model_start\nA = 1\n"),
            Err(Error::MissingDelimiter(MODEL_END))
        ));
        assert!(matches!(
            split_model("A = 1\nmodel_end\n"),
            Err(Error::MissingDelimiter(MODEL_START))
        ));
    }

    #[test]
    fn reader_multiple_models() {
        let stream = "noise\nmodel_start\nA\nB\nmodel_end\nmodel_start\nC\nmodel_end\n";
        let mut reader = ModelReader::new(stream.as_bytes());

        assert_eq!(
            reader.next_model().unwrap(),
            Some(vec!["A".to_string(), "B".to_string()])
        );
        assert_eq!(reader.next_model().unwrap(), Some(vec!["C".to_string()]));
        assert_eq!(reader.next_model().unwrap(), None);
        assert_eq!(reader.lines_read(), 8);
    }

    #[test]
    fn reader_truncated() {
        let mut reader = ModelReader::new("model_start\nA\n".as_bytes());
        assert!(matches!(
            reader.next_model(),
            Err(Error::MissingDelimiter(MODEL_END))
        ));
    }

    #[test]
    fn reader_stray_end() {
        let mut reader = ModelReader::new("model_end\n".as_bytes());
        assert!(matches!(
            reader.next_model(),
            Err(Error::MissingDelimiter(MODEL_START))
        ));
    }
}
