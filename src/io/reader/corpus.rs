/*! Corpus reader

[CorpusReader] holds a path and [ReaderOptions]. Each call to [CorpusReader::iter]
opens the file again and returns a fresh [Records] iterator, so a corpus can be
read any number of times.
!*/
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{debug, info};

use super::ReaderOptions;
use crate::datum::{check_header, Datum};
use crate::error::Error;

#[derive(Debug, Clone)]
pub struct CorpusReader {
    path: PathBuf,
    options: ReaderOptions,
}

impl CorpusReader {
    /// Reader with default options (see [ReaderOptions::default]).
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_options(path, ReaderOptions::default())
    }

    pub fn with_options<P: AsRef<Path>>(path: P, options: ReaderOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Open the file and start a new pass over its records.
    ///
    /// Fails if the file can't be opened or if its header is not the expected one.
    pub fn iter(&self) -> Result<Records<File>, Error> {
        debug!("opening {:?}", self.path);
        let f = File::open(&self.path)?;
        Records::from_reader(f, self.options)
    }
}

/// Lazy sequence of the records of one pass.
///
/// Yields one `Result<Datum, Error>` per row, and `None` at the end of input.
/// A malformed row yields an error and does not stop the pass.
pub struct Records<R: Read> {
    records: csv::StringRecordsIntoIter<DecodeReaderBytes<R, Vec<u8>>>,
    progress: Option<ProgressBar>,
    progress_every: u64,
    count: u64,
    done: bool,
}

impl<R: Read> Records<R> {
    /// Read records from any source, the header row included.
    pub fn from_reader(src: R, options: ReaderOptions) -> Result<Self, Error> {
        let decoded = DecodeReaderBytesBuilder::new()
            .encoding(Some(options.encoding))
            .bom_override(true)
            .build(src);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(true)
            // row widths are checked when building each Datum
            .flexible(true)
            .from_reader(decoded);

        check_header(reader.headers()?.iter()).map_err(Error::Header)?;

        let progress = options.display_progress.then(|| {
            let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
            pb.set_style(
                ProgressStyle::with_template("{spinner} row {pos} ({per_sec})")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb
        });

        Ok(Self {
            records: reader.into_records(),
            progress,
            progress_every: options.progress_every.max(1),
            count: 0,
            done: false,
        })
    }

    /// Rows read so far.
    pub fn rows_read(&self) -> u64 {
        self.count
    }

    fn finish(&mut self) {
        self.done = true;
        if let Some(pb) = self.progress.take() {
            pb.set_position(self.count);
            pb.finish();
        }
        info!("read {} records", self.count);
    }
}

impl<R: Read> Iterator for Records<R> {
    type Item = Result<Datum, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next() {
            Some(Ok(record)) => record,
            Some(Err(e)) => return Some(Err(e.into())),
            None => {
                if !self.done {
                    self.finish();
                }
                return None;
            }
        };

        self.count += 1;
        if let Some(pb) = &self.progress {
            if self.count % self.progress_every == 0 {
                pb.set_position(self.count);
            }
        }

        Some(Datum::from_record(&record))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::Records;
    use crate::datum::{Relation, FIELDS};
    use crate::error::Error;
    use crate::io::reader::ReaderOptions;

    fn header() -> String {
        FIELDS.join(",")
    }

    fn line(relation: &str, section: &str) -> String {
        let mut cells = vec![""; FIELDS.len()];
        cells[0] = relation;
        cells[1] = section;
        cells[2] = "3";
        cells.join(",")
    }

    fn quiet() -> ReaderOptions {
        ReaderOptions::default().display_progress(false)
    }

    #[test]
    fn reads_rows() {
        let src = format!(
            "{}\n{}\n{}\n",
            header(),
            line("Explicit", "0"),
            line("EntRel", "1")
        );
        let records: Vec<_> = Records::from_reader(Cursor::new(src), quiet())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].relation(), Relation::Explicit);
        assert_eq!(records[1].section(), 1);
        assert_eq!(records[1].line(), 3);
    }

    #[test]
    fn bad_header() {
        let src = format!("{}\n", header().replace("Conn1", "Connective1"));
        assert!(matches!(
            Records::from_reader(Cursor::new(src), quiet()),
            Err(Error::Header(_))
        ));
    }

    #[test]
    fn wrong_width_keeps_going() {
        let src = format!(
            "{}\n{}\nExplicit,0,3\n{}\n",
            header(),
            line("Explicit", "0"),
            line("Implicit", "2")
        );
        let results: Vec<_> = Records::from_reader(Cursor::new(src), quiet())
            .unwrap()
            .collect();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        match &results[1] {
            Err(Error::Format { line, .. }) => assert_eq!(*line, 3),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(results[2].as_ref().unwrap().relation(), Relation::Implicit);
    }

    #[test]
    fn latin1() {
        let mut cells = vec![""; FIELDS.len()];
        cells[0] = "Explicit";
        cells[1] = "0";
        cells[2] = "3";
        cells[9] = "apr\u{e8}s";
        let row = cells.join(",");
        let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(&row);

        let mut src = format!("{}\n", header()).into_bytes();
        src.extend_from_slice(&bytes);
        src.push(b'\n');

        let opts = quiet().encoding_label("latin1").unwrap();
        let records: Vec<_> = Records::from_reader(Cursor::new(src), opts)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].conn_head(), Some("apr\u{e8}s"));
    }

    #[test]
    fn utf16_bom_overrides_encoding() {
        let text = format!("{}\n{}\n", header(), line("AltLex", "4"));
        let mut src = vec![0xFF, 0xFE];
        for unit in text.encode_utf16() {
            src.extend_from_slice(&unit.to_le_bytes());
        }

        let records: Vec<_> = Records::from_reader(Cursor::new(src), quiet())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].relation(), Relation::AltLex);
        assert_eq!(records[0].section(), 4);
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let mut src = vec![0xEF, 0xBB, 0xBF];
        src.extend_from_slice(format!("{}\n{}\n", header(), line("EntRel", "1")).as_bytes());
        let opts = quiet().encoding_label("latin1").unwrap();
        let records: Vec<_> = Records::from_reader(Cursor::new(src), opts)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records[0].relation(), Relation::EntRel);
    }

    #[test]
    fn empty_corpus() {
        let mut records = Records::from_reader(Cursor::new(format!("{}\n", header())), quiet()).unwrap();
        assert!(records.next().is_none());
        assert_eq!(records.rows_read(), 0);
    }
}
