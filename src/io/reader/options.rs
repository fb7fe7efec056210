//! Reader options.
use encoding_rs::Encoding;

use crate::error::Error;

/// How a corpus file is decoded and read.
#[derive(Debug, Clone, Copy)]
pub struct ReaderOptions {
    /// Character set of the file. A UTF-8 or UTF-16 byte order mark, if present, wins.
    pub encoding: &'static Encoding,
    /// Print a row counter on stdout while reading.
    pub display_progress: bool,
    /// Rows between two counter updates.
    pub progress_every: u64,
    pub delimiter: u8,
}

impl Default for ReaderOptions {
    /// UTF-8, comma separated, progress shown every 1000 rows.
    fn default() -> Self {
        Self {
            encoding: encoding_rs::UTF_8,
            display_progress: true,
            progress_every: 1000,
            delimiter: b',',
        }
    }
}

impl ReaderOptions {
    /// Set the encoding from a WHATWG label (`utf-8`, `latin1`, `windows-1252`...).
    pub fn encoding_label(mut self, label: &str) -> Result<Self, Error> {
        self.encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| Error::UnknownEncoding(label.to_string()))?;
        Ok(self)
    }

    pub fn display_progress(mut self, display_progress: bool) -> Self {
        self.display_progress = display_progress;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::ReaderOptions;
    use crate::error::Error;

    #[test]
    fn labels() {
        let opts = ReaderOptions::default().encoding_label("latin1").unwrap();
        assert_eq!(opts.encoding, encoding_rs::WINDOWS_1252);
        assert!(matches!(
            ReaderOptions::default().encoding_label("klingon"),
            Err(Error::UnknownEncoding(_))
        ));
    }
}
