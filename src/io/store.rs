//! Line-oriented record store over a single file
//!
//! A [`LineRecordStore`] binds to one file in one [`Mode`] at a time. In read
//! mode every call to [`read_record`](LineRecordStore::read_record) consumes
//! one line and splits it into a [`Record`]; in write mode every call to
//! [`write`](LineRecordStore::write) joins fields into one line.
//!
//! The handle lives inside the store's state tag, so an operation in the
//! wrong state is rejected with [`TabStoreError::Usage`] instead of touching a
//! handle that is not there.

use crate::core::record::{first_unescapable, join_fields};
use crate::core::{IntoMode, Mode, Record};
use crate::error::{Result, StoreState, TabStoreError};
use crate::io::config::StoreConfig;
use log::{debug, trace, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, IntoInnerError, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

enum Inner {
    Unopened,
    Reading {
        path: PathBuf,
        reader: BufReader<File>,
        line_number: usize,
    },
    Writing {
        path: PathBuf,
        sink: LineSink,
    },
    Closed,
}

impl Inner {
    fn state(&self) -> StoreState {
        match self {
            Self::Unopened => StoreState::Unopened,
            Self::Reading { .. } => StoreState::OpenedRead,
            Self::Writing { .. } => StoreState::OpenedWrite,
            Self::Closed => StoreState::Closed,
        }
    }
}

/// Destination of written lines
enum LineSink {
    Direct(BufWriter<File>),
    Atomic {
        writer: BufWriter<NamedTempFile>,
        target: PathBuf,
    },
}

impl LineSink {
    fn create(path: &Path, config: &StoreConfig) -> Result<Self> {
        if config.atomic_writes {
            let parent_dir = match path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir,
                _ => Path::new("."),
            };
            let temp_file =
                NamedTempFile::new_in(parent_dir).map_err(|e| TabStoreError::from_io(e, path))?;
            Ok(Self::Atomic {
                writer: buffered_writer(temp_file, config.buffer_capacity),
                target: path.to_path_buf(),
            })
        } else {
            let file = File::create(path).map_err(|e| TabStoreError::from_io(e, path))?;
            Ok(Self::Direct(buffered_writer(file, config.buffer_capacity)))
        }
    }

    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        match self {
            Self::Direct(writer) => writer.write_all(line.as_bytes()),
            Self::Atomic { writer, .. } => writer.write_all(line.as_bytes()),
        }
    }

    /// Flush buffered lines and, for atomic writes, replace the target
    fn finish(self) -> Result<()> {
        match self {
            Self::Direct(writer) => {
                writer.into_inner().map_err(IntoInnerError::into_error)?;
                Ok(())
            }
            Self::Atomic { writer, target } => {
                let temp_file = writer.into_inner().map_err(IntoInnerError::into_error)?;
                temp_file
                    .persist(&target)
                    .map_err(|e| TabStoreError::from_io(e.error, &target))?;
                Ok(())
            }
        }
    }
}

fn buffered_writer<W: Write>(inner: W, capacity: Option<usize>) -> BufWriter<W> {
    match capacity {
        Some(capacity) => BufWriter::with_capacity(capacity, inner),
        None => BufWriter::new(inner),
    }
}

fn buffered_reader(file: File, capacity: Option<usize>) -> BufReader<File> {
    match capacity {
        Some(capacity) => BufReader::with_capacity(capacity, file),
        None => BufReader::new(file),
    }
}

/// Reads or writes tab-separated records, one line at a time
pub struct LineRecordStore {
    config: StoreConfig,
    inner: Inner,
}

impl LineRecordStore {
    /// Create an unopened store with default configuration
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an unopened store with custom configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            inner: Inner::Unopened,
        }
    }

    /// Bind the store to `path` in the given mode.
    ///
    /// The mode is checked before anything else, so an absent or unknown
    /// mode fails with [`TabStoreError::InvalidMode`] without touching the
    /// file system. The same holds for a configuration rejected by
    /// [`StoreConfig::validate`]. If the store is already open, the current
    /// handle is closed first and any error from that close is returned.
    pub fn open<P: AsRef<Path>, M: IntoMode>(&mut self, path: P, mode: M) -> Result<()> {
        let mode = mode.into_mode()?;
        self.config.validate()?;
        let path = path.as_ref();

        if self.is_open() {
            debug!(
                "Reopening store: releasing {} before opening {}",
                self.path().map(|p| p.display().to_string()).unwrap_or_default(),
                path.display()
            );
            self.close()?;
        }

        self.inner = match mode {
            Mode::Read => {
                let file = File::open(path).map_err(|e| TabStoreError::from_io(e, path))?;
                Inner::Reading {
                    path: path.to_path_buf(),
                    reader: buffered_reader(file, self.config.buffer_capacity),
                    line_number: 0,
                }
            }
            Mode::Write => Inner::Writing {
                path: path.to_path_buf(),
                sink: LineSink::create(path, &self.config)?,
            },
        };

        debug!("Opened {} for {}", path.display(), mode);
        Ok(())
    }

    /// Write one record as a line.
    ///
    /// Fields are joined with a tab and the configured line terminator is
    /// appended. The line is written with a single call, so a failure never
    /// leaves part of the fields behind in the buffer. An empty field list is
    /// rejected with [`TabStoreError::EmptyRecord`]: its line would read back
    /// as one empty field.
    pub fn write<I, S>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let state = self.state();
        let sink = match &mut self.inner {
            Inner::Writing { sink, .. } => sink,
            _ => return Err(TabStoreError::usage("write", state)),
        };

        let fields: Vec<S> = fields.into_iter().collect();
        if fields.is_empty() {
            return Err(TabStoreError::EmptyRecord);
        }
        if self.config.validate_fields {
            if let Some(index) = first_unescapable(&fields) {
                return Err(TabStoreError::invalid_field(
                    index,
                    "field contains a tab or line terminator",
                ));
            }
        }

        let mut line = join_fields(&fields);
        line.push_str(self.config.line_endings.terminator());
        sink.write_line(&line)?;

        trace!("Wrote record with {} fields", fields.len());
        Ok(())
    }

    /// Read the next line as a record.
    ///
    /// Returns `Ok(None)` once the file is exhausted. An empty line is a
    /// record holding one empty field. One trailing `\n`, `\r\n` or `\r`
    /// is stripped, also on a last line without newline.
    ///
    /// A line that is not valid UTF-8 fails with
    /// [`TabStoreError::InvalidEncoding`] naming its line number. That line is
    /// consumed; the next call continues with the following line.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        let state = self.state();
        let (path, reader, line_number) = match &mut self.inner {
            Inner::Reading {
                path,
                reader,
                line_number,
            } => (path, reader, line_number),
            _ => return Err(TabStoreError::usage("read", state)),
        };

        let mut bytes = Vec::new();
        if reader.read_until(b'\n', &mut bytes)? == 0 {
            trace!("Reached end of file");
            return Ok(None);
        }
        *line_number += 1;

        if bytes.last() == Some(&b'\n') {
            bytes.pop();
        }
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let line = String::from_utf8(bytes).map_err(|_| TabStoreError::InvalidEncoding {
            path: path.clone(),
            line: *line_number,
        })?;

        let record = Record::parse_line(&line);
        trace!("Read record with {} fields", record.len());
        Ok(Some(record))
    }

    /// Read the next line as exactly `width` slots.
    ///
    /// Extra fields are dropped and missing ones are `None`.
    pub fn read_record_with_width(&mut self, width: usize) -> Result<Option<Vec<Option<String>>>> {
        Ok(self.read_record()?.map(|record| record.into_width(width)))
    }

    /// Iterate over the remaining records until the file is exhausted
    pub fn records(&mut self) -> Records<'_> {
        Records {
            store: self,
            done: false,
        }
    }

    /// Release the current handle.
    ///
    /// Closing an unopened or already closed store does nothing. A writer is
    /// flushed (and an atomic temp file persisted); if that fails the handle
    /// is still released and the store ends up closed.
    pub fn close(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.inner, Inner::Closed) {
            Inner::Unopened => {
                self.inner = Inner::Unopened;
                Ok(())
            }
            Inner::Closed => Ok(()),
            Inner::Reading { path, reader, .. } => {
                drop(reader);
                debug!("Closed {} after reading", path.display());
                Ok(())
            }
            Inner::Writing { path, sink } => {
                sink.finish()?;
                debug!("Closed {} after writing", path.display());
                Ok(())
            }
        }
    }

    pub fn state(&self) -> StoreState {
        self.inner.state()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.inner, Inner::Reading { .. } | Inner::Writing { .. })
    }

    /// Mode of the currently open handle
    pub fn mode(&self) -> Option<Mode> {
        match self.inner {
            Inner::Reading { .. } => Some(Mode::Read),
            Inner::Writing { .. } => Some(Mode::Write),
            _ => None,
        }
    }

    /// Path of the currently open file
    pub fn path(&self) -> Option<&Path> {
        match &self.inner {
            Inner::Reading { path, .. } | Inner::Writing { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl Default for LineRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LineRecordStore {
    fn drop(&mut self) {
        if self.is_open() {
            if let Err(e) = self.close() {
                warn!("Failed to close store on drop: {}", e);
            }
        }
    }
}

/// Iterator returned by [`LineRecordStore::records`]
pub struct Records<'a> {
    store: &'a mut LineRecordStore,
    done: bool,
}

impl Iterator for Records<'_> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.store.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Convenience functions for bounded sequences of operations
pub mod convenience {
    use super::*;

    /// Open a store, run `f` against it, and close it on every exit path.
    ///
    /// If `f` fails, its error wins and a close failure is only logged.
    pub fn with_store<P, M, T, F>(path: P, mode: M, f: F) -> Result<T>
    where
        P: AsRef<Path>,
        M: IntoMode,
        F: FnOnce(&mut LineRecordStore) -> Result<T>,
    {
        with_store_config(path, mode, StoreConfig::default(), f)
    }

    /// Same as [`with_store`] with a custom configuration
    pub fn with_store_config<P, M, T, F>(path: P, mode: M, config: StoreConfig, f: F) -> Result<T>
    where
        P: AsRef<Path>,
        M: IntoMode,
        F: FnOnce(&mut LineRecordStore) -> Result<T>,
    {
        let mut store = LineRecordStore::with_config(config);
        store.open(path, mode)?;

        let result = f(&mut store);
        let closed = store.close();
        match (result, closed) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(e)) | (Err(e), Ok(())) => Err(e),
            (Err(e), Err(close_err)) => {
                warn!("Failed to close store after error: {}", close_err);
                Err(e)
            }
        }
    }

    /// Read every record of a file
    pub fn read_all<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
        with_store(path, Mode::Read, |store| store.records().collect())
    }

    /// Create or truncate a file and write every record to it
    pub fn write_all<P, I, R, S>(path: P, records: I) -> Result<()>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        with_store(path, Mode::Write, |store| {
            for record in records {
                store.write(record)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::convenience::*;
    use super::*;
    use crate::io::config::LineEndings;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn unix_config() -> StoreConfig {
        StoreConfig {
            line_endings: LineEndings::Unix,
            ..Default::default()
        }
    }

    fn fields(record: Option<Record>) -> Vec<String> {
        record.expect("expected a record").into_fields()
    }

    #[test]
    fn test_write_then_read_back() {
        init_logging();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.tsv");

        let mut store = LineRecordStore::with_config(unix_config());
        store.open(&path, Mode::Write).unwrap();
        store.write(["hello", "world"]).unwrap();
        store.write(vec!["a".to_string(), "b".to_string(), "c".to_string()])
            .unwrap();
        store.close().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\tworld\na\tb\tc\n");

        store.open(&path, Mode::Read).unwrap();
        assert_eq!(fields(store.read_record().unwrap()), vec!["hello", "world"]);
        assert_eq!(fields(store.read_record().unwrap()), vec!["a", "b", "c"]);
        assert_eq!(store.read_record().unwrap(), None);
        store.close().unwrap();
    }

    #[test]
    fn test_empty_line_and_empty_edges() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("edges.tsv");
        fs::write(&path, "\n\tmiddle\t\nlast").unwrap();

        let mut store = LineRecordStore::new();
        store.open(&path, Mode::Read).unwrap();
        assert_eq!(fields(store.read_record().unwrap()), vec![""]);
        assert_eq!(fields(store.read_record().unwrap()), vec!["", "middle", ""]);
        assert_eq!(fields(store.read_record().unwrap()), vec!["last"]);
        assert!(store.read_record().unwrap().is_none());
        assert!(store.read_record().unwrap().is_none());
    }

    #[test]
    fn test_carriage_return_stripped_on_last_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cr.tsv");
        fs::write(&path, "a\tb\r\nc\r").unwrap();

        let records = read_all(&path).unwrap();
        assert_eq!(
            records,
            vec![Record::from(vec!["a", "b"]), Record::from(vec!["c"])]
        );
    }

    #[test]
    fn test_invalid_utf8_reports_line_and_continues() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.tsv");
        fs::write(&path, b"ok\tfine\ncaf\xe9\tbad\nafter\n").unwrap();

        let mut store = LineRecordStore::new();
        store.open(&path, Mode::Read).unwrap();
        assert_eq!(fields(store.read_record().unwrap()), vec!["ok", "fine"]);

        match store.read_record() {
            Err(TabStoreError::InvalidEncoding { path: reported, line }) => {
                assert_eq!(reported, path);
                assert_eq!(line, 2);
            }
            other => panic!("expected InvalidEncoding, got {other:?}"),
        }

        assert_eq!(fields(store.read_record().unwrap()), vec!["after"]);
        assert!(store.read_record().unwrap().is_none());
    }

    #[test]
    fn test_zero_buffer_capacity_rejected_on_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zero.tsv");
        fs::write(&path, "hello\tworld\n").unwrap();

        let config = StoreConfig {
            buffer_capacity: Some(0),
            ..Default::default()
        };
        let mut store = LineRecordStore::with_config(config);
        let err = store.open(&path, Mode::Read).unwrap_err();
        assert!(matches!(err, TabStoreError::InvalidConfig { .. }));
        assert!(!store.is_open());
    }

    #[test]
    fn test_small_buffer_reads_whole_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("small.tsv");
        fs::write(&path, "hello\tworld\nbye\n").unwrap();

        let mut store = LineRecordStore::with_config(StoreConfig {
            buffer_capacity: Some(1),
            ..Default::default()
        });
        store.open(&path, Mode::Read).unwrap();
        assert_eq!(fields(store.read_record().unwrap()), vec!["hello", "world"]);
        assert_eq!(fields(store.read_record().unwrap()), vec!["bye"]);
        assert!(store.read_record().unwrap().is_none());
    }

    #[test]
    fn test_empty_field_list_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty_record.tsv");

        let mut store = LineRecordStore::with_config(unix_config());
        store.open(&path, Mode::Write).unwrap();
        let err = store.write(Vec::<&str>::new()).unwrap_err();
        assert!(matches!(err, TabStoreError::EmptyRecord));
        store.write([""]).unwrap();
        store.close().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "\n");
        assert_eq!(read_all(&path).unwrap(), vec![Record::from(vec![""])]);
    }

    #[test]
    fn test_reads_crlf_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("crlf.tsv");
        fs::write(&path, "a\tb\r\nc\r\n").unwrap();

        let records = read_all(&path).unwrap();
        assert_eq!(
            records,
            vec![Record::from(vec!["a", "b"]), Record::from(vec!["c"])]
        );
    }

    #[test]
    fn test_windows_line_endings_on_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("windows.tsv");
        let config = StoreConfig {
            line_endings: LineEndings::Windows,
            ..Default::default()
        };

        with_store_config(&path, Mode::Write, config, |store| store.write(["x", "y"])).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "x\ty\r\n");
    }

    #[test]
    fn test_read_with_width() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("width.tsv");
        fs::write(&path, "hello\tworld\tbye\nhello\tworld\tbye\n").unwrap();

        let mut store = LineRecordStore::new();
        store.open(&path, Mode::Read).unwrap();

        let wide = store.read_record_with_width(4).unwrap().unwrap();
        assert_eq!(wide.len(), 4);
        assert_eq!(wide[0].as_deref(), Some("hello"));
        assert_eq!(wide[2].as_deref(), Some("bye"));
        assert_eq!(wide[3], None);

        let narrow = store.read_record_with_width(1).unwrap().unwrap();
        assert_eq!(narrow, vec![Some("hello".to_string())]);

        assert_eq!(store.read_record_with_width(2).unwrap(), None);
    }

    #[test]
    fn test_usage_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("usage.tsv");
        fs::write(&path, "a\n").unwrap();

        let mut store = LineRecordStore::new();
        assert!(matches!(
            store.read_record(),
            Err(TabStoreError::Usage {
                state: StoreState::Unopened,
                ..
            })
        ));
        assert!(matches!(store.write(["a"]), Err(TabStoreError::Usage { .. })));

        store.open(&path, Mode::Read).unwrap();
        assert!(matches!(
            store.write(["a"]),
            Err(TabStoreError::Usage {
                operation: "write",
                state: StoreState::OpenedRead
            })
        ));
        store.close().unwrap();

        assert!(matches!(
            store.read_record(),
            Err(TabStoreError::Usage {
                state: StoreState::Closed,
                ..
            })
        ));

        store.open(&path, Mode::Write).unwrap();
        assert!(matches!(
            store.read_record(),
            Err(TabStoreError::Usage {
                operation: "read",
                state: StoreState::OpenedWrite
            })
        ));
    }

    #[test]
    fn test_close_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("close.tsv");

        let mut never_opened = LineRecordStore::new();
        never_opened.close().unwrap();
        never_opened.close().unwrap();
        assert_eq!(never_opened.state(), StoreState::Unopened);

        let mut store = LineRecordStore::new();
        store.open(&path, Mode::Write).unwrap();
        store.close().unwrap();
        store.close().unwrap();
        assert_eq!(store.state(), StoreState::Closed);
        assert_eq!(store.path(), None);
    }

    #[test]
    fn test_reopen_releases_prior_handle() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.tsv");
        let second = dir.path().join("second.tsv");

        let mut store = LineRecordStore::with_config(unix_config());
        store.open(&first, Mode::Write).unwrap();
        store.write(["buffered"]).unwrap();

        // Reopening flushes the pending line to the first file.
        store.open(&second, Mode::Write).unwrap();
        assert_eq!(fs::read_to_string(&first).unwrap(), "buffered\n");
        assert_eq!(store.path(), Some(second.as_path()));

        store.open(&first, Mode::Read).unwrap();
        assert_eq!(store.mode(), Some(Mode::Read));
        assert_eq!(fields(store.read_record().unwrap()), vec!["buffered"]);
    }

    #[test]
    fn test_failed_open_holds_no_handle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("present.tsv");
        fs::write(&path, "a\n").unwrap();

        let mut store = LineRecordStore::new();
        store.open(&path, Mode::Read).unwrap();

        let err = store
            .open(dir.path().join("missing.tsv"), Mode::Read)
            .unwrap_err();
        assert!(matches!(err, TabStoreError::FileNotFound { .. }));
        assert!(!store.is_open());
        assert_eq!(store.state(), StoreState::Closed);
    }

    #[test]
    fn test_invalid_mode_leaves_store_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mode.tsv");

        let mut store = LineRecordStore::new();
        let err = store.open(&path, None::<Mode>).unwrap_err();
        assert!(matches!(err, TabStoreError::InvalidMode { .. }));
        assert_eq!(store.state(), StoreState::Unopened);

        let err = store.open(&path, "append").unwrap_err();
        assert!(matches!(err, TabStoreError::InvalidMode { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_validate_fields_rejects_before_writing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("validate.tsv");
        let config = StoreConfig {
            validate_fields: true,
            line_endings: LineEndings::Unix,
            ..Default::default()
        };

        let mut store = LineRecordStore::with_config(config);
        store.open(&path, Mode::Write).unwrap();
        store.write(["ok"]).unwrap();
        let err = store.write(["fine", "has\ttab"]).unwrap_err();
        assert!(matches!(err, TabStoreError::InvalidField { index: 1, .. }));
        store.close().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "ok\n");
    }

    #[test]
    fn test_unvalidated_separator_breaks_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("limitation.tsv");

        write_all(&path, [vec!["a\tb"]]).unwrap();
        let records = read_all(&path).unwrap();
        assert_eq!(records, vec![Record::from(vec!["a", "b"])]);
    }

    #[test]
    fn test_atomic_write_replaces_on_close() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("atomic.tsv");
        fs::write(&path, "old\n").unwrap();

        let config = StoreConfig {
            atomic_writes: true,
            line_endings: LineEndings::Unix,
            ..Default::default()
        };
        let mut store = LineRecordStore::with_config(config);
        store.open(&path, Mode::Write).unwrap();
        store.write(["new", "line"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "old\n");

        store.close().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\tline\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_drop_flushes_open_writer() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("drop.tsv");
        {
            let mut store = LineRecordStore::with_config(unix_config());
            store.open(&path, Mode::Write).unwrap();
            store.write(["kept"]).unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "kept\n");
    }

    #[test]
    fn test_records_iterator() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("iter.tsv");
        fs::write(&path, "1\tone\n2\ttwo\n").unwrap();

        let mut store = LineRecordStore::new();
        store.open(&path, Mode::Read).unwrap();
        let ids: Vec<String> = store
            .records()
            .map(|r| r.unwrap().get(0).unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_with_store_closes_after_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scoped.tsv");

        let result: Result<()> = with_store_config(&path, Mode::Write, unix_config(), |store| {
            store.write(["before"])?;
            Err(TabStoreError::invalid_field(0, "caller gave up"))
        });
        assert!(matches!(result, Err(TabStoreError::InvalidField { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "before\n");
    }
}
