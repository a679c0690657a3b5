use crate::codec::Columns;
use csv::{ByteRecord, ReaderBuilder, Terminator, WriterBuilder};
use parking_lot::RwLock;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{info, trace, warn};
use vidtrack_core::error::{Result, StorageError};
use vidtrack_core::{ListQuery, Video, VideoId};

/// A video collection kept in a single CSV file.
///
/// The file has the header `id,name,href,post_date,views_count` and one row
/// per video. A missing or zero-length file is an empty collection.
///
/// Readers share the store's lock and writers hold it exclusively, so two
/// writes never interleave their read-modify-write passes. Every write
/// replaces the file by writing a sibling temporary file and renaming it
/// over the existing file, so a reader never sees a partially written file.
///
/// The lock only covers this process. Several processes pointed at one file
/// can still lose each other's updates.
#[derive(Debug)]
pub struct CsvStore {
    path: PathBuf,
    lock: RwLock<()>,
}

/// Raw contents of the backing file.
///
/// Rows stay undecoded so rewrites can re-emit the ones they do not touch
/// byte for byte, malformed rows included.
struct Table {
    header: ByteRecord,
    columns: Columns,
    rows: Vec<ByteRecord>,
}

impl Table {
    fn empty() -> Self {
        Self {
            header: Columns::canonical_header(),
            columns: Columns::canonical(),
            rows: Vec::new(),
        }
    }

    fn position(&self, id: VideoId) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| self.columns.id_of(row) == Ok(id))
    }

    fn encode(&self, video: &Video) -> Result<ByteRecord> {
        self.columns
            .encode(video, self.header.len())
            .map_err(|e| StorageError::InvalidData(format!("header cannot hold a video: {e}")))
    }
}

impl CsvStore {
    /// Creates a store backed by `path`.
    ///
    /// Nothing is touched on disk until the first successful write, which
    /// also creates missing parent directories.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lists every well-formed row.
    ///
    /// Rows that fail to decode are logged and skipped; the rest of the file
    /// is still returned.
    pub fn list(&self, query: &ListQuery) -> Result<Vec<Video>> {
        let _guard = self.lock.read();

        let Some(table) = self.load()? else {
            trace!(path = %self.path.display(), "backing file absent or empty");
            return Ok(Vec::new());
        };

        let mut videos = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            match table.columns.decode(row) {
                Ok(video) => videos.push(video),
                Err(e) => warn!(
                    path = %self.path.display(),
                    line = ?row.position().map(|p| p.line()),
                    error = %e,
                    "skipping malformed row"
                ),
            }
        }

        query.apply(&mut videos);
        Ok(videos)
    }

    /// Appends a new video, creating the file with its header if needed.
    pub fn insert(&self, video: Video) -> Result<Video> {
        let _guard = self.lock.write();

        let mut table = self.load()?.unwrap_or_else(Table::empty);
        if table.position(video.id).is_some() {
            return Err(StorageError::AlreadyExists(video.id));
        }

        let row = table.encode(&video)?;
        table.rows.push(row);
        self.store(&table)?;

        info!(id = video.id, "inserted video");
        Ok(video)
    }

    /// Replaces the row stored under `id` and rewrites the file.
    pub fn update(&self, id: VideoId, video: Video) -> Result<Video> {
        let _guard = self.lock.write();

        let mut table = self.load()?.ok_or(StorageError::NotFound(id))?;
        let index = table.position(id).ok_or(StorageError::NotFound(id))?;

        let video = video.with_id(id);
        table.rows[index] = table.encode(&video)?;
        self.store(&table)?;

        info!(id, "updated video");
        Ok(video)
    }

    /// Removes the row stored under `id` and rewrites the file.
    pub fn delete(&self, id: VideoId) -> Result<()> {
        let _guard = self.lock.write();

        let mut table = self.load()?.ok_or(StorageError::NotFound(id))?;
        let index = table.position(id).ok_or(StorageError::NotFound(id))?;

        table.rows.remove(index);
        self.store(&table)?;

        info!(id, "deleted video");
        Ok(())
    }

    /// Reads the whole file. `None` when it does not exist or is empty.
    fn load(&self) -> Result<Option<Table>> {
        match fs::metadata(&self.path) {
            Ok(meta) if meta.len() == 0 => return Ok(None),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        }

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(map_csv_error)?;

        let header = reader.byte_headers().map_err(map_csv_error)?.clone();
        let rows = reader
            .byte_records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(map_csv_error)?;

        // Blank lines only: no header was ever written.
        if rows.is_empty() && header.iter().all(|field| field.iter().all(u8::is_ascii_whitespace)) {
            return Ok(None);
        }

        let columns = Columns::from_header(&header);
        if let Some(name) = columns.missing() {
            warn!(path = %self.path.display(), column = name, "backing file header is missing a column");
        }

        Ok(Some(Table {
            header,
            columns,
            rows,
        }))
    }

    /// Atomically replaces the backing file with `table`.
    fn store(&self, table: &Table) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut file = self.temp_file(dir)?;
        {
            let mut writer = WriterBuilder::new()
                .flexible(true)
                .terminator(Terminator::CRLF)
                .from_writer(file.as_file_mut());
            writer.write_byte_record(&table.header).map_err(map_csv_error)?;
            for row in &table.rows {
                writer.write_byte_record(row).map_err(map_csv_error)?;
            }
            writer.flush()?;
        }
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| StorageError::from(e.error))?;

        trace!(path = %self.path.display(), rows = table.rows.len(), "rewrote backing file");
        Ok(())
    }

    /// Creates the replacement file next to the backing file.
    ///
    /// It takes the permissions of the file it replaces, or the process
    /// default (`0o666` minus the umask) when there is none yet.
    fn temp_file(&self, dir: &Path) -> Result<NamedTempFile> {
        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let file = builder.tempfile_in(dir)?;

        match fs::metadata(&self.path) {
            Ok(meta) => fs::set_permissions(file.path(), meta.permissions())?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        Ok(file)
    }
}

fn map_csv_error(err: csv::Error) -> StorageError {
    if err.is_io_error() {
        StorageError::Io(err.to_string())
    } else {
        StorageError::InvalidData(err.to_string())
    }
}
