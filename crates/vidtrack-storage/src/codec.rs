//! Text encoding of a [`Video`] as a CSV row.
//!
//! Every field is stored as text. `id` and `views_count` are written with the
//! default integer formatting and parsed back on read, so `007` on disk reads
//! as `7` and is written back as `7`.

use csv::ByteRecord;
use thiserror::Error;
use vidtrack_core::{Video, VideoId};

/// Column names of the backing file, in the order new files are written.
pub const HEADER: [&str; 5] = ["id", "name", "href", "post_date", "views_count"];

const ID: usize = 0;
const NAME: usize = 1;
const HREF: usize = 2;
const POST_DATE: usize = 3;
const VIEWS_COUNT: usize = 4;

/// Why a stored row could not be turned into a [`Video`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MalformedRow {
    #[error("missing column `{0}`")]
    MissingField(&'static str),
    #[error("column `{0}` is not valid UTF-8")]
    NotUtf8(&'static str),
    #[error("column `{field}` is not an integer: {value:?}")]
    NotAnInteger { field: &'static str, value: String },
}

/// Position of each known field within a file's header.
///
/// Rows are mapped by column name, so a file whose header lists the fields in
/// another order, or carries extra columns, is still readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    indices: [Option<usize>; 5],
}

impl Columns {
    /// Layout of a file written from scratch.
    pub fn canonical() -> Self {
        Self {
            indices: [Some(0), Some(1), Some(2), Some(3), Some(4)],
        }
    }

    /// Resolves the layout of an existing header row.
    pub fn from_header(header: &ByteRecord) -> Self {
        let mut indices = [None; 5];
        for (slot, name) in indices.iter_mut().zip(HEADER) {
            *slot = header.iter().position(|column| column == name.as_bytes());
        }
        Self { indices }
    }

    /// The header row for a file written from scratch.
    pub fn canonical_header() -> ByteRecord {
        ByteRecord::from(HEADER.to_vec())
    }

    /// First known field the header does not carry, if any.
    pub fn missing(&self) -> Option<&'static str> {
        self.indices
            .iter()
            .zip(HEADER)
            .find_map(|(index, name)| index.is_none().then_some(name))
    }

    fn field<'r>(&self, row: &'r ByteRecord, field: usize) -> Result<&'r str, MalformedRow> {
        let name = HEADER[field];
        let raw = self.indices[field]
            .and_then(|index| row.get(index))
            .ok_or(MalformedRow::MissingField(name))?;
        std::str::from_utf8(raw).map_err(|_| MalformedRow::NotUtf8(name))
    }

    fn integer<T: std::str::FromStr>(&self, row: &ByteRecord, field: usize) -> Result<T, MalformedRow> {
        let value = self.field(row, field)?;
        value
            .trim()
            .parse()
            .map_err(|_| MalformedRow::NotAnInteger {
                field: HEADER[field],
                value: value.to_string(),
            })
    }

    /// Reads only the primary key of a row.
    ///
    /// Writes locate rows by id alone, so a row with a valid id and damaged
    /// other fields still counts as present.
    pub fn id_of(&self, row: &ByteRecord) -> Result<VideoId, MalformedRow> {
        self.integer(row, ID)
    }

    /// Decodes a full row.
    pub fn decode(&self, row: &ByteRecord) -> Result<Video, MalformedRow> {
        Ok(Video {
            id: self.integer(row, ID)?,
            name: self.field(row, NAME)?.to_string(),
            href: self.field(row, HREF)?.to_string(),
            post_date: self.field(row, POST_DATE)?.to_string(),
            views_count: self.integer(row, VIEWS_COUNT)?,
        })
    }

    /// Encodes `video` as a row of `width` columns laid out for this header.
    /// Columns the header has beyond the known fields are left empty.
    pub fn encode(&self, video: &Video, width: usize) -> Result<ByteRecord, MalformedRow> {
        if let Some(name) = self.missing() {
            return Err(MalformedRow::MissingField(name));
        }

        let values = [
            video.id.to_string(),
            video.name.clone(),
            video.href.clone(),
            video.post_date.clone(),
            video.views_count.to_string(),
        ];

        let mut fields = vec![String::new(); width];
        for (index, value) in self.indices.iter().zip(values) {
            if let Some(slot) = index.and_then(|i| fields.get_mut(i)) {
                *slot = value;
            }
        }
        Ok(ByteRecord::from(fields))
    }
}
