use crate::video::Video;
use std::cmp::Ordering;
use std::fmt::Display;
use typed_builder::TypedBuilder;

/// Field a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    PostDate,
    ViewsCount,
}

impl SortKey {
    /// Parses a sort key. Unrecognized text means "no sort".
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "post_date" => Some(Self::PostDate),
            "views_count" => Some(Self::ViewsCount),
            _ => None,
        }
    }

    /// Name of the key as accepted by [`SortKey::parse`].
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PostDate => "post_date",
            SortKey::ViewsCount => "views_count",
        }
    }

    /// Ascending comparison of two videos on this key.
    ///
    /// Names compare case-insensitively, post dates compare as raw text (which
    /// is chronological for the fixed-width format) and view counts compare
    /// numerically.
    pub fn compare(&self, a: &Video, b: &Video) -> Ordering {
        match self {
            SortKey::Name => a
                .name
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(b.name.chars().flat_map(char::to_lowercase)),
            SortKey::PostDate => a.post_date.cmp(&b.post_date),
            SortKey::ViewsCount => a.views_count.cmp(&b.views_count),
        }
    }
}

/// Direction of a sorted listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses an order case-insensitively. Anything but `desc` is ascending.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}

/// Parameters of a listing.
///
/// Without a sort key videos come back in insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, TypedBuilder)]
pub struct ListQuery {
    #[builder(default, setter(strip_option))]
    pub sort_by: Option<SortKey>,
    #[builder(default)]
    pub order: SortOrder,
}

impl ListQuery {
    /// Builds a query from raw text parameters as received at a boundary.
    pub fn from_params(sort_by: Option<&str>, order: Option<&str>) -> Self {
        Self {
            sort_by: sort_by.and_then(SortKey::parse),
            order: order.map(SortOrder::parse).unwrap_or_default(),
        }
    }

    /// Applies the query's ordering to `videos` in place.
    pub fn apply(&self, videos: &mut [Video]) {
        if let Some(key) = self.sort_by {
            sort_videos(videos, key, self.order);
        }
    }
}

/// Stable sort of `videos` by `key`.
///
/// Descending order uses the reversed comparator rather than reversing the
/// ascending output, so videos with equal keys keep their stored relative
/// order in both directions.
pub fn sort_videos(videos: &mut [Video], key: SortKey, order: SortOrder) {
    match order {
        SortOrder::Asc => videos.sort_by(|a, b| key.compare(a, b)),
        SortOrder::Desc => videos.sort_by(|a, b| key.compare(b, a)),
    }
}
