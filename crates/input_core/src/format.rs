//! Inline formats and the run-length encoded style list that carries them.
//!
//! A [`StyleRuns`] list covers the text buffer exactly: the run lengths sum to
//! the buffer's byte length, no run is empty and no two neighbours share the
//! same [`FormatSet`]. Run boundaries always fall on UTF-8 character
//! boundaries because every mutation is driven by char-aligned buffer offsets.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InlineFormat {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

impl InlineFormat {
    pub const ALL: [InlineFormat; 4] = [
        InlineFormat::Bold,
        InlineFormat::Italic,
        InlineFormat::Underline,
        InlineFormat::Strikethrough,
    ];

    /// Command name used by the shell's format buttons.
    pub fn name(self) -> &'static str {
        match self {
            InlineFormat::Bold => "bold",
            InlineFormat::Italic => "italic",
            InlineFormat::Underline => "underline",
            InlineFormat::Strikethrough => "strikethrough",
        }
    }

    fn bit(self) -> u8 {
        match self {
            InlineFormat::Bold => 1 << 0,
            InlineFormat::Italic => 1 << 1,
            InlineFormat::Underline => 1 << 2,
            InlineFormat::Strikethrough => 1 << 3,
        }
    }
}

impl fmt::Display for InlineFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown inline format `{}`", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for InlineFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        InlineFormat::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// Small bit set of [`InlineFormat`]s.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FormatSet(u8);

impl FormatSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, format: InlineFormat) -> bool {
        self.0 & format.bit() != 0
    }

    pub fn insert(&mut self, format: InlineFormat) {
        self.0 |= format.bit();
    }

    pub fn remove(&mut self, format: InlineFormat) {
        self.0 &= !format.bit();
    }

    #[must_use]
    pub fn with(mut self, format: InlineFormat) -> Self {
        self.insert(format);
        self
    }

    #[must_use]
    pub fn without(mut self, format: InlineFormat) -> Self {
        self.remove(format);
        self
    }

    #[must_use]
    pub fn intersection(self, other: FormatSet) -> Self {
        Self(self.0 & other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = InlineFormat> {
        InlineFormat::ALL
            .into_iter()
            .filter(move |f| self.contains(*f))
    }
}

impl FromIterator<InlineFormat> for FormatSet {
    fn from_iter<I: IntoIterator<Item = InlineFormat>>(iter: I) -> Self {
        let mut set = FormatSet::empty();
        for format in iter {
            set.insert(format);
        }
        set
    }
}

impl fmt::Debug for FormatSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleRun {
    pub len: usize,
    pub formats: FormatSet,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleRuns {
    runs: Vec<StyleRun>,
}

impl StyleRuns {
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// A single run of `len` bytes (or nothing, when `len == 0`).
    pub fn uniform(len: usize, formats: FormatSet) -> Self {
        let mut runs = Self::new();
        runs.push(len, formats);
        runs
    }

    pub fn runs(&self) -> &[StyleRun] {
        &self.runs
    }

    pub fn total_len(&self) -> usize {
        self.runs.iter().map(|r| r.len).sum()
    }

    /// Append a run at the end, merging with the last one when formats match.
    pub fn push(&mut self, len: usize, formats: FormatSet) {
        if len == 0 {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.formats == formats => last.len += len,
            _ => self.runs.push(StyleRun { len, formats }),
        }
    }

    /// `(byte range, formats)` for every run, in order.
    pub fn segments(&self) -> impl Iterator<Item = (Range<usize>, FormatSet)> + '_ {
        let mut pos = 0;
        self.runs.iter().map(move |run| {
            let start = pos;
            pos += run.len;
            (start..pos, run.formats)
        })
    }

    /// Formats of the run holding byte `offset`; past the end, the last run's.
    pub fn formats_at(&self, offset: usize) -> FormatSet {
        let mut pos = 0;
        for run in &self.runs {
            pos += run.len;
            if offset < pos {
                return run.formats;
            }
        }
        self.runs.last().map_or(FormatSet::empty(), |r| r.formats)
    }

    /// Formats a caret at `offset` types with: those of the byte before it,
    /// or of the first run at offset zero.
    pub fn formats_before(&self, offset: usize) -> FormatSet {
        self.formats_at(offset.saturating_sub(1))
    }

    /// Formats shared by every byte of `range`. Empty for an empty range.
    pub fn common_formats(&self, range: Range<usize>) -> FormatSet {
        let mut common: Option<FormatSet> = None;
        for (span, formats) in self.segments() {
            if span.end <= range.start || span.start >= range.end {
                continue;
            }
            common = Some(common.map_or(formats, |c| c.intersection(formats)));
        }
        common.unwrap_or_default()
    }

    /// Whether every byte of a non-empty `range` carries `format`.
    pub fn covers(&self, range: Range<usize>, format: InlineFormat) -> bool {
        !range.is_empty() && self.common_formats(range).contains(format)
    }

    /// Insert `len` bytes with `formats` at `offset`.
    pub fn insert(&mut self, offset: usize, len: usize, formats: FormatSet) {
        if len == 0 {
            return;
        }
        let index = self.split_at(offset);
        self.runs.insert(index, StyleRun { len, formats });
        self.normalize();
    }

    pub fn remove(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let start = self.split_at(range.start);
        let end = self.split_at(range.end);
        self.runs.drain(start..end);
        self.normalize();
    }

    /// Rewrite the formats of every byte in `range` with `f`.
    pub fn update_range(&mut self, range: Range<usize>, f: impl Fn(FormatSet) -> FormatSet) {
        if range.is_empty() {
            return;
        }
        let start = self.split_at(range.start);
        let end = self.split_at(range.end);
        for run in &mut self.runs[start..end] {
            run.formats = f(run.formats);
        }
        self.normalize();
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }

    /// Splits the run straddling `offset` and returns the index of the first
    /// run starting at or after it.
    fn split_at(&mut self, offset: usize) -> usize {
        let mut pos = 0;
        for i in 0..self.runs.len() {
            if pos == offset {
                return i;
            }
            let run = self.runs[i];
            if offset < pos + run.len {
                let head = offset - pos;
                self.runs[i].len = head;
                self.runs.insert(
                    i + 1,
                    StyleRun {
                        len: run.len - head,
                        formats: run.formats,
                    },
                );
                return i + 1;
            }
            pos += run.len;
        }
        self.runs.len()
    }

    fn normalize(&mut self) {
        let mut merged: Vec<StyleRun> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if run.len == 0 {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.formats == run.formats => last.len += run.len,
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }
}
