//! Immutable reference sets of known shots and videos.
//!
//! Reference sets are built once, at engine construction, and never
//! written again. A malformed reference file is a fatal construction
//! error: no partial set, and no partially configured engine, is ever
//! produced.

use crate::error::{FileKind, Result};
use crate::model::{ShotKey, VideoKey};
use crate::sources;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// The universe of shots a submission may reference.
///
/// Built from a shot-list file: `corpus_id video_id shot_id start_time
/// end_time`, whitespace-delimited, no header. The start and end times
/// are parsed for shape validation and then discarded; duplicate rows
/// collapse naturally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceShots {
    shots: HashSet<ShotKey>,
}

impl ReferenceShots {
    /// Builds the set from a shot-list reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut shots = HashSet::new();
        sources::for_each_record(reader, FileKind::ShotList, 5, |line, fields| {
            sources::parse_float(FileKind::ShotList, line, "start_time", fields[3])?;
            sources::parse_float(FileKind::ShotList, line, "end_time", fields[4])?;
            shots.insert(ShotKey::new(fields[0], fields[1], fields[2]));
            Ok(())
        })?;
        debug!(shots = shots.len(), "loaded reference shot set");
        Ok(Self { shots })
    }

    /// Builds the set from a shot-list file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Returns true if `key` belongs to the reference set.
    pub fn contains(&self, key: &ShotKey) -> bool {
        self.shots.contains(key)
    }

    /// Returns the number of distinct shots.
    pub fn len(&self) -> usize {
        self.shots.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }
}

impl FromIterator<ShotKey> for ReferenceShots {
    fn from_iter<I: IntoIterator<Item = ShotKey>>(iter: I) -> Self {
        Self {
            shots: iter.into_iter().collect(),
        }
    }
}

/// The universe of videos evidence may cite.
///
/// Built from a video-list file: `corpus_id video_id`, whitespace
/// delimited, no header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceVideos {
    videos: HashSet<VideoKey>,
}

impl ReferenceVideos {
    /// Builds the set from a video-list reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut videos = HashSet::new();
        sources::for_each_record(reader, FileKind::VideoList, 2, |_, fields| {
            videos.insert(VideoKey::new(fields[0], fields[1]));
            Ok(())
        })?;
        debug!(videos = videos.len(), "loaded reference video set");
        Ok(Self { videos })
    }

    /// Builds the set from a video-list file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Returns true if `key` belongs to the reference set.
    pub fn contains(&self, key: &VideoKey) -> bool {
        self.videos.contains(key)
    }

    /// Returns the number of distinct videos.
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl FromIterator<VideoKey> for ReferenceVideos {
    fn from_iter<I: IntoIterator<Item = VideoKey>>(iter: I) -> Self {
        Self {
            videos: iter.into_iter().collect(),
        }
    }
}
