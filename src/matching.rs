//! Track match evaluation.
//!
//! Pure, total functions that decide whether a remote catalog candidate is an
//! acceptable match for a local audio item, and that aggregate accepted
//! candidates into per-item match groups. Nothing in this module can fail or
//! touch the network.
//!
//! A candidate is accepted when all three of the following hold:
//!
//! 1. artist matches exactly, case-insensitive
//! 2. title matches exactly, case-insensitive
//! 3. the candidate album, case-folded and space-stripped, *starts with* the
//!    equally normalized source album ("Thriller" accepts
//!    "Thriller (Remastered 2012)" but not "The Thriller")
//!
//! A source item with an absent artist or album never matches any candidate:
//! the absence is kept as `None`, which no real candidate value compares
//! equal to. Don't loosen this into a "match on whatever is present"
//! heuristic.

use crate::types::{LocalAudioItem, MatchGroup, RemoteTrack};

/// Lower-cases a string for order- and case-insensitive comparison.
pub fn normalize_case(s: &str) -> String {
    s.to_lowercase()
}

/// Removes all space characters. Applied to album names before the prefix
/// comparison so that spacing differences between catalog entries and local
/// tags don't break the match.
pub fn strip_spaces(s: &str) -> String {
    s.chars().filter(|c| *c != ' ').collect()
}

fn artist_matches(wanted: Option<&str>, candidate: &str) -> bool {
    match wanted {
        Some(wanted) => normalize_case(candidate) == normalize_case(wanted),
        None => false,
    }
}

fn album_matches(wanted: Option<&str>, candidate: &str) -> bool {
    match wanted {
        Some(wanted) => strip_spaces(&normalize_case(candidate))
            .starts_with(&strip_spaces(&normalize_case(wanted))),
        None => false,
    }
}

/// Returns the subset of `candidates` accepted for `item`, preserving the
/// input order.
pub fn find_matches(item: &LocalAudioItem, candidates: &[RemoteTrack]) -> Vec<RemoteTrack> {
    candidates
        .iter()
        .filter(|track| {
            artist_matches(item.artist.as_deref(), &track.artist)
                && normalize_case(&track.title) == normalize_case(&item.title)
                && album_matches(item.album.as_deref(), &track.album)
        })
        .cloned()
        .collect()
}

/// Appends `accepted` candidates to the group belonging to `item`, creating
/// the group on first acceptance. Groups are looked up by item id with a
/// linear scan; migration batches are small enough that no index is needed.
pub fn upsert_matches(groups: &mut Vec<MatchGroup>, item: &LocalAudioItem, accepted: Vec<RemoteTrack>) {
    if accepted.is_empty() {
        return;
    }

    match groups.iter_mut().find(|group| group.item.id == item.id) {
        Some(group) => group.matches.extend(accepted),
        None => groups.push(MatchGroup {
            item: item.clone(),
            matches: accepted,
        }),
    }
}
