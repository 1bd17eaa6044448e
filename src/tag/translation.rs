//! Key translation between the native `WM/...` attribute namespace and the
//! cross-format property vocabulary.
//!
//! The pair list below is the wire contract with downstream consumers of the
//! property API; spelling and case on both sides are load-bearing.

/// Native-to-canonical key pairs, unique in both directions.
const KEY_TRANSLATION: [(&str, &str); 45] = [
    ("WM/AlbumTitle", "ALBUM"),
    ("WM/AlbumArtist", "ALBUMARTIST"),
    ("WM/Composer", "COMPOSER"),
    ("WM/Writer", "LYRICIST"),
    ("WM/Conductor", "CONDUCTOR"),
    ("WM/ModifiedBy", "REMIXER"),
    ("WM/Year", "DATE"),
    ("WM/OriginalReleaseYear", "ORIGINALDATE"),
    ("WM/Producer", "PRODUCER"),
    ("WM/ContentGroupDescription", "GROUPING"),
    ("WM/SubTitle", "SUBTITLE"),
    ("WM/SetSubTitle", "DISCSUBTITLE"),
    ("WM/TrackNumber", "TRACKNUMBER"),
    ("WM/PartOfSet", "DISCNUMBER"),
    ("WM/Genre", "GENRE"),
    ("WM/BeatsPerMinute", "BPM"),
    ("WM/Mood", "MOOD"),
    ("WM/ISRC", "ISRC"),
    ("WM/Lyrics", "LYRICS"),
    ("WM/Media", "MEDIA"),
    ("WM/Publisher", "LABEL"),
    ("WM/CatalogNo", "CATALOGNUMBER"),
    ("WM/Barcode", "BARCODE"),
    ("WM/EncodedBy", "ENCODEDBY"),
    ("WM/AlbumSortOrder", "ALBUMSORT"),
    ("WM/AlbumArtistSortOrder", "ALBUMARTISTSORT"),
    ("WM/ArtistSortOrder", "ARTISTSORT"),
    ("WM/TitleSortOrder", "TITLESORT"),
    ("WM/Script", "SCRIPT"),
    ("WM/Language", "LANGUAGE"),
    ("WM/ARTISTS", "ARTISTS"),
    ("ASIN", "ASIN"),
    ("MusicBrainz/Track Id", "MUSICBRAINZ_TRACKID"),
    ("MusicBrainz/Artist Id", "MUSICBRAINZ_ARTISTID"),
    ("MusicBrainz/Album Id", "MUSICBRAINZ_ALBUMID"),
    ("MusicBrainz/Album Artist Id", "MUSICBRAINZ_ALBUMARTISTID"),
    ("MusicBrainz/Album Release Country", "RELEASECOUNTRY"),
    ("MusicBrainz/Album Status", "RELEASESTATUS"),
    ("MusicBrainz/Album Type", "RELEASETYPE"),
    ("MusicBrainz/Release Group Id", "MUSICBRAINZ_RELEASEGROUPID"),
    ("MusicBrainz/Release Track Id", "MUSICBRAINZ_RELEASETRACKID"),
    ("MusicBrainz/Work Id", "MUSICBRAINZ_WORKID"),
    ("MusicIP/PUID", "MUSICIP_PUID"),
    ("Acoustid/Id", "ACOUSTID_ID"),
    ("Acoustid/Fingerprint", "ACOUSTID_FINGERPRINT"),
];

/// Translates a native attribute key to its canonical property name.
#[must_use]
pub fn forward_key(native: &str) -> Option<&'static str> {
    KEY_TRANSLATION
        .iter()
        .find(|&&(key, _)| key == native)
        .map(|&(_, canonical)| canonical)
}

/// Translates a canonical property name back to its native attribute key.
///
/// The reverse direction is derived from the same constant table as
/// [`forward_key`]; there is no shared mutable cache to race on.
#[must_use]
pub fn reverse_key(canonical: &str) -> Option<&'static str> {
    KEY_TRANSLATION
        .iter()
        .find(|&&(_, key)| key == canonical)
        .map(|&(native, _)| native)
}
