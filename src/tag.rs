//! The tag module of ASF (.wma/.asf) metadata.
//!
//! An ASF tag is a multi-valued attribute store keyed by the native
//! `WM/...` namespace, plus five scalar fields the container format keeps
//! outside of it (title, artist, copyright, comment, rating). [`Tag`] owns
//! both and layers three APIs on top:
//!
//! - dedicated accessors for the scalar fields and the common
//!   attribute-backed entries (album, genre, track number, ...),
//! - the generic attribute API over the native key namespace,
//! - the generic-property protocol, [`Tag::properties`] and
//!   [`Tag::set_properties`], which translates between native keys and the
//!   cross-format vocabulary defined in [`translation`].
//!
//! In detail, our policies are:
//!
//! - Every operation is total: unknown keys travel through the side lists of
//!   [`PropertyMap`] instead of failing.
//! - Track and disc numbers are readable from integer-typed or text-typed
//!   attributes alike, but are always written back as decimal text.
//! - Rating never appears in the property view; copyright appears there only
//!   from its dedicated field.

use itertools::Itertools;

pub mod attribute;
pub mod prelude;
pub mod properties;
pub mod store;
pub mod translation;

use self::{
    attribute::{Attribute, AttributeList},
    properties::PropertyMap,
    store::AttributeStore,
};

/// The metadata of one ASF file, owned exclusively by its container object.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    title: String,
    artist: String,
    copyright: String,
    comment: String,
    rating: String,
    attributes: AttributeStore,
}

impl Tag {
    /// Creates an empty tag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            copyright: String::new(),
            comment: String::new(),
            rating: String::new(),
            attributes: AttributeStore::new(),
        }
    }

    /// The track title, empty if unset.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the track title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// The artist name, empty if unset.
    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Sets the artist name.
    pub fn set_artist(&mut self, artist: impl Into<String>) {
        self.artist = artist.into();
    }

    /// The copyright notice, empty if unset.
    #[must_use]
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// Sets the copyright notice.
    pub fn set_copyright(&mut self, copyright: impl Into<String>) {
        self.copyright = copyright.into();
    }

    /// The track comment, empty if unset.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Sets the track comment.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    /// The rating, empty if unset. Ratings never appear in the property
    /// view, see [`Tag::properties`].
    #[must_use]
    pub fn rating(&self) -> &str {
        &self.rating
    }

    /// Sets the rating.
    pub fn set_rating(&mut self, rating: impl Into<String>) {
        self.rating = rating.into();
    }

    /// The album title from `"WM/AlbumTitle"`, empty if unset.
    #[must_use]
    pub fn album(&self) -> String {
        self.first_display("WM/AlbumTitle")
    }

    /// Sets the album title.
    pub fn set_album(&mut self, album: impl Into<String>) {
        self.set_attribute("WM/AlbumTitle", Attribute::Unicode(album.into()));
    }

    /// The album artist from `"WM/AlbumArtist"`, empty if unset.
    #[must_use]
    pub fn album_artist(&self) -> String {
        self.first_display("WM/AlbumArtist")
    }

    /// Sets the album artist.
    pub fn set_album_artist(&mut self, album_artist: impl Into<String>) {
        self.set_attribute("WM/AlbumArtist", Attribute::Unicode(album_artist.into()));
    }

    /// The composer from `"WM/Composer"`, empty if unset.
    #[must_use]
    pub fn composer(&self) -> String {
        self.first_display("WM/Composer")
    }

    /// Sets the composer.
    pub fn set_composer(&mut self, composer: impl Into<String>) {
        self.set_attribute("WM/Composer", Attribute::Unicode(composer.into()));
    }

    /// The genre name from `"WM/Genre"`, empty if unset.
    #[must_use]
    pub fn genre(&self) -> String {
        self.first_display("WM/Genre")
    }

    /// Sets the genre name.
    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.set_attribute("WM/Genre", Attribute::Unicode(genre.into()));
    }

    /// The unsynchronized lyrics from `"WM/Lyrics"`, empty if unset.
    #[must_use]
    pub fn lyrics(&self) -> String {
        self.first_display("WM/Lyrics")
    }

    /// Sets the unsynchronized lyrics.
    pub fn set_lyrics(&mut self, lyrics: impl Into<String>) {
        self.set_attribute("WM/Lyrics", Attribute::Unicode(lyrics.into()));
    }

    /// The release year from `"WM/Year"`, 0 if unset or malformed.
    #[must_use]
    pub fn year(&self) -> u32 {
        self.attributes
            .lookup("WM/Year")
            .first()
            .map_or(0, Attribute::to_uint)
    }

    /// Sets the release year, stored as decimal text.
    pub fn set_year(&mut self, year: u32) {
        self.set_attribute("WM/Year", Attribute::Unicode(year.to_string()));
    }

    /// The track number, 0 if unset or malformed.
    ///
    /// Reads `"WM/TrackNumber"` first, accepting integer-typed and
    /// text-typed values alike, then falls back to `"WM/Track"`.
    #[must_use]
    pub fn track(&self) -> u32 {
        self.numeric_attribute("WM/TrackNumber", "WM/Track")
    }

    /// Sets the track number, stored as decimal text under
    /// `"WM/TrackNumber"`.
    pub fn set_track(&mut self, track: u32) {
        self.set_attribute("WM/TrackNumber", Attribute::Unicode(track.to_string()));
    }

    /// The disc number, 0 if unset or malformed.
    ///
    /// Reads `"WM/DiscNumber"` first, accepting integer-typed and text-typed
    /// values alike, then falls back to `"WM/Disc"`.
    #[must_use]
    pub fn disc(&self) -> u32 {
        self.numeric_attribute("WM/DiscNumber", "WM/Disc")
    }

    /// Sets the disc number, stored as decimal text under `"WM/DiscNumber"`.
    pub fn set_disc(&mut self, disc: u32) {
        self.set_attribute("WM/DiscNumber", Attribute::Unicode(disc.to_string()));
    }

    /// A shared view of the owned attribute store.
    #[must_use]
    pub const fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// A mutable view of the owned attribute store.
    pub const fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }

    /// Whether any values are stored under the native key `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// The values stored under the native key `name`, empty if absent.
    #[must_use]
    pub fn attribute(&self, name: &str) -> &[Attribute] {
        self.attributes.lookup(name)
    }

    /// Replaces the values under `name` with the single `value`.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Attribute>) {
        self.attributes.insert(name, vec![value.into()]);
    }

    /// Replaces the values under `name` with `values`.
    pub fn set_attribute_list(&mut self, name: impl Into<String>, values: AttributeList) {
        self.attributes.insert(name, values);
    }

    /// Appends `value` to the values under `name`, creating the entry if the
    /// key is absent.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<Attribute>) {
        self.attributes.append(name, value.into());
    }

    /// Removes the native key `name` and all its values.
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    /// Erases the given native keys from the store.
    ///
    /// Meant to be fed the [`PropertyMap::unsupported`] list of a prior
    /// export when a caller decides not to round-trip untranslatable data.
    pub fn remove_unsupported_properties<I, S>(&mut self, properties: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in properties {
            self.attributes.remove(key.as_ref());
        }
    }

    /// Whether the tag holds no data at all: the standard accessor set is
    /// empty, copyright and rating are empty and the attribute store holds
    /// no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base_is_empty()
            && self.copyright.is_empty()
            && self.rating.is_empty()
            && self.attributes.is_empty()
    }

    /// Builds the canonical property view of this tag.
    ///
    /// The dedicated fields are emitted under TITLE/ARTIST/COPYRIGHT/COMMENT
    /// when non-empty; rating is never emitted. Every translatable store
    /// entry contributes one value per attribute, rendered as display text,
    /// so an integer-typed track number comes out as its decimal text while
    /// a text-typed one is passed through unchanged. Untranslatable native
    /// keys land in the result's unsupported list for round-tripping.
    #[must_use]
    pub fn properties(&self) -> PropertyMap {
        let mut props = PropertyMap::new();
        if !self.title.is_empty() {
            props.push("TITLE", self.title.clone());
        }
        if !self.artist.is_empty() {
            props.push("ARTIST", self.artist.clone());
        }
        if !self.copyright.is_empty() {
            props.push("COPYRIGHT", self.copyright.clone());
        }
        if !self.comment.is_empty() {
            props.push("COMMENT", self.comment.clone());
        }

        for (key, values) in self.attributes.iter() {
            if let Some(canonical) = translation::forward_key(key) {
                for value in values {
                    props.push(canonical, value.to_display());
                }
            } else {
                props.add_unsupported(key);
            }
        }
        props
    }

    /// Rewrites the tag from a canonical property mapping, returning the
    /// entries that could not be applied.
    ///
    /// First every key of the current export that is absent from `props`, or
    /// present with an empty value list, is cleared: the dedicated field is
    /// blanked for TITLE/ARTIST/COMMENT/COPYRIGHT, any other key erases its
    /// native entry from the store. The clear pass walks the current
    /// export's key set, not `props`.
    ///
    /// Then every entry of `props` is applied: a key with a native mapping
    /// replaces that native entry with freshly text-typed attributes (prior
    /// typed storage is not preserved), the four dedicated keys overwrite
    /// their field with the values joined by a space, and anything else is
    /// returned to the caller as ignored, untouched.
    pub fn set_properties(&mut self, props: &PropertyMap) -> PropertyMap {
        let before = self.properties();
        for (key, _) in before.iter() {
            if props.contains(key) && !props.lookup(key).is_empty() {
                continue;
            }
            match key {
                "TITLE" => self.title.clear(),
                "ARTIST" => self.artist.clear(),
                "COMMENT" => self.comment.clear(),
                "COPYRIGHT" => self.copyright.clear(),
                other => {
                    if let Some(native) = translation::reverse_key(other) {
                        self.attributes.remove(native);
                    }
                }
            }
        }

        let mut ignored = PropertyMap::new();
        for (key, values) in props.iter() {
            if let Some(native) = translation::reverse_key(key) {
                self.attributes.remove(native);
                for value in values {
                    self.attributes.append(native, Attribute::from(value.as_str()));
                }
            } else {
                match key {
                    "TITLE" => self.title = values.iter().join(" "),
                    "ARTIST" => self.artist = values.iter().join(" "),
                    "COMMENT" => self.comment = values.iter().join(" "),
                    "COPYRIGHT" => self.copyright = values.iter().join(" "),
                    other => ignored.set(other, values.to_vec()),
                }
            }
        }
        ignored
    }

    /// Emptiness over the standard accessor set shared by all tag formats.
    fn base_is_empty(&self) -> bool {
        self.title.is_empty()
            && self.artist.is_empty()
            && self.album().is_empty()
            && self.comment.is_empty()
            && self.genre().is_empty()
            && self.year() == 0
            && self.track() == 0
    }

    /// The display text of the first value under `key`, empty if absent.
    fn first_display(&self, key: &str) -> String {
        self.attributes
            .lookup(key)
            .first()
            .map(Attribute::to_display)
            .unwrap_or_default()
    }

    /// The first value under `primary` coerced to a number, falling back to
    /// `fallback`, then to 0.
    fn numeric_attribute(&self, primary: &str, fallback: &str) -> u32 {
        if let Some(value) = self.attributes.lookup(primary).first() {
            return value.to_uint();
        }
        self.attributes
            .lookup(fallback)
            .first()
            .map_or(0, Attribute::to_uint)
    }
}
