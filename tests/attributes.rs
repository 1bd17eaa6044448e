use asf_tag::tag::{
    Tag,
    attribute::{Attribute, AttributeKind},
};

#[test]
fn new_tag_is_empty() {
    let tag = Tag::new();
    assert!(tag.is_empty());
    assert_eq!(tag.title(), "");
    assert_eq!(tag.album(), "");
    assert_eq!(tag.track(), 0);
    assert_eq!(tag.disc(), 0);
    assert_eq!(tag.year(), 0);
}

#[test]
fn set_attribute_replaces_add_attribute_appends() {
    let mut tag = Tag::new();

    tag.add_attribute("WM/Genre", Attribute::from("Rock"));
    assert_eq!(tag.attribute("WM/Genre"), [Attribute::from("Rock")]);

    tag.add_attribute("WM/Genre", Attribute::from("Pop"));
    assert_eq!(
        tag.attribute("WM/Genre"),
        [Attribute::from("Rock"), Attribute::from("Pop")]
    );

    tag.set_attribute("WM/Genre", Attribute::from("Jazz"));
    assert_eq!(tag.attribute("WM/Genre"), [Attribute::from("Jazz")]);
}

#[test]
fn set_attribute_list_with_no_values_removes_the_key() {
    let mut tag = Tag::new();
    tag.set_attribute("WM/Mood", Attribute::from("Calm"));
    assert!(tag.contains("WM/Mood"));

    tag.set_attribute_list("WM/Mood", vec![]);
    assert!(!tag.contains("WM/Mood"));
    assert!(tag.is_empty());
}

#[test]
fn track_reads_integer_and_text_attributes() {
    let mut tag = Tag::new();
    tag.set_attribute("WM/TrackNumber", Attribute::Dword(5));
    assert_eq!(tag.track(), 5);

    tag.set_attribute("WM/TrackNumber", Attribute::from("07"));
    assert_eq!(tag.track(), 7);

    tag.set_attribute("WM/TrackNumber", Attribute::from("junk"));
    assert_eq!(tag.track(), 0);
}

#[test]
fn track_falls_back_to_the_legacy_key() {
    let mut tag = Tag::new();
    tag.set_attribute("WM/Track", Attribute::Dword(11));
    assert_eq!(tag.track(), 11);

    tag.set_attribute("WM/TrackNumber", Attribute::Dword(12));
    assert_eq!(tag.track(), 12);
}

#[test]
fn disc_reads_both_typings_and_falls_back() {
    let mut tag = Tag::new();
    tag.set_attribute("WM/Disc", Attribute::Dword(1));
    assert_eq!(tag.disc(), 1);

    tag.set_attribute("WM/DiscNumber", Attribute::from("2"));
    assert_eq!(tag.disc(), 2);
}

#[test]
fn numeric_setters_store_decimal_text() {
    let mut tag = Tag::new();
    tag.set_track(9);
    tag.set_disc(2);
    tag.set_year(2006);

    assert_eq!(tag.attribute("WM/TrackNumber"), [Attribute::from("9")]);
    assert_eq!(tag.attribute("WM/DiscNumber"), [Attribute::from("2")]);
    assert_eq!(tag.attribute("WM/Year"), [Attribute::from("2006")]);
    assert_eq!(
        tag.attribute("WM/TrackNumber")
            .first()
            .map(Attribute::kind),
        Some(AttributeKind::Unicode)
    );
}

#[test]
fn dedicated_fields_do_not_touch_the_store() {
    let mut tag = Tag::new();
    tag.set_title("Title");
    tag.set_artist("Artist");
    tag.set_copyright("(C)");
    tag.set_comment("Comment");
    tag.set_rating("5");

    assert!(tag.attributes().is_empty());
    assert_eq!(tag.title(), "Title");
    assert_eq!(tag.artist(), "Artist");
    assert_eq!(tag.copyright(), "(C)");
    assert_eq!(tag.comment(), "Comment");
    assert_eq!(tag.rating(), "5");
}

#[test]
fn attribute_backed_accessors_route_through_native_keys() {
    let mut tag = Tag::new();
    tag.set_album("Album");
    tag.set_album_artist("Various");
    tag.set_composer("Composer");
    tag.set_genre("Genre");
    tag.set_lyrics("La la");

    assert_eq!(tag.attribute("WM/AlbumTitle"), [Attribute::from("Album")]);
    assert_eq!(tag.album(), "Album");
    assert_eq!(tag.album_artist(), "Various");
    assert_eq!(tag.composer(), "Composer");
    assert_eq!(tag.genre(), "Genre");
    assert_eq!(tag.lyrics(), "La la");
}

#[test]
fn emptiness_tracks_every_data_source() {
    let mut tag = Tag::new();
    tag.set_rating("5");
    assert!(!tag.is_empty());

    let mut tag = Tag::new();
    tag.set_copyright("(C)");
    assert!(!tag.is_empty());

    let mut tag = Tag::new();
    tag.set_attribute("WM/WMCollectionID", Attribute::Bytes(vec![0, 1, 2]));
    assert!(!tag.is_empty());

    let mut tag = Tag::new();
    tag.set_title("Title");
    assert!(!tag.is_empty());
    tag.set_title("");
    assert!(tag.is_empty());
}

#[test]
fn remove_unsupported_properties_erases_native_keys() {
    let mut tag = Tag::new();
    tag.set_attribute("WM/WMContentID", Attribute::Guid([0; 16]));
    tag.set_attribute("WM/Mood", Attribute::from("Calm"));

    let unsupported = tag.properties().unsupported().to_vec();
    assert_eq!(unsupported, ["WM/WMContentID"]);

    tag.remove_unsupported_properties(&unsupported);
    assert!(!tag.contains("WM/WMContentID"));
    assert!(tag.contains("WM/Mood"));
}
