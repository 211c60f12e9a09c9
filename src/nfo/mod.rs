//! Kodi-style `.nfo` sidecar files for music videos.
//!
//! The document layout is fixed:
//!
//! ```xml
//! <musicvideo>
//!   <title/> <year/> <artist/> <director/> <album/> <genre/>*
//!   <track/> <runtime/> <plot/> <studio/> <id/> <createdate/>
//! </musicvideo>
//! ```
//!
//! Writes are all-or-nothing: the document goes to a temporary sibling first
//! and is renamed over the target, so a failed write never leaves a partial
//! NFO behind.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::error::{Error, Result};
use crate::model::MetadataRecord;

/// Format of the `<createdate>` element
const CREATE_DATE_FORMAT: &str = "%Y%m%d%H%M%S";

/// `YYYYMMDDHHMMSS`, zero padded.
pub fn create_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(CREATE_DATE_FORMAT).to_string()
}

/// Render the NFO document with an explicit creation time.
pub fn render_at<Tz: TimeZone>(
    record: &MetadataRecord,
    created: &DateTime<Tz>,
) -> std::io::Result<String>
where
    Tz::Offset: std::fmt::Display,
{
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    writer.write_event(Event::Start(BytesStart::new("musicvideo")))?;

    write_element(&mut writer, "title", &record.title)?;
    write_element(&mut writer, "year", &record.year)?;
    write_element(&mut writer, "artist", &record.artist)?;
    write_element(&mut writer, "director", &record.director)?;
    write_element(&mut writer, "album", &record.album)?;
    if record.genres.is_empty() {
        write_element(&mut writer, "genre", "")?;
    }
    for genre in &record.genres {
        write_element(&mut writer, "genre", genre)?;
    }
    write_element(&mut writer, "track", "")?;
    write_element(&mut writer, "runtime", "")?;
    write_element(&mut writer, "plot", &record.plot)?;
    write_element(&mut writer, "studio", &record.studio)?;
    write_element(&mut writer, "id", &record.id)?;
    write_element(&mut writer, "createdate", &create_date(created))?;

    writer.write_event(Event::End(BytesEnd::new("musicvideo")))?;

    let mut xml = String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    xml.push('\n');
    Ok(xml)
}

/// Render the NFO document stamped with the local clock.
pub fn render(record: &MetadataRecord) -> std::io::Result<String> {
    render_at(record, &Local::now())
}

/// `<tag>value</tag>` on one line, text escaped
fn write_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    tag: &str,
    value: &str,
) -> std::io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write the NFO for `record` to `path`, replacing any existing file.
pub fn write(path: &Path, record: &MetadataRecord) -> Result<()> {
    let contents = render(record).map_err(|e| Error::nfo(path, e))?;
    let temp_path = temp_path_for(path);

    std::fs::write(&temp_path, contents.as_bytes()).map_err(|e| Error::nfo(&temp_path, e))?;

    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(Error::nfo(path, e));
    }

    tracing::debug!("Wrote NFO {:?}", path);
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    path.with_extension("nfo.tmp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn fixed_time() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 7, 9, 5, 2)
            .unwrap()
    }

    fn sample_record() -> MetadataRecord {
        MetadataRecord {
            id: "121779770452".to_string(),
            title: "One More Time".to_string(),
            year: "2000".to_string(),
            artist: "Daft Punk".to_string(),
            album: "Discovery".to_string(),
            genres: vec!["Electronic".to_string(), "House".to_string()],
            plot: "This Music Video could not be identified.".to_string(),
            director: "Kazuhisa Takenouchi".to_string(),
            studio: "Toei Animation".to_string(),
        }
    }

    #[test]
    fn test_create_date_is_zero_padded() {
        assert_eq!(create_date(&fixed_time()), "20240307090502");
    }

    #[test]
    fn test_render_full_document() {
        let xml = render_at(&sample_record(), &fixed_time()).unwrap();

        let expected = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<musicvideo>
  <title>One More Time</title>
  <year>2000</year>
  <artist>Daft Punk</artist>
  <director>Kazuhisa Takenouchi</director>
  <album>Discovery</album>
  <genre>Electronic</genre>
  <genre>House</genre>
  <track></track>
  <runtime></runtime>
  <plot>This Music Video could not be identified.</plot>
  <studio>Toei Animation</studio>
  <id>121779770452</id>
  <createdate>20240307090502</createdate>
</musicvideo>
"#;
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_render_empty_genre_placeholder() {
        let record = MetadataRecord {
            genres: vec![],
            ..sample_record()
        };

        let xml = render_at(&record, &fixed_time()).unwrap();

        assert_eq!(xml.matches("<genre>").count(), 1);
        assert!(xml.contains("  <genre></genre>\n"));
    }

    #[test]
    fn test_render_escapes_markup() {
        let record = MetadataRecord {
            title: "Rock & Roll".to_string(),
            artist: "AC<DC>".to_string(),
            genres: vec!["R&B".to_string()],
            ..sample_record()
        };

        let xml = render_at(&record, &fixed_time()).unwrap();

        assert!(xml.contains("<title>Rock &amp; Roll</title>"));
        assert!(xml.contains("<artist>AC&lt;DC&gt;</artist>"));
        assert!(xml.contains("<genre>R&amp;B</genre>"));
    }

    #[test]
    fn test_render_escapes_quotes() {
        let record = MetadataRecord {
            title: "Don't Say \"Hi\"".to_string(),
            ..sample_record()
        };

        let xml = render_at(&record, &fixed_time()).unwrap();

        assert!(xml.contains("<title>Don&apos;t Say &quot;Hi&quot;</title>"));
    }

    #[test]
    fn test_write_creates_file_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Daft Punk - One More Time.nfo");

        write(&path, &sample_record()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<title>One More Time</title>"));
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_write_into_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("video.nfo");

        let result = write(&path, &sample_record());

        assert!(matches!(result, Err(Error::Nfo { .. })));
        assert!(!path.exists());
    }
}
