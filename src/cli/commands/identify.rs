//! Single-file identification command.

use std::path::Path;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::enrichment::{IdentificationService, IdentifyError, VideoFile};
use crate::nfo;

use super::require_imvdb_key;

/// Identify one video, print what was found, optionally write its NFO
pub fn cmd_identify(
    rt: &Runtime,
    config: &Config,
    path: &Path,
    imvdb_api_key: Option<&str>,
    write: bool,
) -> anyhow::Result<()> {
    if !path.is_file() {
        return Err(crate::error::Error::not_found(path).into());
    }

    let file = VideoFile::from_path(path)
        .map_err(|e| crate::error::Error::invalid_format(e.to_string()))?;

    let api_key = require_imvdb_key(config, imvdb_api_key)?;
    let service = IdentificationService::new(config.identify_config(Some(&api_key)));

    println!("Identifying: {:?}", path);
    println!();

    match rt.block_on(service.identify(&file)) {
        Ok(result) => {
            let record = &result.record;
            println!(
                "✓ Match found! (artist similarity: {:.0}%)",
                result.artist_similarity
            );
            println!();
            println!("  Title:  {}", record.title);
            println!("  Artist: {}", record.artist);
            if !record.year.is_empty() {
                println!("  Year:   {}", record.year);
            }
            if !record.album.is_empty() {
                println!("  Album:  {}", record.album);
            }
            if !record.genres.is_empty() {
                println!("  Genre:  {}", record.genres.join(", "));
            }
            if !record.director.is_empty() {
                println!("  Director: {}", record.director);
            }
            if !record.id.is_empty() {
                println!("  IMVDb id: {}", record.id);
            }
            println!(
                "  Sources: IMVDb {}, TheAudioDB {}",
                found_label(result.video_found),
                found_label(result.audio_found)
            );

            if write {
                println!();
                let nfo_path = file.nfo_path();
                nfo::write(&nfo_path, record)?;
                println!("✓ NFO written to {:?}", nfo_path);
            }
        }
        Err(IdentifyError::NotFound) => {
            println!("✗ No match found for this video.");
            println!("  Neither IMVDb nor TheAudioDB returned a confident result.");
        }
        Err(e) => {
            println!("✗ {}", e);
        }
    }

    Ok(())
}

fn found_label(found: bool) -> &'static str {
    if found { "matched" } else { "no result" }
}
