//! Save files using `MessagePack`.
//!
//! A save file is a versioned envelope around a [`GameState`]. The world
//! tables are never saved; they are rebuilt from code on restore.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use whitehouse_foundation::{Error, Result};
use whitehouse_storage::{GameState, World};

/// Current save format version.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct SaveFile {
    version: u32,
    state: GameState,
}

/// Serializes a game state to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(state: &GameState) -> Result<Vec<u8>> {
    let file = SaveFile {
        version: FORMAT_VERSION,
        state: state.clone(),
    };
    rmp_serde::to_vec_named(&file).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a game state from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails or the bytes were written by
/// an unsupported format version.
pub fn from_bytes(bytes: &[u8]) -> Result<GameState> {
    let file: SaveFile =
        rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))?;
    if file.version != FORMAT_VERSION {
        return Err(Error::serialization(format!(
            "unsupported save format version {} (expected {FORMAT_VERSION})",
            file.version
        )));
    }
    Ok(file.state)
}

/// Checks that a restored state belongs to a world: its location exists and
/// it tracks exactly the world's objects.
///
/// # Errors
///
/// Returns an error describing the first mismatch.
pub fn check_compatible(state: &GameState, world: &World) -> Result<()> {
    if !world.has_location(state.current_location()) {
        return Err(Error::serialization(format!(
            "saved location {} is not part of this world",
            state.current_location()
        )));
    }
    if let Some(template) = world.objects().find(|t| state.object(t.id).is_none()) {
        return Err(Error::serialization(format!(
            "saved game is missing object {}",
            template.id
        )));
    }
    if let Some((id, _)) = state.objects().find(|(id, _)| !world.has_object(*id)) {
        return Err(Error::serialization(format!(
            "saved game has unknown object {id}"
        )));
    }
    Ok(())
}

/// Saves a game state to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(state: &GameState, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create file '{}': {e}", path.display())))?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(state)?;

    writer
        .write_all(&bytes)
        .map_err(|e| Error::io(format!("failed to write to file '{}': {e}", path.display())))?;

    writer
        .flush()
        .map_err(|e| Error::io(format!("failed to flush file '{}': {e}", path.display())))?;

    log::info!("saved game to {}", path.display());
    Ok(())
}

/// Loads a game state from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<GameState> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open file '{}': {e}", path.display())))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))?;

    let state = from_bytes(&bytes)?;
    log::info!("restored game from {}", path.display());
    Ok(state)
}
