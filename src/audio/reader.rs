//! Decode operations: probe, decode, describe.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use log::{debug, error, info, warn};

use super::wav::{self, WavInfo};
use super::AudioError;

/// Checks whether `path` names a readable PCM WAV file.
///
/// Never fails: every failure kind collapses to `false` plus a logged
/// diagnostic. Only the container header is inspected; the file handle drops
/// on every path.
pub fn can_read_file(path: &str) -> bool {
    if path.trim().is_empty() {
        warn!("Audio file path is empty");
        return false;
    }
    if !Path::new(path).exists() {
        warn!("Audio file does not exist: {path}");
        return false;
    }
    match open_info(path) {
        Ok(_) => true,
        Err(AudioError::UnsupportedFormat(reason)) => {
            error!("Unsupported audio file format: {path} ({reason})");
            false
        }
        Err(err) => {
            error!("IO error reading file: {path} ({err})");
            false
        }
    }
}

/// Decodes every sample of the file, in file order, normalized to
/// [-1.0, 1.0].
pub fn read_audio_file(path: &str) -> Result<Vec<f32>, AudioError> {
    if path.trim().is_empty() {
        return Err(AudioError::InvalidInput);
    }

    let mut reader = open(path)?;
    let info = wav::read_info(&mut reader)?;
    info!("Audio format: {}", info.format);

    let data = wav::read_data(&mut reader, &info)?;
    debug!("Read {} bytes of audio data", data.len());

    let samples = decode_samples(&data, info.format.bits_per_sample, info.format.big_endian)?;
    info!("Converted {} audio samples", samples.len());
    Ok(samples)
}

/// Describes the file without decoding its sample data.
///
/// Never fails; any error collapses to a string starting with "Error".
pub fn audio_file_info(path: &str) -> String {
    match describe(path) {
        Ok(text) => text,
        Err(err) => format!("Error reading file information: {err}"),
    }
}

/// Converts raw PCM bytes into normalized samples.
///
/// 16-bit byte pairs combine per the declared byte order into a
/// two's-complement integer divided by 32768; 8-bit bytes are unsigned,
/// shifted by 128 and divided by 128. Trailing bytes that do not fill a whole
/// sample are dropped.
pub fn decode_samples(
    data: &[u8],
    bits_per_sample: u16,
    big_endian: bool,
) -> Result<Vec<f32>, AudioError> {
    match bits_per_sample {
        16 => Ok(data
            .chunks_exact(2)
            .map(|pair| {
                let raw = if big_endian {
                    i16::from_be_bytes([pair[0], pair[1]])
                } else {
                    i16::from_le_bytes([pair[0], pair[1]])
                };
                f32::from(raw) / 32768.0
            })
            .collect()),
        8 => Ok(data
            .iter()
            .map(|&byte| (f32::from(byte) - 128.0) / 128.0)
            .collect()),
        other => Err(AudioError::UnsupportedFormat(format!(
            "unsupported bit depth: {other}"
        ))),
    }
}

fn describe(path: &str) -> Result<String, AudioError> {
    if path.trim().is_empty() {
        return Err(AudioError::InvalidInput);
    }
    let info = open_info(path)?;
    let format = info.format;
    let name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());

    Ok(format!(
        "File: {name}\n\
         Encoding: {}\n\
         Sample Rate: {} Hz\n\
         Channels: {}\n\
         Sample Size: {} bits\n\
         Frame Length: {}\n\
         Duration: {:.2} seconds",
        format.encoding(),
        format.sample_rate,
        format.channels,
        format.bits_per_sample,
        format.frames,
        format.duration_seconds(),
    ))
}

fn open(path: &str) -> Result<BufReader<File>, AudioError> {
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => AudioError::NotFound(path.into()),
        _ => AudioError::Io(err),
    })?;
    Ok(BufReader::new(file))
}

fn open_info(path: &str) -> Result<WavInfo, AudioError> {
    let mut reader = open(path)?;
    wav::read_info(&mut reader)
}
