//! RIFF/WAVE container parsing.
//!
//! Walks the chunk list of a PCM WAV stream and yields the format descriptor
//! plus the location of the sample data. `RIFF` streams carry little-endian
//! fields, `RIFX` streams big-endian ones; that byte order is recorded in the
//! descriptor and drives 16-bit sample extraction later.

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};

use super::{AudioError, AudioFormat};

/// PCM format tag in the fmt chunk.
const WAVE_FORMAT_PCM: u16 = 1;

/// Parsed header: format descriptor plus the data chunk location.
#[derive(Debug, Clone, Copy)]
pub struct WavInfo {
    pub format: AudioFormat,
    pub data_offset: u64,
    pub data_len: u32,
}

/// Reads the container header without touching the sample data.
pub fn read_info<R: Read + Seek>(reader: &mut R) -> Result<WavInfo, AudioError> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    match &magic {
        b"RIFF" => walk_chunks::<R, LittleEndian>(reader, false),
        b"RIFX" => walk_chunks::<R, BigEndian>(reader, true),
        _ => Err(AudioError::UnsupportedFormat("not a RIFF stream".into())),
    }
}

/// Reads the sample bytes located by a prior [`read_info`] pass.
pub fn read_data<R: Read + Seek>(reader: &mut R, info: &WavInfo) -> Result<Vec<u8>, AudioError> {
    reader.seek(SeekFrom::Start(info.data_offset))?;
    let mut data = vec![0u8; info.data_len as usize];
    reader.read_exact(&mut data)?;
    Ok(data)
}

fn walk_chunks<R: Read + Seek, B: ByteOrder>(
    reader: &mut R,
    big_endian: bool,
) -> Result<WavInfo, AudioError> {
    let _riff_len = reader.read_u32::<B>()?;
    let mut form = [0u8; 4];
    reader.read_exact(&mut form)?;
    if &form != b"WAVE" {
        return Err(AudioError::UnsupportedFormat("missing WAVE form type".into()));
    }

    let mut format = None;
    let mut data = None;

    loop {
        let mut id = [0u8; 4];
        match reader.read_exact(&mut id) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err.into()),
        }
        let size = reader.read_u32::<B>()?;

        match &id {
            b"fmt " => format = Some(parse_fmt::<R, B>(reader, size, big_endian)?),
            b"data" => {
                data = Some((reader.stream_position()?, size));
                skip(reader, size)?;
            }
            _ => skip(reader, size)?,
        }
        // Chunks are word-aligned; odd sizes carry one pad byte.
        if size % 2 == 1 {
            skip(reader, 1)?;
        }
    }

    let mut format =
        format.ok_or_else(|| AudioError::UnsupportedFormat("missing fmt chunk".into()))?;
    let (data_offset, data_len) =
        data.ok_or_else(|| AudioError::UnsupportedFormat("missing data chunk".into()))?;
    format.frames = u64::from(data_len) / u64::from(format.block_align());

    Ok(WavInfo {
        format,
        data_offset,
        data_len,
    })
}

fn parse_fmt<R: Read + Seek, B: ByteOrder>(
    reader: &mut R,
    size: u32,
    big_endian: bool,
) -> Result<AudioFormat, AudioError> {
    if size < 16 {
        return Err(AudioError::UnsupportedFormat("fmt chunk too short".into()));
    }

    let format_tag = reader.read_u16::<B>()?;
    let channels = reader.read_u16::<B>()?;
    let sample_rate = reader.read_u32::<B>()?;
    let _byte_rate = reader.read_u32::<B>()?;
    let _block_align = reader.read_u16::<B>()?;
    let bits_per_sample = reader.read_u16::<B>()?;
    skip(reader, size - 16)?;

    if format_tag != WAVE_FORMAT_PCM {
        return Err(AudioError::UnsupportedFormat(format!(
            "non-PCM encoding (format tag {format_tag})"
        )));
    }
    if channels == 0 {
        return Err(AudioError::UnsupportedFormat("zero channel count".into()));
    }
    if sample_rate == 0 {
        return Err(AudioError::UnsupportedFormat("zero sample rate".into()));
    }
    if !matches!(bits_per_sample, 8 | 16) {
        return Err(AudioError::UnsupportedFormat(format!(
            "unsupported bit depth: {bits_per_sample}"
        )));
    }

    Ok(AudioFormat {
        sample_rate,
        channels,
        bits_per_sample,
        big_endian,
        frames: 0,
    })
}

fn skip<R: Read + Seek>(reader: &mut R, bytes: u32) -> std::io::Result<()> {
    reader.seek(SeekFrom::Current(i64::from(bytes)))?;
    Ok(())
}
