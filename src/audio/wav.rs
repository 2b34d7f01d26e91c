//! WAV header parsing and sample streaming

use embedded_io::{Error as _, Read, ReadExactError, Seek, SeekFrom};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Channels;
use crate::error::{AudioError, FormatError};

/// Bytes searched past the `fmt ` chunk for the `data` tag
pub const DATA_SEARCH_WINDOW: usize = 200;

/// RIFF header plus a 16 byte `fmt ` chunk
const HEADER_LEN: usize = 36;
const TAG_LEN: usize = 4;
const CHUNK_HEADER_LEN: usize = 8;

/// Stream parameters read from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub channels: Channels,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    /// Absolute file position of the first sample byte
    pub data_offset: u64,
    /// Length of the sample data in bytes
    pub data_size: u32,
}

/// Sequential reader over the sample data of a WAV file
///
/// The cursor never moves past the end of the sample data; a read at the
/// end returns a short count instead of an error.
#[derive(Debug)]
pub struct WavReader<F: Read + Seek> {
    file: F,
    header: WavHeader,
    cursor: u32,
}

impl<F: Read + Seek> WavReader<F> {
    /// Parse the header and position the reader at the first sample
    pub fn new(mut file: F) -> Result<Self, AudioError> {
        let header = parse_header(&mut file)?;
        file.seek(SeekFrom::Start(header.data_offset))
            .map_err(|err| AudioError::Io(err.kind()))?;

        #[cfg(feature = "esp32-log")]
        println!("[WavReader.new] parsed header {:?}", header);

        Ok(Self {
            file,
            header,
            cursor: 0,
        })
    }

    pub const fn header(&self) -> &WavHeader {
        &self.header
    }

    /// Sample data left to read, in bytes
    pub const fn remaining(&self) -> u32 {
        self.header.data_size - self.cursor
    }

    /// Move to `pos` bytes into the sample data
    pub fn seek(&mut self, pos: u32) -> Result<(), AudioError> {
        let pos = pos.min(self.header.data_size);
        self.file
            .seek(SeekFrom::Start(self.header.data_offset + u64::from(pos)))
            .map_err(|err| AudioError::Io(err.kind()))?;
        self.cursor = pos;
        Ok(())
    }

    /// Position within the sample data
    pub const fn tell(&self) -> u32 {
        self.cursor
    }

    /// Fill `buf` with sample data, returning how many bytes were read
    pub fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, AudioError> {
        let wanted = buf.len().min(usize::try_from(self.remaining()).unwrap_or(usize::MAX));
        let read = read_up_to(&mut self.file, &mut buf[..wanted])?;
        // `read <= remaining`, which is a u32
        self.cursor += u32::try_from(read).unwrap_or(0);
        Ok(read)
    }

    pub fn into_inner(self) -> F {
        self.file
    }
}

fn parse_header<F: Read + Seek>(file: &mut F) -> Result<WavHeader, AudioError> {
    let mut header = [0u8; HEADER_LEN];
    file.read_exact(&mut header).map_err(read_exact_error)?;

    if &header[0..4] != b"RIFF" {
        return Err(FormatError::InvalidChunkId.into());
    }
    if &header[8..12] != b"WAVE" {
        return Err(FormatError::InvalidFormat.into());
    }
    if &header[12..16] != b"fmt " {
        return Err(FormatError::InvalidSubChunk.into());
    }

    // Bytes 20..22 hold the audio format, which is not checked
    let channels = match u16_at(&header, 22) {
        1 => Channels::Mono,
        _ => Channels::Stereo,
    };
    let sample_rate = u32_at(&header, 24);
    let bits_per_sample = u16_at(&header, 34);

    // Some converters put extra chunks before `data`, so search for it
    let mut block = [0u8; DATA_SEARCH_WINDOW];
    let block_len = read_up_to(file, &mut block)?;
    let block = &block[..block_len];
    let tag_pos = block
        .windows(TAG_LEN)
        .position(|window| window == b"data")
        .ok_or(FormatError::DataChunkNotFound)?;

    let data_offset = (HEADER_LEN + tag_pos + CHUNK_HEADER_LEN) as u64;
    let declared_size = match block.get(tag_pos + TAG_LEN..tag_pos + CHUNK_HEADER_LEN) {
        Some(size) => u32_at(size, 0),
        None => {
            let mut size = [0u8; 4];
            file.seek(SeekFrom::Start(data_offset - 4))
                .map_err(|err| AudioError::Io(err.kind()))?;
            file.read_exact(&mut size).map_err(read_exact_error)?;
            u32::from_le_bytes(size)
        }
    };

    // Trust the file length over the declared size
    let file_len = file
        .seek(SeekFrom::End(0))
        .map_err(|err| AudioError::Io(err.kind()))?;
    let available = u32::try_from(file_len.saturating_sub(data_offset)).unwrap_or(u32::MAX);

    Ok(WavHeader {
        channels,
        sample_rate,
        bits_per_sample,
        data_offset,
        data_size: declared_size.min(available),
    })
}

/// Read until `buf` is full or the source is exhausted
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, AudioError> {
    let mut filled = 0;
    while filled < buf.len() {
        let read = reader
            .read(&mut buf[filled..])
            .map_err(|err| AudioError::Io(err.kind()))?;
        if read == 0 {
            break;
        }
        filled += read;
    }
    Ok(filled)
}

fn read_exact_error<E: embedded_io::Error>(err: ReadExactError<E>) -> AudioError {
    match err {
        ReadExactError::UnexpectedEof => FormatError::Truncated.into(),
        ReadExactError::Other(err) => AudioError::Io(err.kind()),
    }
}

fn u16_at(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn u32_at(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}
