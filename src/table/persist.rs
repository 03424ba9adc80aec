//! Byte-stream persistence: `marshal` writes every live entry out in
//! directory order, `unmarshal` replays them into a fresh table.
//!
//! Grounded on `original_source/src/map.c`'s `mm_marshal`/`mm_unmarshal`
//! and the header layout implied by `map_t`'s `key_size`/`value_size`
//! fields. The C source writes/reads the struct's width fields up front
//! so `mm_unmarshal` can sanity-check the stream before trusting it; we
//! do the analogous check against `K::WIDTH`/`V::WIDTH`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::hash::BuildHasher;
use std::path::Path;

use crate::config::TableConfig;
use crate::data::{Key, Value};
use crate::error::{Result, TableError};
use crate::table::directory::Directory;
use crate::table::Table;

impl<K, V, S> Table<K, V, S>
where
    K: Key,
    V: Value,
    S: BuildHasher,
{
    /// Writes every live entry to `path` as a flat byte stream: a header
    /// (`bucket_capacity`, `split_threshold`, `K::WIDTH`, `V::WIDTH`, all
    /// native-endian) followed by `key_bytes || value_bytes` per entry, in
    /// directory order.
    pub fn marshal(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(&self.config.bucket_capacity().to_ne_bytes())?;
        writer.write_all(&self.config.split_threshold().to_ne_bytes())?;
        writer.write_all(&K::WIDTH.to_ne_bytes())?;
        writer.write_all(&V::WIDTH.to_ne_bytes())?;

        for index in 0..self.directory.len() {
            for entry in self.directory.get(index).iter() {
                writer.write_all(&entry.key.to_bytes())?;
                writer.write_all(&entry.value.to_bytes())?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}

impl<K, V, S> Table<K, V, S>
where
    K: Key,
    V: Value,
    S: BuildHasher,
{
    /// Replaces the receiver's contents with the table encoded at `path`,
    /// rebuilding it from an empty `config.m_min()`-bucket directory via
    /// ordinary `put` calls (so the split/shrink engine re-derives whatever
    /// directory shape the stored load factor implies, rather than the
    /// shape the writer happened to have on disk).
    pub fn unmarshal(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let bucket_capacity = read_usize(&mut reader)?;
        let split_threshold = read_f32(&mut reader)?;
        let found_key = read_usize(&mut reader)?;
        let found_value = read_usize(&mut reader)?;

        if found_key != K::WIDTH || found_value != V::WIDTH {
            return Err(TableError::WidthMismatch {
                expected_key: K::WIDTH,
                found_key,
                expected_value: V::WIDTH,
                found_value,
            });
        }

        if bucket_capacity == 0 || !(split_threshold > 0.0 && split_threshold <= 1.0) {
            return Err(TableError::InvalidHeader {
                bucket_capacity,
                split_threshold,
            });
        }
        let config = TableConfig::new(self.config.m_min(), bucket_capacity, split_threshold);
        let m_min = config.m_min();
        self.directory = Directory::with_len(m_min);
        self.capacity = m_min;
        self.split_pointer = 0;
        self.len = 0;
        self.config = config;

        let mut key_buf = vec![0u8; K::WIDTH];
        let mut value_buf = vec![0u8; V::WIDTH];
        loop {
            if !read_exact_or_eof(&mut reader, &mut key_buf)? {
                break;
            }
            reader.read_exact(&mut value_buf).map_err(|_| TableError::ShortRead)?;

            let key = K::from_bytes(&key_buf);
            let value = V::from_bytes(&value_buf);
            self.put(key, value);
        }

        Ok(())
    }
}

/// Reads `buf.len()` bytes, returning `Ok(false)` only when the stream was
/// already exhausted at the start of the read (a clean entry-boundary EOF).
/// A partial read partway through `buf` is a corrupt stream, not EOF.
fn read_exact_or_eof(reader: &mut impl Read, buf: &mut [u8]) -> Result<bool> {
    let mut read = 0;
    while read < buf.len() {
        let n = reader.read(&mut buf[read..])?;
        if n == 0 {
            return if read == 0 {
                Ok(false)
            } else {
                Err(TableError::ShortRead)
            };
        }
        read += n;
    }
    Ok(true)
}

fn read_usize(reader: &mut impl Read) -> Result<usize> {
    let mut buf = [0u8; std::mem::size_of::<usize>()];
    reader.read_exact(&mut buf).map_err(|_| TableError::ShortRead)?;
    Ok(usize::from_ne_bytes(buf))
}

fn read_f32(reader: &mut impl Read) -> Result<f32> {
    let mut buf = [0u8; std::mem::size_of::<f32>()];
    reader.read_exact(&mut buf).map_err(|_| TableError::ShortRead)?;
    Ok(f32::from_ne_bytes(buf))
}
