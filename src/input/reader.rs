use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::input::InputError;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn hash_file(path: &Path) -> Result<u64, InputError> {
    let mut file = File::open(path)?;
    let mut buf = [0u8; 8192];
    let mut hasher = Fnv64::new();
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finish())
}

/// Fingerprint over several files; paths are mixed in so renames change it too.
pub fn hash_files(paths: &[&Path]) -> Result<u64, InputError> {
    let mut hasher = Fnv64::new();
    for path in paths {
        hasher.update(path.to_string_lossy().as_bytes());
        hasher.update(&hash_file(path)?.to_le_bytes());
    }
    Ok(hasher.finish())
}

struct Fnv64 {
    hash: u64,
}

impl Fnv64 {
    fn new() -> Self {
        Self {
            hash: 0xcbf29ce484222325,
        }
    }

    fn update(&mut self, data: &[u8]) {
        let mut h = self.hash;
        for &b in data {
            h ^= b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        self.hash = h;
    }

    fn finish(&self) -> u64 {
        self.hash
    }
}
