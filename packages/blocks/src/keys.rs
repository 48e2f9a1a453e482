use crc32fast::Hasher;

/// Derive a document seed from a page identifier (slug or path) using CRC32.
pub fn document_seed(ident: &str) -> String {
    let mut buff = String::from(ident);
    if !ident.starts_with("doc://") {
        buff = format!("doc://{}", buff);
    }

    let mut hasher = Hasher::new();
    hasher.update(buff.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential `_key` generator for blocks within a document.
///
/// Keys are `<seed>-<n>` where the seed is the CRC32 of the document
/// identifier. Two generators built from the same seed produce the same
/// key sequence, so conversions are deterministic and diffable.
#[derive(Debug, Clone)]
pub struct KeyGenerator {
    seed: String,
    count: u32,
}

impl KeyGenerator {
    pub fn new(ident: &str) -> Self {
        Self {
            seed: document_seed(ident),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate the next sequential key.
    pub fn next_key(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Get the document seed.
    pub fn seed(&self) -> &str {
        &self.seed
    }
}
