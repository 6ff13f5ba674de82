use serde::{Deserialize, Serialize};

use crate::core::types::ByteSize;
use crate::error::{Error, Result};
use crate::memory::percent_of;
use crate::swap::constants::{FREE_TOKEN_INDEX, MEGABYTE_SUFFIX, TOTAL_TOKEN_INDEX, USED_TOKEN_INDEX};

/// Aggregate swap usage in bytes
///
/// The default value is all zeros, which is also what any failed query
/// produces.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct SwapSnapshot {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    /// `floor(used * 100 / total)`, 0 when total is 0
    pub used_percent: u64,
}

impl SwapSnapshot {
    /// Builds a snapshot and derives the usage percentage
    pub fn new(total_bytes: u64, used_bytes: u64, free_bytes: u64) -> Self {
        Self { total_bytes, used_bytes, free_bytes, used_percent: percent_of(used_bytes, total_bytes) }
    }

    /// Parses `vm.swapusage` text, degrading to zeros on malformed input
    ///
    /// ```rust
    /// use darwin_memwatch::swap::SwapSnapshot;
    ///
    /// let swap = SwapSnapshot::parse("total = 2048.00M used = 1024.00M free = 1024.00M");
    /// assert_eq!(swap.used_bytes, 1024 * 1024 * 1024);
    /// assert_eq!(swap.used_percent, 50);
    /// ```
    pub fn parse(text: &str) -> Self {
        Self::try_parse(text).unwrap_or_default()
    }

    /// Parses `vm.swapusage` text, reporting whether anything was recognised
    ///
    /// Fields are read by token position (`total` at 2, `used` at 5, `free`
    /// at 8). A field whose token is missing or unparsable stays 0 while the
    /// others still populate. Only when no field parses at all is an error
    /// returned.
    pub fn try_parse(text: &str) -> Result<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let field = |index: usize| tokens.get(index).and_then(|token| parse_megabytes(token));

        let total = field(TOTAL_TOKEN_INDEX);
        let used = field(USED_TOKEN_INDEX);
        let free = field(FREE_TOKEN_INDEX);

        if total.is_none() && used.is_none() && free.is_none() {
            return Err(Error::invalid_data(format!("unrecognised swap usage output: {:?}", text.trim())));
        }

        Ok(Self::new(
            total.unwrap_or_default().as_bytes(),
            used.unwrap_or_default().as_bytes(),
            free.unwrap_or_default().as_bytes(),
        ))
    }

    /// True when every field is zero
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub fn used(&self) -> ByteSize {
        ByteSize::new(self.used_bytes)
    }
}

/// Parses a `<decimal>M` token into bytes
fn parse_megabytes(token: &str) -> Option<ByteSize> {
    let number = token.strip_suffix(MEGABYTE_SUFFIX).unwrap_or(token);
    let megabytes = number.parse::<f64>().ok()?;
    megabytes.is_finite().then(|| ByteSize::from_megabytes(megabytes))
}
