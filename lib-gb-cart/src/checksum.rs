use strum_macros::{Display, EnumIter};

/// First byte covered by the header checksum.
pub const CHECKSUM_START: usize = 0x0134;
/// Last byte covered by the header checksum, inclusive.
pub const CHECKSUM_END: usize = 0x014C;
pub const CHECKSUM_LEN: usize = CHECKSUM_END - CHECKSUM_START + 1;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumIter)]
pub enum ChecksumVerdict {
    #[strum(serialize = "PASSED")]
    Passed,
    #[strum(serialize = "FAILED")]
    Failed,
}

/// Result of running the header checksum over `0x134..=0x14C`.
///
/// The verdict only looks at the low byte of the accumulator. The stored
/// checksum byte is kept alongside for reporting.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HeaderChecksum {
    accumulator: u16,
    stored: u8,
}

impl HeaderChecksum {
    pub fn compute(bytes: &[u8], stored: u8) -> Self {
        Self {
            accumulator: accumulate(bytes),
            stored,
        }
    }

    pub fn accumulator(&self) -> u16 {
        self.accumulator
    }

    pub fn computed(&self) -> u8 {
        (self.accumulator & 0xFF) as u8
    }

    pub fn stored(&self) -> u8 {
        self.stored
    }

    pub fn verdict(&self) -> ChecksumVerdict {
        if self.computed() == 0 {
            ChecksumVerdict::Passed
        } else {
            ChecksumVerdict::Failed
        }
    }

    pub fn passed(&self) -> bool {
        self.verdict() == ChecksumVerdict::Passed
    }

    /// Whether the computed low byte equals the checksum byte at 0x14D.
    /// Informational, it does not affect [`HeaderChecksum::verdict`].
    pub fn matches_stored(&self) -> bool {
        self.computed() == self.stored
    }
}

impl std::fmt::Display for HeaderChecksum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02X} ({})", self.stored, self.verdict())
    }
}

fn accumulate(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .fold(0u16, |acc, &b| acc.wrapping_sub(b as u16).wrapping_sub(1))
}
