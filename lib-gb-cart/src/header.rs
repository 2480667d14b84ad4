use bitflags::bitflags;
use strum_macros::{Display, EnumIter};

use crate::checksum::{HeaderChecksum, CHECKSUM_LEN, CHECKSUM_START};
use crate::tables;

pub const HEADER_START: usize = 0x0100;
pub const HEADER_SIZE: usize = 0x50;
pub const HEADER_END: usize = HEADER_START + HEADER_SIZE;

pub const ENTRY_START: usize = 0x0100;
pub const LOGO_START: usize = 0x0104;
pub const LOGO_LEN: usize = 48;
pub const TITLE_START: usize = 0x0134;
pub const TITLE_LEN: usize = 16;
/// Last title byte. Always overwritten with 0 when a cartridge is loaded.
pub const TITLE_TERMINATOR: usize = TITLE_START + TITLE_LEN - 1;
pub const NEW_LICENSEE_CODE: usize = 0x0144;
pub const SGB_FLAG: usize = 0x0146;
pub const CARTRIDGE_TYPE: usize = 0x0147;
pub const ROM_SIZE: usize = 0x0148;
pub const RAM_SIZE: usize = 0x0149;
pub const DESTINATION_CODE: usize = 0x014A;
pub const OLD_LICENSEE_CODE: usize = 0x014B;
pub const MASK_ROM_VERSION: usize = 0x014C;
pub const HEADER_CHECKSUM: usize = 0x014D;
pub const GLOBAL_CHECKSUM: usize = 0x014E;

bitflags! {
    #[derive(Default)]
    pub struct CartridgeFeatures: u8 {
        const RAM = 0b00000001;
        const BATTERY = 0b00000010;
        const TIMER = 0b00000100;
        const RUMBLE = 0b00001000;
        const SENSOR = 0b00010000;
    }
}

impl CartridgeFeatures {
    pub fn from_type_code(code: u8) -> Self {
        match code {
            0x02 | 0x08 | 0x0C | 0x12 | 0x1A => Self::RAM,
            0x03 | 0x09 | 0x0D | 0x13 | 0x1B => Self::RAM | Self::BATTERY,
            0x06 => Self::BATTERY,
            0x0F => Self::TIMER | Self::BATTERY,
            0x10 => Self::TIMER | Self::RAM | Self::BATTERY,
            0x1C => Self::RUMBLE,
            0x1D => Self::RUMBLE | Self::RAM,
            0x1E => Self::RUMBLE | Self::RAM | Self::BATTERY,
            0x22 => Self::SENSOR | Self::RUMBLE | Self::RAM | Self::BATTERY,
            _ => Self::empty(),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumIter)]
pub enum Destination {
    Japanese,
    NonJapanese,
    Unknown,
}

impl From<u8> for Destination {
    fn from(code: u8) -> Self {
        match code {
            0x00 => Destination::Japanese,
            0x01 => Destination::NonJapanese,
            _ => Destination::Unknown,
        }
    }
}

/// Borrowed view of the cartridge header, `0x100..0x150` of a ROM image.
///
/// Field accessors take absolute ROM addresses so they line up with the
/// usual header documentation. Multi-byte codes are read little-endian.
#[derive(Debug, Copy, Clone)]
pub struct RomHeader<'a> {
    raw: &'a [u8; HEADER_SIZE],
}

impl<'a> RomHeader<'a> {
    /// Returns `None` if `rom` is too short to hold the whole header.
    pub fn overlay(rom: &'a [u8]) -> Option<Self> {
        let raw = rom.get(HEADER_START..HEADER_END)?.try_into().ok()?;
        Some(Self { raw })
    }

    fn byte(&self, address: usize) -> u8 {
        self.raw[address - HEADER_START]
    }

    fn slice(&self, address: usize, len: usize) -> &'a [u8] {
        let raw: &'a [u8; HEADER_SIZE] = self.raw;
        let start = address - HEADER_START;
        &raw[start..start + len]
    }

    fn word(&self, address: usize) -> u16 {
        u16::from_le_bytes([self.byte(address), self.byte(address + 1)])
    }

    pub fn entry(&self) -> &'a [u8] {
        self.slice(ENTRY_START, 4)
    }

    pub fn logo(&self) -> &'a [u8] {
        self.slice(LOGO_START, LOGO_LEN)
    }

    pub fn title_bytes(&self) -> &'a [u8] {
        self.slice(TITLE_START, TITLE_LEN)
    }

    /// Title up to the first NUL, at most 15 characters. Bytes that are not
    /// printable ASCII come out as `?`.
    pub fn title(&self) -> String {
        self.title_bytes()[..TITLE_LEN - 1]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '?'
                }
            })
            .collect()
    }

    pub fn new_licensee_code(&self) -> u16 {
        self.word(NEW_LICENSEE_CODE)
    }

    pub fn sgb_flag(&self) -> u8 {
        self.byte(SGB_FLAG)
    }

    pub fn type_code(&self) -> u8 {
        self.byte(CARTRIDGE_TYPE)
    }

    pub fn rom_size_code(&self) -> u8 {
        self.byte(ROM_SIZE)
    }

    pub fn ram_size_code(&self) -> u8 {
        self.byte(RAM_SIZE)
    }

    pub fn destination_code(&self) -> u8 {
        self.byte(DESTINATION_CODE)
    }

    pub fn old_licensee_code(&self) -> u8 {
        self.byte(OLD_LICENSEE_CODE)
    }

    pub fn version(&self) -> u8 {
        self.byte(MASK_ROM_VERSION)
    }

    pub fn stored_checksum(&self) -> u8 {
        self.byte(HEADER_CHECKSUM)
    }

    pub fn global_checksum(&self) -> u16 {
        self.word(GLOBAL_CHECKSUM)
    }

    pub fn type_name(&self) -> &'static str {
        tables::resolve_type(self.type_code())
    }

    pub fn resolved_license(&self) -> &'static str {
        tables::resolve_license(self.new_licensee_code())
    }

    pub fn features(&self) -> CartridgeFeatures {
        CartridgeFeatures::from_type_code(self.type_code())
    }

    pub fn destination(&self) -> Destination {
        Destination::from(self.destination_code())
    }

    /// ROM size in KiB, `32 << code`. `None` if that does not fit in a `u64`.
    pub fn rom_size_kib(&self) -> Option<u64> {
        let code = self.rom_size_code();
        (code <= 58).then(|| 32u64 << code)
    }

    pub fn ram_size_kib(&self) -> Option<u32> {
        match self.ram_size_code() {
            0x00 => Some(0),
            0x01 => Some(2),
            0x02 => Some(8),
            0x03 => Some(32),
            0x04 => Some(128),
            0x05 => Some(64),
            _ => None,
        }
    }

    pub fn checksum(&self) -> HeaderChecksum {
        HeaderChecksum::compute(
            self.slice(CHECKSUM_START, CHECKSUM_LEN),
            self.stored_checksum(),
        )
    }
}
