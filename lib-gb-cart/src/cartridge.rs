use std::fs::File;
use std::io::{self, Read};
use std::mem;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::header::{HEADER_END, TITLE_TERMINATOR};
use crate::{
    CartridgeInfo, HeaderChecksum, HexByte, LoadEvent, LoadObserver, LogObserver, RomHeader,
};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open {}: {}", .path.display(), .source)]
    OpenFailed { path: PathBuf, source: io::Error },
    #[error("Failed to read ROM data from {}: {}", .path.display(), .source)]
    ReadFailed { path: PathBuf, source: io::Error },
    #[error("ROM is {size} bytes, the header needs at least {required}")]
    BufferTooSmall { size: usize, required: usize },
}

/// A loaded ROM image. The header is a view into the owned buffer.
#[derive(Debug, Clone)]
pub struct Cartridge {
    rom: Vec<u8>,
}

impl Cartridge {
    pub fn from_rom(rom: Vec<u8>) -> Result<Self, LoadError> {
        Self::from_rom_with_observer(rom, &mut LogObserver)
    }

    pub fn from_rom_with_observer<O: LoadObserver>(
        mut rom: Vec<u8>,
        observer: &mut O,
    ) -> Result<Self, LoadError> {
        if rom.len() < HEADER_END {
            return Err(LoadError::BufferTooSmall {
                size: rom.len(),
                required: HEADER_END,
            });
        }

        // Terminated before the checksum runs, 0x143 is inside its range.
        let original = mem::replace(&mut rom[TITLE_TERMINATOR], 0);
        observer.push_event(LoadEvent::TitleTerminated {
            original: HexByte(original),
        });

        let cartridge = Self { rom };
        let header = cartridge.header();
        observer.push_event(LoadEvent::ChecksumComputed(header.checksum()));
        observer.push_event(LoadEvent::Loaded(Box::new(CartridgeInfo::from(&header))));

        Ok(cartridge)
    }

    pub fn header(&self) -> RomHeader<'_> {
        match RomHeader::overlay(&self.rom) {
            Some(header) => header,
            None => unreachable!("cartridge ROM is shorter than its header"),
        }
    }

    pub fn checksum(&self) -> HeaderChecksum {
        self.header().checksum()
    }

    pub fn info(&self) -> CartridgeInfo {
        CartridgeInfo::from(&self.header())
    }

    pub fn rom(&self) -> &[u8] {
        &self.rom
    }

    pub fn into_rom(self) -> Vec<u8> {
        self.rom
    }
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Cartridge, LoadError> {
    load_with_observer(path, &mut LogObserver)
}

pub fn load_with_observer<P: AsRef<Path>, O: LoadObserver>(
    path: P,
    observer: &mut O,
) -> Result<Cartridge, LoadError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|source| LoadError::OpenFailed {
        path: path.to_owned(),
        source,
    })?;
    observer.push_event(LoadEvent::Opened(path.to_owned()));

    let read_failed = |source| LoadError::ReadFailed {
        path: path.to_owned(),
        source,
    };
    let size = file.metadata().map_err(read_failed)?.len();
    let size = usize::try_from(size).map_err(|_| {
        read_failed(io::Error::new(
            io::ErrorKind::InvalidData,
            "ROM does not fit in memory",
        ))
    })?;

    let mut rom = vec![0; size];
    file.read_exact(&mut rom).map_err(read_failed)?;
    observer.push_event(LoadEvent::RomRead { size });

    Cartridge::from_rom_with_observer(rom, observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{HEADER_START, TITLE_LEN};
    use crate::testsupport::RomBuilder;
    use crate::ChecksumVerdict;

    #[test]
    fn rejects_buffer_shorter_than_header() {
        for len in [0, HEADER_START, HEADER_END - 1] {
            let result = Cartridge::from_rom(RomBuilder::with_len(len).build());

            assert!(matches!(
                result,
                Err(LoadError::BufferTooSmall { size, required: HEADER_END }) if size == len
            ));
        }
    }

    #[test]
    fn accepts_buffer_of_exactly_header_end() {
        let cartridge = Cartridge::from_rom(RomBuilder::default().build()).unwrap();

        assert_eq!(cartridge.rom().len(), HEADER_END);
    }

    #[test]
    fn terminates_title_in_owned_buffer() {
        let rom = RomBuilder::default().title(&[b'A'; TITLE_LEN]).build();
        let mut events: Vec<LoadEvent> = Vec::new();

        let cartridge = Cartridge::from_rom_with_observer(rom, &mut events).unwrap();

        assert_eq!(cartridge.rom()[TITLE_TERMINATOR], 0);
        assert_eq!(cartridge.header().title(), "A".repeat(TITLE_LEN - 1));
        assert!(matches!(
            events[0],
            LoadEvent::TitleTerminated {
                original: HexByte(b'A')
            }
        ));
    }

    #[test]
    fn checksum_uses_terminated_title() {
        // Passes only once 0x143 reads as zero.
        let rom = RomBuilder::default()
            .byte(TITLE_TERMINATOR, 0x01)
            .byte(0x0134, 0xE7)
            .build();

        let cartridge = Cartridge::from_rom(rom).unwrap();

        assert_eq!(cartridge.checksum().accumulator(), 0xFF00);
        assert_eq!(cartridge.checksum().verdict(), ChecksumVerdict::Passed);
    }

    #[test]
    fn failed_checksum_still_loads() {
        let mut events: Vec<LoadEvent> = Vec::new();

        let cartridge =
            Cartridge::from_rom_with_observer(RomBuilder::default().build(), &mut events).unwrap();

        assert_eq!(cartridge.checksum().verdict(), ChecksumVerdict::Failed);
        assert!(matches!(
            events[1],
            LoadEvent::ChecksumComputed(checksum) if !checksum.passed()
        ));
        assert!(matches!(
            &events[2],
            LoadEvent::Loaded(info) if info.checksum.accumulator() == 0xFFE7
        ));
    }

    #[test]
    fn info_matches_header() {
        let rom = RomBuilder::default()
            .title(b"ZELDA")
            .bytes(0x0144, &[0x01, 0x00])
            .byte(0x0147, 0x1B)
            .build();

        let info = Cartridge::from_rom(rom).unwrap().info();

        assert_eq!(info.title, "ZELDA");
        assert_eq!(info.type_name, "MBC5+RAM+BATTERY");
        assert_eq!(info.license_name, "Nintendo R&D1");
    }

    #[test]
    fn into_rom_returns_terminated_buffer() {
        let rom = RomBuilder::with_len(0x8000)
            .byte(TITLE_TERMINATOR, 0xC0)
            .byte(0x7FFF, 0xAA)
            .build();

        let rom = Cartridge::from_rom(rom).unwrap().into_rom();

        assert_eq!(rom.len(), 0x8000);
        assert_eq!(rom[TITLE_TERMINATOR], 0);
        assert_eq!(rom[0x7FFF], 0xAA);
    }

    #[test]
    fn missing_file_is_open_failure() {
        let mut events: Vec<LoadEvent> = Vec::new();

        let result = load_with_observer("does/not/exist.gb", &mut events);

        assert!(matches!(result, Err(LoadError::OpenFailed { .. })));
        assert!(events.is_empty());
    }
}
