use std::path::PathBuf;

use crate::{CartridgeInfo, HeaderChecksum};

#[derive(Copy, Clone, Eq, PartialEq)]
pub struct HexWord(pub u16);

impl std::fmt::Debug for HexWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::fmt::Display for HexWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

#[derive(Copy, Clone, Eq, PartialEq)]
pub struct HexByte(pub u8);

impl std::fmt::Debug for HexByte {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::fmt::Display for HexByte {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

#[derive(Debug)]
pub enum LoadEvent {
    Opened(PathBuf),
    RomRead { size: usize },
    TitleTerminated { original: HexByte },
    ChecksumComputed(HeaderChecksum),
    Loaded(Box<CartridgeInfo>),
}

impl std::fmt::Display for LoadEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Opened(path) => write!(f, "Opened: {}", path.display()),
            Self::RomRead { size } => write!(f, "RomRead{{size: {}}}", size),
            Self::TitleTerminated { original } => {
                write!(f, "TitleTerminated{{original: {}}}", original)
            }
            Self::ChecksumComputed(checksum) => write!(
                f,
                "ChecksumComputed{{accumulator: {}, verdict: {}}}",
                HexWord(checksum.accumulator()),
                checksum.verdict()
            ),
            Self::Loaded(info) => {
                writeln!(f, "Cartridge Loaded:")?;
                write!(f, "{}", info)
            }
        }
    }
}

/// Receives diagnostics while a cartridge is loaded.
pub trait LoadObserver {
    fn push_event(&mut self, event: LoadEvent);
}

impl LoadObserver for Vec<LoadEvent> {
    fn push_event(&mut self, event: LoadEvent) {
        self.push(event)
    }
}

/// Forwards load events to the `log` facade.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogObserver;

impl LoadObserver for LogObserver {
    fn push_event(&mut self, event: LoadEvent) {
        match &event {
            LoadEvent::TitleTerminated { .. }
            | LoadEvent::RomRead { .. }
            | LoadEvent::Loaded(_) => log::debug!("{}", event),
            LoadEvent::ChecksumComputed(checksum) if !checksum.passed() => {
                log::warn!("{}", event)
            }
            _ => log::info!("{}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formatting() {
        assert_eq!(HexByte(0x0A).to_string(), "0x0a");
        assert_eq!(format!("{:?}", HexWord(0x1F)), "0x001f");
    }

    #[test]
    fn events_display() {
        assert_eq!(
            LoadEvent::Opened(PathBuf::from("roms/tetris.gb")).to_string(),
            "Opened: roms/tetris.gb"
        );
        assert_eq!(
            LoadEvent::TitleTerminated {
                original: HexByte(0x80)
            }
            .to_string(),
            "TitleTerminated{original: 0x80}"
        );
        let checksum = HeaderChecksum::compute(&[0; 25], 0);
        assert_eq!(
            LoadEvent::ChecksumComputed(checksum).to_string(),
            "ChecksumComputed{accumulator: 0xffe7, verdict: FAILED}"
        );
    }

    #[test]
    fn vec_collects_events() {
        let mut events: Vec<LoadEvent> = Vec::new();
        events.push_event(LoadEvent::RomRead { size: 0x8000 });

        assert!(matches!(events[..], [LoadEvent::RomRead { size: 0x8000 }]));
    }
}
