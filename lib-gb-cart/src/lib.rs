pub use crate::cartridge::{load, load_with_observer, Cartridge, LoadError};
pub use crate::checksum::{ChecksumVerdict, HeaderChecksum};
pub use crate::header::{CartridgeFeatures, Destination, RomHeader};
pub use crate::info::CartridgeInfo;
pub use crate::load_events::{HexByte, HexWord, LoadEvent, LoadObserver, LogObserver};
pub use crate::tables::{license_name, resolve_license, resolve_type};

mod cartridge;
mod checksum;
pub mod header;
mod info;
mod load_events;
pub mod tables;
#[cfg(test)]
mod testsupport;
