use crate::header::{HEADER_END, TITLE_LEN, TITLE_START};

/// Builds in-memory ROM images with a header at 0x100.
#[derive(Debug, Clone)]
pub struct RomBuilder {
    rom: Vec<u8>,
}

impl Default for RomBuilder {
    fn default() -> Self {
        Self {
            rom: vec![0; HEADER_END],
        }
    }
}

impl RomBuilder {
    pub fn with_len(len: usize) -> Self {
        Self { rom: vec![0; len] }
    }

    pub fn title(self, title: &[u8]) -> Self {
        assert!(title.len() <= TITLE_LEN);
        self.bytes(TITLE_START, title)
    }

    pub fn byte(mut self, address: usize, value: u8) -> Self {
        self.rom[address] = value;
        self
    }

    pub fn bytes(mut self, address: usize, values: &[u8]) -> Self {
        self.rom[address..address + values.len()].copy_from_slice(values);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.rom
    }
}
