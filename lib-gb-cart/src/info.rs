use crate::{Destination, HeaderChecksum, HexByte, HexWord, RomHeader};

/// Owned summary of a decoded header, used for reporting.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CartridgeInfo {
    pub title: String,
    pub type_code: u8,
    pub type_name: &'static str,
    pub rom_size_kib: Option<u64>,
    pub ram_size_code: u8,
    pub ram_size_kib: Option<u32>,
    pub new_licensee_code: u16,
    pub old_licensee_code: u8,
    pub license_name: &'static str,
    pub destination: Destination,
    pub sgb_flag: u8,
    pub version: u8,
    pub global_checksum: u16,
    pub checksum: HeaderChecksum,
}

impl From<&RomHeader<'_>> for CartridgeInfo {
    fn from(header: &RomHeader<'_>) -> Self {
        Self {
            title: header.title(),
            type_code: header.type_code(),
            type_name: header.type_name(),
            rom_size_kib: header.rom_size_kib(),
            ram_size_code: header.ram_size_code(),
            ram_size_kib: header.ram_size_kib(),
            new_licensee_code: header.new_licensee_code(),
            old_licensee_code: header.old_licensee_code(),
            license_name: header.resolved_license(),
            destination: header.destination(),
            sgb_flag: header.sgb_flag(),
            version: header.version(),
            global_checksum: header.global_checksum(),
            checksum: header.checksum(),
        }
    }
}

impl std::fmt::Display for CartridgeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\t Title    : {}", self.title)?;
        writeln!(
            f,
            "\t Type     : {} ({})",
            HexByte(self.type_code),
            self.type_name
        )?;
        match self.rom_size_kib {
            Some(kib) => writeln!(f, "\t ROM Size : {} KB", kib)?,
            None => writeln!(f, "\t ROM Size : ???")?,
        }
        match self.ram_size_kib {
            Some(kib) => writeln!(
                f,
                "\t RAM Size : {} ({} KB)",
                HexByte(self.ram_size_code),
                kib
            )?,
            None => writeln!(f, "\t RAM Size : {}", HexByte(self.ram_size_code))?,
        }
        writeln!(
            f,
            "\t LIC Code : {} ({})",
            HexWord(self.new_licensee_code),
            self.license_name
        )?;
        writeln!(f, "\t Old LIC  : {}", HexByte(self.old_licensee_code))?;
        writeln!(f, "\t Dest     : {}", self.destination)?;
        writeln!(f, "\t SGB Flag : {}", HexByte(self.sgb_flag))?;
        writeln!(f, "\t ROM Vers : {}", HexByte(self.version))?;
        writeln!(f, "\t Checksum : {}", self.checksum)?;
        write!(f, "\t Global   : {}", HexWord(self.global_checksum))
    }
}
