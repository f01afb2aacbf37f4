pub const ESC: u8 = 0x1b;
pub const FORM_FEED: u8 = 0x0c;
/// The two bytes following ESC that open a raster graphics sequence.
pub const RASTER_INTRODUCER: [u8; 2] = *b"*b";

/// What a byte of a raster escape sequence asks the reader to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    /// `m`: select the compression format for the following blocks.
    SelectCompression(u32),
    /// `w`: the next N bytes are a block of raster data.
    TransferRasterData(u32),
}

/// Parameter parsing state of an `ESC * b` sequence.
///
/// Lowercase letters end one parameter and start the next, uppercase letters
/// end the whole sequence. Several parameters may share one introducer,
/// e.g. `ESC * b 1030 m 42 W`.
#[derive(Debug, Clone, Default)]
pub struct RasterSequence {
    active: bool,
    number: u32,
}

impl RasterSequence {
    pub fn begin(&mut self) {
        self.active = true;
        self.number = 0;
    }

    pub fn feed(&mut self, byte: u8) -> Command {
        if !self.active {
            return Command::None;
        }
        let command = match byte {
            b'0'..=b'9' => {
                self.number = self
                    .number
                    .wrapping_mul(10)
                    .wrapping_add((byte - b'0') as u32);
                Command::None
            }
            b'm' | b'M' => Command::SelectCompression(self.number),
            b'w' | b'W' => Command::TransferRasterData(self.number),
            _ => Command::None,
        };
        match byte {
            b'`'..=b'~' => self.number = 0,
            b'@'..=b'^' => self.active = false,
            _ => {}
        }
        command
    }
}
