//! Permissive byte-to-code-point decoder.
//!
//! Mirrors the classification stage in front of the matcher:
//! - ASCII bytes and completed multi-byte sequences yield a code point.
//! - A continuation byte outside a sequence is flagged and ignored.
//! - A start byte inside a sequence is flagged; the partial sequence is
//!   dropped and decoding restarts at the new byte.
//! - Lead bytes `0xC0`, `0xC1` and `0xF5..=0xF7` are flagged but decoded.
//! - Bytes `0xF8..=0xFF` are flagged and ignored.
//! - A sequence cut short by the end of the string is flagged.
//!
//! Overlong forms not visible from the lead byte, surrogates, and code points
//! above `0x10FFFF` decode without an error.

/// Streaming UTF-8 decoder with a sticky error flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Utf8Decoder {
    code_point: u32,
    pending: u8,
    error: bool,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one byte, returning a code point when one is complete.
    pub fn push(&mut self, byte: u8) -> Option<u32> {
        match byte {
            0x00..=0x7F => {
                self.interrupt();
                Some(byte as u32)
            }
            0x80..=0xBF => {
                if self.pending == 0 {
                    self.error = true;
                    return None;
                }
                self.code_point = (self.code_point << 6) | (byte & 0x3F) as u32;
                self.pending -= 1;
                (self.pending == 0).then_some(self.code_point)
            }
            0xC0..=0xDF => {
                self.interrupt();
                self.error |= byte <= 0xC1;
                self.start(byte & 0x1F, 1);
                None
            }
            0xE0..=0xEF => {
                self.interrupt();
                self.start(byte & 0x0F, 2);
                None
            }
            0xF0..=0xF7 => {
                self.interrupt();
                self.error |= byte >= 0xF5;
                self.start(byte & 0x07, 3);
                None
            }
            0xF8..=0xFF => {
                self.interrupt();
                self.error = true;
                None
            }
        }
    }

    /// End of string: report whether any error was seen and reset.
    pub fn finish(&mut self) -> bool {
        let error = self.error || self.pending != 0;
        *self = Self::default();
        error
    }

    /// Whether an error was seen since the last [`Utf8Decoder::finish`].
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Whether a multi-byte sequence is in progress.
    pub fn is_pending(&self) -> bool {
        self.pending != 0
    }

    fn start(&mut self, bits: u8, continuations: u8) {
        self.code_point = bits as u32;
        self.pending = continuations;
    }

    /// A new start byte arrived; flag and drop any partial sequence.
    fn interrupt(&mut self) {
        if self.pending != 0 {
            self.error = true;
            self.pending = 0;
            self.code_point = 0;
        }
    }
}
