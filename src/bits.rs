//! MSB-first bit packing.

/// Write bits into a byte buffer, most significant bit first.
#[derive(Debug, Default)]
pub struct BitWriter {
    buffer: Vec<u8>,
    current_byte: u8,
    bit_pos: u8,
}

impl BitWriter {
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(bytes),
            current_byte: 0,
            bit_pos: 0,
        }
    }

    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.current_byte |= 1 << (7 - self.bit_pos);
        }
        self.bit_pos += 1;
        if self.bit_pos == 8 {
            self.flush_byte();
        }
    }

    pub fn write_bits(&mut self, bits: &[bool]) {
        for &bit in bits {
            self.write_bit(bit);
        }
    }

    /// Writes all 8 bits of `byte`, big-endian.
    pub fn write_byte(&mut self, byte: u8) {
        for i in (0..8).rev() {
            self.write_bit((byte >> i) & 1 == 1);
        }
    }

    pub fn write_zeros(&mut self, count: usize) {
        for _ in 0..count {
            self.write_bit(false);
        }
    }

    pub fn bit_len(&self) -> usize {
        self.buffer.len() * 8 + self.bit_pos as usize
    }

    pub fn is_aligned(&self) -> bool {
        self.bit_pos == 0
    }

    fn flush_byte(&mut self) {
        self.buffer.push(self.current_byte);
        self.current_byte = 0;
        self.bit_pos = 0;
    }

    /// Finishes the buffer, zero-filling a trailing partial byte.
    pub fn into_bytes(mut self) -> Vec<u8> {
        if self.bit_pos > 0 {
            self.flush_byte();
        }
        self.buffer
    }
}

/// Read bits from a byte slice, most significant bit first.
#[derive(Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    byte_pos: usize,
    bit_pos: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            bit_pos: 0,
        }
    }

    pub fn read_bit(&mut self) -> Option<bool> {
        if self.byte_pos >= self.data.len() {
            return None;
        }
        let bit = (self.data[self.byte_pos] & (1 << (7 - self.bit_pos))) != 0;
        self.bit_pos += 1;
        if self.bit_pos == 8 {
            self.bit_pos = 0;
            self.byte_pos += 1;
        }
        Some(bit)
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | self.read_bit()? as u8;
        }
        Some(byte)
    }

    /// Bits left to read.
    pub fn remaining(&self) -> usize {
        (self.data.len() - self.byte_pos) * 8 - self.bit_pos as usize
    }
}

/// Renders bits as a string of `'0'` and `'1'`.
pub fn to_bit_string(bits: &[bool]) -> String {
    bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}
