//! Bit-level reader and writer for the fixed-width token image.

/// Size of a packed token image in bytes
pub(crate) const TOKEN_BYTES: usize = 16;

/// MSB-first bit writer over a fixed 16-byte token image.
pub(crate) struct BitWriter {
    bytes: [u8; TOKEN_BYTES],
    bit_offset: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self {
            bytes: [0; TOKEN_BYTES],
            bit_offset: 0,
        }
    }

    /// Write N bits from a u64 value (MSB-first). Returns `false` when the
    /// value does not fit in `count` bits or the image is full; nothing is
    /// written in that case.
    pub fn write_bits(&mut self, value: u64, count: usize) -> bool {
        if count > 64 || (count < 64 && value >> count != 0) {
            return false;
        }
        if self.bit_offset + count > TOKEN_BYTES * 8 {
            return false;
        }

        for i in (0..count).rev() {
            let bit = ((value >> i) & 1) as u8;
            let byte_idx = self.bit_offset / 8;
            let bit_idx = 7 - (self.bit_offset % 8); // Write from MSB (bit 7) down to LSB (bit 0)

            if bit == 1 {
                self.bytes[byte_idx] |= 1 << bit_idx;
            }
            self.bit_offset += 1;
        }

        true
    }

    /// Bits written so far
    pub fn bits_written(&self) -> usize {
        self.bit_offset
    }

    /// Get the final image
    pub fn finish(self) -> [u8; TOKEN_BYTES] {
        self.bytes
    }
}

/// MSB-first bit reader over a 16-byte token image.
pub(crate) struct BitReader {
    bytes: [u8; TOKEN_BYTES],
    bit_offset: usize,
}

impl BitReader {
    pub fn new(bytes: [u8; TOKEN_BYTES]) -> Self {
        Self {
            bytes,
            bit_offset: 0,
        }
    }

    /// Read N bits as a u64 value (MSB-first)
    /// Bits are read from the image and assembled with first bit = MSB
    pub fn read_bits(&mut self, count: usize) -> Option<u64> {
        if count > 64 || self.bit_offset + count > TOKEN_BYTES * 8 {
            return None;
        }

        let mut result = 0u64;
        for _ in 0..count {
            let byte_idx = self.bit_offset / 8;
            let bit_idx = 7 - (self.bit_offset % 8); // Read from MSB (bit 7) down to LSB (bit 0)

            let bit = (self.bytes[byte_idx] >> bit_idx) & 1;
            result = (result << 1) | (bit as u64);
            self.bit_offset += 1;
        }

        Some(result)
    }
}
