//! Bitstream Validation and Symbol Partitioning
//!
//! A [`Bitstream`] is an ordered sequence of binary digits parsed from a
//! `'0'`/`'1'` string. It is the only input representation the synthesizer
//! accepts: [`Bitstream::parse`] rejects anything outside the binary
//! alphabet, while [`Bitstream::sanitize`] is the collaborator-side filter
//! (drop non-binary characters, never fail) that UI layers apply before
//! handing text to the core.
//!
//! Partitioning into modulation symbols happens here too: [`Bitstream::symbols`]
//! yields non-overlapping left-to-right chunks of the requested width. The
//! final chunk may be short; schemes that need a fixed-width code pad it on
//! the right at interpretation time via [`Symbol::padded_value`].

use bitvec::prelude::*;

use crate::error::SynthesisError;

/// A validated sequence of binary digits
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitstream {
    bits: BitVec<u8, Msb0>,
}

impl Bitstream {
    /// Parse a string of `'0'`/`'1'` characters
    ///
    /// An empty string is a valid, empty bitstream. Any other character
    /// fails the whole parse with [`SynthesisError::InvalidInput`].
    pub fn parse(input: &str) -> Result<Self, SynthesisError> {
        let mut bits = BitVec::with_capacity(input.len());

        for (position, character) in input.char_indices() {
            match character {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(SynthesisError::InvalidInput { character, position }),
            }
        }

        Ok(Bitstream { bits })
    }

    /// Build a bitstream from arbitrary text by dropping every non-binary
    /// character
    ///
    /// This mirrors the input filter a UI applies before calling the core;
    /// it never fails.
    pub fn sanitize(input: &str) -> Self {
        let bits = input
            .chars()
            .filter_map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect();

        Bitstream { bits }
    }

    /// Number of bits in the stream
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Partition into symbols of `width` bits, left to right
    ///
    /// Chunks are non-overlapping and consume the entire stream; the final
    /// symbol is short when `width` does not divide the bit count.
    pub fn symbols(&self, width: usize) -> impl Iterator<Item = Symbol<'_>> {
        debug_assert!(width > 0, "symbol width must be at least 1 bit");
        self.bits.chunks(width).map(Symbol)
    }

    /// Number of symbols a partition of `width` bits produces
    pub fn symbol_count(&self, width: usize) -> usize {
        self.bits.len().div_ceil(width)
    }
}

/// One modulation unit: a chunk of consecutive bits from a [`Bitstream`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol<'a>(&'a BitSlice<u8, Msb0>);

impl Symbol<'_> {
    /// Number of bits actually present (a trailing symbol may be short)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bit at `index` within the symbol
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn bit(&self, index: usize) -> bool {
        self.0[index]
    }

    /// Integer value of the bits parsed in base 2, most significant first
    pub fn value(&self) -> u32 {
        self.0.iter().fold(0, |acc, bit| (acc << 1) | *bit as u32)
    }

    /// Integer value after right-padding with `0` bits up to `width`
    ///
    /// A short trailing symbol therefore resolves to a code ending in `0`,
    /// e.g. a lone `1` padded to width 2 becomes `0b10`.
    pub fn padded_value(&self, width: usize) -> u32 {
        (0..width).fold(0, |acc, i| {
            let bit = self.0.get(i).map(|b| *b as u32).unwrap_or(0);
            (acc << 1) | bit
        })
    }
}
