use bitvec::{field::BitField, order::Msb0, slice::BitSlice, vec::BitVec};
use funty::Integral;

use crate::{CursorOptions, Error, ExhaustionPolicy};

/// A run of data extracted from a [`BitCursor`].
///
/// Byte-aligned runs are repacked into whole bytes when the cursor is
/// configured for it; every other run is rendered as a string of `'0'`
/// and `'1'` characters in extraction order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Chunk {
    /// Bits rendered as text, most significant first.
    Bits(String),
    /// Whole bytes repacked from a byte-aligned run.
    Bytes(Vec<u8>),
}

impl Chunk {
    /// Gets the number of bits spanned by this chunk.
    #[inline]
    pub fn bit_len(&self) -> usize {
        match self {
            Self::Bits(bits) => bits.len(),
            Self::Bytes(bytes) => bytes.len() << 3,
        }
    }

    /// Indicates whether the chunk holds no data at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bit_len() == 0
    }

    /// Borrows the textual bit-string, if this is a [`Chunk::Bits`].
    #[inline]
    pub fn as_bits(&self) -> Option<&str> {
        match self {
            Self::Bits(bits) => Some(bits),
            Self::Bytes(..) => None,
        }
    }

    /// Borrows the repacked bytes, if this is a [`Chunk::Bytes`].
    #[inline]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bits(..) => None,
            Self::Bytes(bytes) => Some(bytes),
        }
    }

    /// Consumes the chunk and returns its repacked bytes, if this is a
    /// [`Chunk::Bytes`].
    #[inline]
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Bits(..) => None,
            Self::Bytes(bytes) => Some(bytes),
        }
    }
}

/// A resumable cursor yielding successive runs of bits from a fixed
/// buffer.
///
/// The buffer is expanded into a bit sequence with big bit order: the
/// most significant bit of every input byte comes first. The cursor
/// holds its position between calls, so consumers drive it purely
/// through sequential [`BitCursor::request`] calls.
///
/// Ownership of the data buffer must be transferred to this type;
/// [`BitCursor::into_inner`] can be used to reclaim the memory.
#[derive(Debug)]
pub struct BitCursor {
    bits: BitVec<u8, Msb0>,

    // Number of bits consumed off the front of `bits` so far.
    // Only ever grows, and never past `bits.len()`.
    pos: usize,

    options: CursorOptions,
}

impl BitCursor {
    /// Constructs a new [`BitCursor`] over an owned byte buffer with
    /// the default [`CursorOptions`].
    pub fn new(data: Vec<u8>) -> Self {
        Self::with_options(data, CursorOptions::default())
    }

    /// Constructs a new [`BitCursor`] over an owned byte buffer with
    /// explicit options.
    pub fn with_options(data: Vec<u8>, options: CursorOptions) -> Self {
        Self::from_bits(BitVec::from_vec(data), options)
    }

    /// Constructs a [`BitCursor`] directly over a bit sequence.
    ///
    /// This is the constructor for buffers which are not a whole number
    /// of bytes long.
    pub fn from_bits(bits: BitVec<u8, Msb0>, options: CursorOptions) -> Self {
        Self {
            bits,
            pos: 0,
            options,
        }
    }

    /// Gets the total number of bits in the underlying buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Indicates whether the underlying buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Gets the number of bits consumed so far.
    #[inline]
    pub fn bits_read(&self) -> usize {
        self.pos
    }

    /// Gets the number of unread bits left in the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.bits.len() - self.pos
    }

    /// Indicates whether all content has been consumed.
    ///
    /// An exhausted cursor is a steady state, not a failure; further
    /// requests yield empty results under [`ExhaustionPolicy::Truncate`].
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.bits.len()
    }

    /// Consumes the [`BitCursor`] and returns the byte buffer it was
    /// constructed over.
    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.bits.into_vec()
    }

    /// Requests the next `nbits` bits from the buffer.
    ///
    /// Runs that are a nonzero multiple of 8 bits are repacked into
    /// whole bytes when the cursor was configured with `convert_bytes`;
    /// every other run comes back as a textual bit-string. A request
    /// for 0 bits returns an empty bit-string and does not advance.
    ///
    /// Under [`ExhaustionPolicy::Truncate`], a request past the end of
    /// the buffer silently yields whatever remains. Under
    /// [`ExhaustionPolicy::Fail`], it returns [`Error::Exhausted`] and
    /// the position does not move.
    pub fn request(&mut self, nbits: usize) -> Result<Chunk, Error> {
        let take = match self.options.exhaustion {
            ExhaustionPolicy::Truncate => nbits.min(self.remaining()),
            ExhaustionPolicy::Fail => {
                if nbits > self.remaining() {
                    return Err(Error::Exhausted {
                        requested: nbits,
                        remaining: self.remaining(),
                    });
                }

                nbits
            }
        };

        let run = &self.bits[self.pos..self.pos + take];
        self.pos += take;

        log::trace!("read {}.{} bytes ({} bits)", self.pos >> 3, self.pos & 7, self.pos);

        if self.options.convert_bytes && take != 0 && take % 8 == 0 {
            let bytes = run.chunks_exact(8).map(|byte| byte.load_be::<u8>()).collect();
            Ok(Chunk::Bytes(bytes))
        } else {
            Ok(Chunk::Bits(render_bits(run)))
        }
    }

    /// Reads the next `nbits` bits into an integer, most significant
    /// bit first.
    ///
    /// Unlike [`BitCursor::request`], an under-supplied read always
    /// fails with [`Error::Exhausted`] regardless of the configured
    /// policy; a truncated integer has no meaningful value. The
    /// position does not move on failure.
    ///
    /// # Panics
    ///
    /// Panics in debug mode when `nbits` is zero or overflows the
    /// capacity of the target type.
    pub fn read_int<I: Integral>(&mut self, nbits: u32) -> Result<I, Error> {
        debug_assert!(
            0 < nbits && nbits <= I::BITS,
            "bit count overflows capacity of target type"
        );

        let nbits = nbits as usize;
        if nbits > self.remaining() {
            return Err(Error::Exhausted {
                requested: nbits,
                remaining: self.remaining(),
            });
        }

        let value = self.bits[self.pos..self.pos + nbits].load_be();
        self.pos += nbits;

        log::trace!("read {}.{} bytes ({} bits)", self.pos >> 3, self.pos & 7, self.pos);

        Ok(value)
    }
}

fn render_bits(run: &BitSlice<u8, Msb0>) -> String {
    run.iter().map(|bit| if *bit { '1' } else { '0' }).collect()
}
