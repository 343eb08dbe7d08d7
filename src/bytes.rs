use crate::{Error, ExhaustionPolicy};

/// A resumable cursor yielding successive runs of whole bytes from a
/// borrowed buffer.
///
/// This is the byte-granular sibling of [`BitCursor`]: same lifecycle,
/// no bit-level access. Runs are borrowed from the underlying slice
/// without copying.
///
/// [`BitCursor`]: crate::BitCursor
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
    exhaustion: ExhaustionPolicy,
}

impl<'a> ByteCursor<'a> {
    /// Creates a new [`ByteCursor`] over a byte slice with the
    /// truncating exhaustion policy.
    pub const fn new(data: &'a [u8]) -> Self {
        Self::with_policy(data, ExhaustionPolicy::Truncate)
    }

    /// Creates a new [`ByteCursor`] with an explicit exhaustion policy.
    pub const fn with_policy(data: &'a [u8], exhaustion: ExhaustionPolicy) -> Self {
        Self {
            data,
            pos: 0,
            exhaustion,
        }
    }

    /// Gets the total number of bytes in the underlying buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Indicates whether the underlying buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets the number of bytes consumed so far.
    #[inline]
    pub fn bytes_read(&self) -> usize {
        self.pos
    }

    /// Gets the number of unread bytes left in the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Indicates whether all content has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.data.len()
    }

    /// Requests the next `nbytes` bytes from the buffer.
    ///
    /// The returned run borrows from the underlying buffer and may
    /// outlive the cursor. A request for 0 bytes returns an empty
    /// slice and does not advance.
    ///
    /// Under [`ExhaustionPolicy::Truncate`], a request past the end of
    /// the buffer silently yields whatever remains. Under
    /// [`ExhaustionPolicy::Fail`], it returns [`Error::Exhausted`] and
    /// the position does not move.
    pub fn request(&mut self, nbytes: usize) -> Result<&'a [u8], Error> {
        let take = match self.exhaustion {
            ExhaustionPolicy::Truncate => nbytes.min(self.remaining()),
            ExhaustionPolicy::Fail => {
                if nbytes > self.remaining() {
                    return Err(Error::Exhausted {
                        requested: nbytes,
                        remaining: self.remaining(),
                    });
                }

                nbytes
            }
        };

        let run = &self.data[self.pos..self.pos + take];
        self.pos += take;

        log::trace!("read {} of {} bytes", self.pos, self.data.len());

        Ok(run)
    }
}
