extern crate std;

use core::ptr;
use std::io::{IoSlice, Write};

use crate::{Allocator, FixedVec, GrowVec, HybridVec};

/// Write is implemented for `FixedVec<u8, N>` by appending to the vector.
///
/// Only what fits is written; once the vector is full, [`Write::write`]
/// returns `Ok(0)`.
impl<const N: usize> Write for FixedVec<u8, N> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let len = self.len();
        let num = core::cmp::min(N - len, buf.len());

        unsafe {
            ptr::copy_nonoverlapping(buf.as_ptr(), self.as_mut_ptr().add(len), num);
            self.set_len(len + num);
        }

        Ok(num)
    }

    #[inline(always)]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    #[inline]
    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> std::io::Result<usize> {
        let mut num = 0;
        for buf in bufs {
            if self.is_full() {
                break;
            }
            num += self.write(buf)?;
        }
        Ok(num)
    }
}

/// Write is implemented for `GrowVec<u8, I, A>` by appending to the vector.
/// The vector will grow as needed.
impl<const I: usize, A: Allocator> Write for GrowVec<u8, I, A> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.try_reserve(buf.len()).map_err(std::io::Error::other)?;
        self.extend_from_slice(buf);
        Ok(buf.len())
    }

    #[inline(always)]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    #[inline]
    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> std::io::Result<usize> {
        let num = bufs.iter().map(|b| b.len()).sum::<usize>();
        self.try_reserve(num).map_err(std::io::Error::other)?;
        for buf in bufs {
            self.extend_from_slice(buf);
        }
        Ok(num)
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        Write::write(self, buf)?;
        Ok(())
    }
}

/// Write is implemented for `HybridVec<u8, N, MIN, A>` by appending to the
/// vector, promoting it when the fixed block fills up.
impl<const N: usize, const MIN: usize, A: Allocator + Clone> Write for HybridVec<u8, N, MIN, A> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.try_reserve(buf.len()).map_err(std::io::Error::other)?;
        self.extend_from_slice(buf);
        Ok(buf.len())
    }

    #[inline(always)]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    #[inline]
    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> std::io::Result<usize> {
        let num = bufs.iter().map(|b| b.len()).sum::<usize>();
        self.try_reserve(num).map_err(std::io::Error::other)?;
        for buf in bufs {
            self.extend_from_slice(buf);
        }
        Ok(num)
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        Write::write(self, buf)?;
        Ok(())
    }
}
