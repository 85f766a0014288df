//! Length-prefixed text frames.
//!
//! Wire format: a 2-byte big-endian length followed by that many bytes of
//! UTF-8 text.

use crate::error::{NetplayError, NetplayErrorKind};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{instrument, trace};

/// Largest payload a frame can carry.
pub const MAX_FRAME_LEN: usize = u16::MAX as usize;

/// Writes one frame and flushes it.
///
/// # Errors
///
/// [`NetplayErrorKind::FrameTooLong`] if the text needs more than
/// [`MAX_FRAME_LEN`] bytes; I/O errors from the writer otherwise.
#[instrument(skip(writer), fields(len = text.len()))]
pub async fn write_frame<W>(writer: &mut W, text: &str) -> Result<(), NetplayError>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let len = u16::try_from(text.len())
        .map_err(|_| NetplayError::new(NetplayErrorKind::FrameTooLong(text.len())))?;

    let mut buf = Vec::with_capacity(2 + text.len());
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(text.as_bytes());

    writer.write_all(&buf).await?;
    writer.flush().await?;
    trace!("Frame written");
    Ok(())
}

/// Reads one frame.
///
/// # Errors
///
/// [`NetplayErrorKind::ConnectionClosed`] if the stream ends before a full
/// frame arrives, [`NetplayErrorKind::InvalidUtf8`] for non-text payloads.
#[instrument(skip(reader))]
pub async fn read_frame<R>(reader: &mut R) -> Result<String, NetplayError>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let len = reader.read_u16().await?;
    let mut buf = vec![0u8; usize::from(len)];
    reader.read_exact(&mut buf).await?;

    let text = String::from_utf8(buf)?;
    trace!(len, "Frame read");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_frame_layout() {
        let mut out = Vec::new();
        write_frame(&mut out, "YOUR_TURN").await.expect("write");
        assert_eq!(&out[..2], &[0, 9]);
        assert_eq!(&out[2..], b"YOUR_TURN");
    }

    #[tokio::test]
    async fn test_reads_back_to_back_frames() {
        let mut out = Vec::new();
        write_frame(&mut out, "BOARD|123456789").await.expect("write");
        write_frame(&mut out, "").await.expect("write");
        write_frame(&mut out, "Sorry, you lose.").await.expect("write");

        let mut input = out.as_slice();
        assert_eq!(read_frame(&mut input).await.expect("read"), "BOARD|123456789");
        assert_eq!(read_frame(&mut input).await.expect("read"), "");
        assert_eq!(read_frame(&mut input).await.expect("read"), "Sorry, you lose.");
    }

    #[tokio::test]
    async fn test_multibyte_length_counts_bytes() {
        let mut out = Vec::new();
        write_frame(&mut out, "é").await.expect("write");
        assert_eq!(&out[..2], &[0, 2]);
    }

    #[tokio::test]
    async fn test_oversized_frame_rejected() {
        let mut out = Vec::new();
        let text = "x".repeat(MAX_FRAME_LEN + 1);
        let err = write_frame(&mut out, &text).await.expect_err("too long");
        assert!(matches!(err.kind, NetplayErrorKind::FrameTooLong(n) if n == MAX_FRAME_LEN + 1));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_truncated_frame_is_connection_closed() {
        let bytes: &[u8] = &[0, 5, b'h', b'i'];
        let mut input = bytes;
        let err = read_frame(&mut input).await.expect_err("truncated");
        assert!(matches!(err.kind, NetplayErrorKind::ConnectionClosed));
    }

    #[tokio::test]
    async fn test_empty_stream_is_connection_closed() {
        let mut input: &[u8] = &[];
        let err = read_frame(&mut input).await.expect_err("eof");
        assert!(matches!(err.kind, NetplayErrorKind::ConnectionClosed));
    }

    #[tokio::test]
    async fn test_invalid_utf8_rejected() {
        let mut input: &[u8] = &[0, 2, 0xff, 0xfe];
        let err = read_frame(&mut input).await.expect_err("bad utf-8");
        assert!(matches!(err.kind, NetplayErrorKind::InvalidUtf8(_)));
    }
}
