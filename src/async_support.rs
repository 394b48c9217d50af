//! Async counterparts of the stream decoder and writer helpers.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::encoding::{UvarintAccumulator, to_svarint, to_uvarint, zigzag_decode};
use crate::error::{Error, Result};

/// Reads an unsigned varint from an async source, one byte per read.
///
/// Shares the failure taxonomy of [`read_uvarint`](crate::read_uvarint):
/// source failures and early end of input are [`Error::Read`], malformed
/// varints are [`Error::Overflow`].
pub async fn read_uvarint_async<R>(reader: &mut R) -> Result<u64>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut acc = UvarintAccumulator::default();
    loop {
        let byte = reader.read_u8().await.map_err(Error::read)?;
        if let Some(value) = acc.push(byte)? {
            return Ok(value);
        }
    }
}

/// Reads a zig-zag encoded signed varint from an async source.
pub async fn read_svarint_async<R>(reader: &mut R) -> Result<i64>
where
    R: AsyncRead + Unpin + ?Sized,
{
    read_uvarint_async(reader).await.map(zigzag_decode)
}

/// Reads a length-prefixed payload, rejecting prefixes above `max_len`.
pub async fn read_prefixed_async<R>(reader: &mut R, max_len: usize) -> Result<Vec<u8>>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let announced = read_uvarint_async(reader).await?;
    let len = match usize::try_from(announced) {
        Ok(len) if len <= max_len => len,
        _ => {
            tracing::debug!(len = announced, max = max_len, "length prefix over limit");
            return Err(Error::LengthLimit {
                len: announced,
                max: max_len,
            });
        }
    };
    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload).await.map_err(Error::read)?;
    Ok(payload)
}

/// Writes `value` as an unsigned varint to an async sink.
pub async fn write_uvarint_async<W>(writer: &mut W, value: u64) -> Result<usize>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let encoded = to_uvarint(value);
    writer.write_all(&encoded).await.map_err(Error::write)?;
    Ok(encoded.len())
}

/// Writes `value` as a zig-zag encoded varint to an async sink.
pub async fn write_svarint_async<W>(writer: &mut W, value: i64) -> Result<usize>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let encoded = to_svarint(value);
    writer.write_all(&encoded).await.map_err(Error::write)?;
    Ok(encoded.len())
}

/// Writes `payload` preceded by its varint length to an async sink.
pub async fn write_prefixed_async<W>(writer: &mut W, payload: &[u8]) -> Result<usize>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let header = write_uvarint_async(writer, payload.len() as u64).await?;
    writer.write_all(payload).await.map_err(Error::write)?;
    Ok(header + payload.len())
}
