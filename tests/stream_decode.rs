use std::io::{self, Cursor, ErrorKind, Read};

use anyhow::Result;
use bytes::{Buf, BytesMut};
use varint_codec::{
    BufMutVarint, BufVarint, Error, ReadVarint, VarintReader, VarintWriter, WriteVarint,
    encode_uvarint, read_svarint, read_uvarint,
};

/// Source whose every read fails.
struct BrokenSource;

impl Read for BrokenSource {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(ErrorKind::ConnectionReset, "source went away"))
    }
}

/// Source that hands out one byte per call to exercise short reads.
struct Trickle<'a>(&'a [u8]);

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let data = self.0;
        match (data.split_first(), buf.first_mut()) {
            (Some((&byte, rest)), Some(slot)) => {
                *slot = byte;
                self.0 = rest;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

#[test]
fn stream_matches_buffer_decoder() -> Result<()> {
    let values = [0u64, 1, 127, 128, 300, 16384, 1 << 49, u64::MAX];
    let mut bytes = Vec::new();
    for value in values {
        encode_uvarint(value, &mut bytes);
    }

    let mut cursor = Cursor::new(bytes.clone());
    for value in values {
        assert_eq!(read_uvarint(&mut cursor)?, value);
    }
    assert_eq!(cursor.position() as usize, bytes.len());

    let mut trickle = Trickle(&bytes);
    for value in values {
        assert_eq!(trickle.read_uvarint()?, value);
    }
    Ok(())
}

#[test]
fn stream_signed_round_trip() -> Result<()> {
    let mut sink = Vec::new();
    for value in [0, -1, 1, i64::MIN, i64::MAX] {
        sink.write_svarint(value)?;
    }
    let mut source = sink.as_slice();
    for value in [0, -1, 1, i64::MIN, i64::MAX] {
        assert_eq!(read_svarint(&mut source)?, value);
    }
    assert!(source.is_empty());
    Ok(())
}

#[test]
fn end_of_input_is_a_read_error() {
    let err = read_uvarint(&mut Cursor::new(vec![0x80])).unwrap_err();
    match err {
        Error::Read(inner) => assert_eq!(inner.kind(), ErrorKind::UnexpectedEof),
        other => panic!("unexpected error: {other:?}"),
    }

    let err = read_uvarint(&mut io::empty()).unwrap_err();
    assert!(matches!(err, Error::Read(_)));
    assert!(!err.is_malformed());
}

#[test]
fn failing_source_is_a_read_error() {
    let err = BrokenSource.read_uvarint().unwrap_err();
    match err {
        Error::Read(inner) => assert_eq!(inner.kind(), ErrorKind::ConnectionReset),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn stream_stops_after_ten_bytes() {
    let mut bytes = vec![0x80; 11];
    bytes.push(0x00);
    let mut cursor = Cursor::new(bytes);
    let err = read_uvarint(&mut cursor).unwrap_err();
    assert!(matches!(err, Error::Overflow { consumed: 10 }));
    assert_eq!(cursor.position(), 10);
}

#[test]
fn stream_rejects_oversized_tenth_byte() -> Result<()> {
    let mut bytes = vec![0xff; 9];
    bytes.push(0x02);
    let err = read_uvarint(&mut bytes.as_slice()).unwrap_err();
    assert!(matches!(err, Error::Overflow { consumed: 10 }));

    bytes[9] = 0x01;
    assert_eq!(read_uvarint(&mut bytes.as_slice())?, u64::MAX);
    Ok(())
}

#[test]
fn buf_decoding_advances_cursor() -> Result<()> {
    let mut out = BytesMut::new();
    assert_eq!(out.put_uvarint(300), 2);
    assert_eq!(out.put_svarint(-3), 1);
    assert_eq!(out.put_prefixed(b"abc"), 4);

    let mut buf = out.freeze();
    assert_eq!(buf.get_uvarint()?, 300);
    assert_eq!(buf.get_svarint()?, -3);
    assert_eq!(buf.get_uvarint()?, 3);
    assert_eq!(&buf[..], b"abc");
    Ok(())
}

#[test]
fn buf_decoding_spans_chunks() -> Result<()> {
    let head: &[u8] = &[0x80, 0x80];
    let tail: &[u8] = &[0x01, 0x05];
    let mut buf = Buf::chain(head, tail);
    assert_eq!(buf.get_uvarint()?, 16384);
    assert_eq!(buf.get_uvarint()?, 5);
    assert!(!buf.has_remaining());
    Ok(())
}

#[test]
fn buf_incomplete_keeps_position() {
    let mut buf: &[u8] = &[0xac];
    assert!(matches!(buf.get_uvarint(), Err(Error::Incomplete)));
    assert_eq!(buf.remaining(), 1);

    let head: &[u8] = &[0x80];
    let tail: &[u8] = &[0x80];
    let mut split = Buf::chain(head, tail);
    assert!(matches!(split.get_uvarint(), Err(Error::Incomplete)));
    assert_eq!(split.remaining(), 2);
}

#[test]
fn buf_split_incomplete_can_be_retried() -> Result<()> {
    let head: &[u8] = &[0xac];
    let tail: &[u8] = &[0x80];
    let mut split = Buf::chain(head, tail);
    assert!(matches!(split.get_uvarint(), Err(Error::Incomplete)));
    assert_eq!(split.remaining(), 2);

    // Retry from the start of the varint once the rest has arrived.
    let mut retry = split.chain(&[0x01][..]);
    assert_eq!(retry.get_uvarint()?, 0x2c | (1 << 14));
    assert!(!retry.has_remaining());
    Ok(())
}

#[test]
fn buf_overflow_ignores_chunk_boundaries() {
    let bytes = [0xff; 12];
    for cut in 1..bytes.len() {
        let mut split = Buf::chain(&bytes[..cut], &bytes[cut..]);
        assert!(
            matches!(split.get_uvarint(), Err(Error::Overflow { consumed: 11 })),
            "cut {cut}"
        );
        assert_eq!(split.remaining(), 12, "cut {cut}");
    }

    let mut tenth = [0xffu8; 10];
    tenth[9] = 0x02;
    let mut split = Buf::chain(&tenth[..4], &tenth[4..]);
    assert!(matches!(
        split.get_uvarint(),
        Err(Error::Overflow { consumed: 10 })
    ));
    assert_eq!(split.remaining(), 10);
}

#[test]
fn buf_decodes_across_many_small_chunks() -> Result<()> {
    let mut bytes = Vec::new();
    encode_uvarint(u64::MAX, &mut bytes);
    encode_uvarint(300, &mut bytes);
    let mut split = Buf::chain(&bytes[..3], &bytes[3..5])
        .chain(&bytes[5..9])
        .chain(&bytes[9..]);
    assert_eq!(split.get_uvarint()?, u64::MAX);
    assert_eq!(split.get_uvarint()?, 300);
    assert!(!split.has_remaining());
    Ok(())
}

#[test]
fn buf_overflow_is_reported() {
    let mut buf: &[u8] = &[0xff; 12];
    assert!(matches!(
        buf.get_uvarint(),
        Err(Error::Overflow { consumed: 11 })
    ));
}

#[test]
fn reader_tracks_position_and_payloads() -> Result<()> {
    let mut writer = VarintWriter::new(Vec::new());
    writer.write_uvarint(300)?;
    writer.write_svarint(-2)?;
    writer.write_str("Hello World")?;
    writer.write_prefixed(&[])?;
    assert_eq!(writer.bytes_written(), 2 + 1 + 12 + 1);
    let bytes = writer.finish()?;

    let mut reader = VarintReader::new(bytes.as_slice());
    assert_eq!(reader.read_uvarint()?, 300);
    assert_eq!(reader.position(), 2);
    assert_eq!(reader.read_svarint()?, -2);
    assert_eq!(reader.read_prefixed()?, b"Hello World");
    assert_eq!(reader.read_prefixed()?, b"");
    assert_eq!(reader.position(), 16);
    assert!(matches!(reader.read_uvarint(), Err(Error::Read(_))));
    Ok(())
}

#[test]
fn reader_rejects_long_prefix_before_reading_payload() -> Result<()> {
    let mut bytes = Vec::new();
    bytes.write_uvarint(5)?;
    bytes.extend_from_slice(b"12345");

    let mut reader = VarintReader::builder(bytes.as_slice())
        .max_prefixed_len(4)
        .build();
    assert_eq!(reader.options().max_prefixed_len, 4);
    let err = reader.read_prefixed().unwrap_err();
    assert!(matches!(err, Error::LengthLimit { len: 5, max: 4 }));
    assert!(err.is_malformed());
    assert_eq!(reader.position(), 1);
    assert_eq!(reader.get_ref().len(), 5);
    Ok(())
}

#[test]
fn reader_reports_truncated_payload() -> Result<()> {
    let mut bytes = Vec::new();
    bytes.write_uvarint(8)?;
    bytes.extend_from_slice(b"abc");
    let mut reader = VarintReader::new(bytes.as_slice());
    let mut out = b"keep".to_vec();
    assert!(matches!(
        reader.read_prefixed_into(&mut out),
        Err(Error::Read(_))
    ));
    assert_eq!(out, b"keep");
    Ok(())
}

#[test]
fn writer_enforces_payload_limit() -> Result<()> {
    let mut writer = VarintWriter::builder(Vec::new())
        .max_prefixed_len(2)
        .build();
    assert!(matches!(
        writer.write_prefixed(b"abc"),
        Err(Error::LengthLimit { len: 3, max: 2 })
    ));
    assert_eq!(writer.write_prefixed(b"ab")?, 3);
    assert_eq!(writer.get_ref().as_slice(), [0x02, b'a', b'b']);
    Ok(())
}
