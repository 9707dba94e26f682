//! Property tests for cursor, round-trip and seek behavior.

use bufferio::{Buffer, BufferError, ByteOrder, Complex, FixedLayout, Whence};
use proptest::prelude::*;

#[derive(Debug, Default, Clone, PartialEq, FixedLayout)]
struct Sample {
    a: i8,
    b: u16,
    c: i32,
    d: u64,
    e: f64,
    f: Complex<f32>,
    g: [i16; 3],
}

fn sample() -> impl Strategy<Value = Sample> {
    (
        any::<i8>(),
        any::<u16>(),
        any::<i32>(),
        any::<u64>(),
        -1.0e12f64..1.0e12,
        (-1.0e6f32..1.0e6, -1.0e6f32..1.0e6),
        any::<[i16; 3]>(),
    )
        .prop_map(|(a, b, c, d, e, (re, im), g)| Sample {
            a,
            b,
            c,
            d,
            e,
            f: Complex::new(re, im),
            g,
        })
}

fn byte_order() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::LittleEndian), Just(ByteOrder::BigEndian)]
}

proptest! {
    #[test]
    fn write_at_then_read_at(
        len in 1usize..256,
        data in prop::collection::vec(any::<u8>(), 0..300),
        offset_seed in any::<usize>(),
    ) {
        let offset = offset_seed % len;
        let mut buf = Buffer::with_capacity(len);
        let written = buf.write_at(&data, offset).unwrap();
        prop_assert_eq!(written, data.len().min(len - offset));

        let mut out = vec![0u8; data.len()];
        if data.is_empty() {
            prop_assert_eq!(buf.read_at(&mut out, offset), Ok(0));
        } else {
            let read = buf.read_at(&mut out, offset).unwrap();
            prop_assert_eq!(read, written);
            prop_assert_eq!(&out[..read], &data[..written]);
        }
        prop_assert_eq!(buf.position(), 0);
    }

    #[test]
    fn out_of_range_transfers_nothing(
        len in 0usize..64,
        extra in 0usize..64,
        data in prop::collection::vec(1u8..=255, 1..32),
    ) {
        let mut buf = Buffer::with_capacity(len);
        let offset = len + extra;
        prop_assert_eq!(buf.write_at(&data, offset), Err(BufferError::Overrun));
        let mut out = vec![0u8; data.len()];
        prop_assert_eq!(buf.read_at(&mut out, offset), Err(BufferError::EndOfData));
        prop_assert!(buf.as_bytes().iter().all(|&b| b == 0));
        prop_assert!(out.iter().all(|&b| b == 0));
    }

    #[test]
    fn sequential_chunks_reassemble(
        chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 1..24), 0..16),
        slack in 0usize..8,
    ) {
        let stream: Vec<u8> = chunks.concat();
        let mut buf = Buffer::with_capacity(stream.len() + slack);
        for chunk in &chunks {
            prop_assert_eq!(buf.write(chunk), Ok(chunk.len()));
        }
        prop_assert_eq!(buf.position(), stream.len());

        let mut reader = Buffer::from_bytes(buf.into_inner());
        let mut replay = Vec::with_capacity(stream.len());
        for chunk in &chunks {
            let mut part = vec![0u8; chunk.len()];
            prop_assert_eq!(reader.read(&mut part), Ok(chunk.len()));
            replay.extend_from_slice(&part);
        }
        prop_assert_eq!(replay, stream);
    }

    #[test]
    fn cursor_is_capped_at_len(
        len in 0usize..64,
        sizes in prop::collection::vec(0usize..40, 1..12),
    ) {
        let mut buf = Buffer::with_capacity(len);
        let mut expected = 0usize;
        for size in sizes {
            let data = vec![0xAAu8; size];
            match buf.write(&data) {
                Ok(n) => {
                    prop_assert_eq!(n, size.min(len - expected));
                    expected += n;
                }
                Err(err) => {
                    prop_assert_eq!(err, BufferError::Overrun);
                    prop_assert_eq!(expected, len);
                }
            }
            prop_assert_eq!(buf.position(), expected);
        }
        prop_assert!(buf.position() <= len);
        if buf.position() == len {
            prop_assert_eq!(buf.write(&[1]), Err(BufferError::Overrun));
            prop_assert_eq!(buf.read(&mut [0u8; 1]), Err(BufferError::EndOfData));
        }
    }

    #[test]
    fn rewind_and_read_everything(
        data in prop::collection::vec(any::<u8>(), 1..128),
        skip_seed in any::<usize>(),
    ) {
        let mut buf = Buffer::from_bytes(data.clone());
        let mut sink = vec![0u8; skip_seed % data.len()];
        buf.read(&mut sink).unwrap();

        prop_assert_eq!(buf.seek(0, Whence::Start), Ok(0));
        let mut out = vec![0u8; data.len()];
        prop_assert_eq!(buf.read(&mut out), Ok(data.len()));
        prop_assert_eq!(out, data);
    }

    #[test]
    fn relative_seek(
        len in 1usize..128,
        start_seed in any::<usize>(),
        k in -256i64..256,
    ) {
        let mut buf = Buffer::with_capacity(len);
        let start = start_seed % len;
        buf.seek(start as i64, Whence::Start).unwrap();

        let target = start as i64 + k;
        let result = buf.seek(k, Whence::Current);
        if target >= len as i64 {
            prop_assert_eq!(result, Err(BufferError::Overrun));
            prop_assert_eq!(buf.position(), start);
        } else if target < 0 {
            prop_assert_eq!(result, Err(BufferError::InvalidArgument("negative position")));
            prop_assert_eq!(buf.position(), start);
        } else {
            prop_assert_eq!(result, Ok(target as usize));
            prop_assert_eq!(buf.position(), target as usize);
        }
    }

    #[test]
    fn end_relative_seek_always_overruns(len in 0usize..64, offset in any::<i64>()) {
        let mut buf = Buffer::with_capacity(len);
        prop_assert_eq!(buf.seek(offset, Whence::End), Err(BufferError::Overrun));
        prop_assert_eq!(buf.position(), 0);
    }

    #[test]
    fn structured_roundtrip(value in sample(), order in byte_order()) {
        let mut buf = Buffer::with_capacity(value.encoded_len());
        prop_assert_eq!(buf.write_data(order, &value), Ok(value.encoded_len()));

        let reader = Buffer::from_bytes(buf.into_inner());
        let mut decoded = Sample::default();
        reader.read_data(order, &mut decoded).unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn sequence_roundtrip(
        words in prop::collection::vec(any::<u32>(), 0..32),
        order in byte_order(),
    ) {
        let mut buf = Buffer::with_capacity(words.len() * 4 + 1);
        prop_assert_eq!(buf.write_data(order, &words), Ok(words.len() * 4));

        buf.reset();
        let mut decoded = vec![0u32; words.len()];
        buf.read_data(order, &mut decoded).unwrap();
        prop_assert_eq!(decoded, words);
    }
}
