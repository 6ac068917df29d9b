//! Stream API round-trips through independent decoders.

use flate2::read::ZlibDecoder;
use oxidoc_stream::{OxiDocError, StreamFilter, encode_batch, encode_stream, encoder_for};
use std::io::Read;

fn decode(filter: StreamFilter, data: &[u8]) -> Vec<u8> {
    match filter {
        StreamFilter::Flate => {
            let mut output = Vec::new();
            ZlibDecoder::new(data)
                .read_to_end(&mut output)
                .expect("zlib decoder rejected the stream");
            output
        }
        StreamFilter::Lzw => {
            weezl::decode::Decoder::with_tiff_size_switch(weezl::BitOrder::Msb, 8)
                .decode(data)
                .expect("LZW decoder rejected the stream")
        }
    }
}

fn content_stream(pages: usize) -> Vec<u8> {
    let mut data = Vec::new();
    for page in 0..pages {
        data.extend_from_slice(
            format!(
                "BT /F1 12 Tf 72 {} Td (Page {} of the document) Tj ET\n",
                720 - page % 50 * 12,
                page
            )
            .as_bytes(),
        );
    }
    data
}

#[test]
fn test_every_filter_roundtrips() {
    let source = content_stream(200);
    for filter in StreamFilter::ALL {
        let stream = encode_stream(filter, &source);
        assert_eq!(stream.filter, filter);
        assert!(stream.len() < source.len());
        assert_eq!(decode(filter, &stream.data), source);
    }
}

#[test]
fn test_empty_source_is_valid_stream() {
    for filter in StreamFilter::ALL {
        let stream = encode_stream(filter, b"");
        assert!(!stream.is_empty());
        assert!(decode(filter, &stream.data).is_empty());
    }
}

#[test]
fn test_batch_roundtrips() {
    let sources: Vec<Vec<u8>> = (1..40).map(content_stream).collect();
    let refs: Vec<&[u8]> = sources.iter().map(Vec::as_slice).collect();

    for filter in StreamFilter::ALL {
        let streams = encode_batch(filter, &refs).unwrap();
        assert_eq!(streams.len(), sources.len());
        for (stream, source) in streams.iter().zip(&sources) {
            assert_eq!(&decode(filter, &stream.data), source);
        }
    }
}

#[test]
fn test_batch_matches_sequential() {
    let sources: Vec<Vec<u8>> = (1..20).map(|n| content_stream(n * 3)).collect();
    let refs: Vec<&[u8]> = sources.iter().map(Vec::as_slice).collect();
    let batch = encode_batch(StreamFilter::Flate, &refs).unwrap();
    for (stream, source) in batch.iter().zip(&refs) {
        assert_eq!(stream, &encode_stream(StreamFilter::Flate, source));
    }
}

#[test]
fn test_empty_batch_is_error() {
    assert!(matches!(
        encode_batch(StreamFilter::Lzw, &[]),
        Err(OxiDocError::EmptyBatch)
    ));
}

#[test]
fn test_dictionary_length_matches_data() {
    let stream = encode_stream(StreamFilter::Lzw, &content_stream(10));
    assert_eq!(
        stream.dictionary(),
        format!("<< /Length {} /Filter /LZWDecode >>", stream.data.len())
    );
}

#[test]
fn test_boxed_encoders_are_reusable() {
    let mut encoder = encoder_for(StreamFilter::Flate);
    let a = encoder.encode(b"first stream");
    let b = encoder.encode(b"first stream");
    assert_eq!(a, b);
}
