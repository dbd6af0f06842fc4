use core::sync::atomic::{AtomicUsize, Ordering};

use heapless::Vec;

use super::error::Error;
use super::http::parse_url;
use super::ipd::{FrameDecoder, FrameScan, scan_frame};
use super::session::ResponseSession;
use super::{RESPONSE_CAPACITY, RX_BUFFER_CAPACITY};

#[test]
fn scan_locates_complete_frame() {
    assert_eq!(
        scan_frame(b"+IPD5:hello\n"),
        FrameScan::Complete {
            declared: Some(5),
            payload_start: 6,
            payload_end: 11,
            consumed: 12,
        }
    );
}

#[test]
fn scan_accepts_comma_before_length() {
    assert_eq!(
        scan_frame(b"+IPD,5:hello\n"),
        FrameScan::Complete {
            declared: Some(5),
            payload_start: 7,
            payload_end: 12,
            consumed: 13,
        }
    );
}

#[test]
fn scan_waits_for_delimiter_and_terminator() {
    assert_eq!(scan_frame(b"+IPD5"), FrameScan::Partial);
    assert_eq!(scan_frame(b"+IPD5:hel"), FrameScan::Partial);
    assert_eq!(scan_frame(b"OK\r\n"), FrameScan::None);
}

#[test]
fn scan_consumes_marker_line_without_delimiter() {
    // The only delimiter is on a later line; the marker line yields no payload.
    assert_eq!(
        scan_frame(b"+IPDx\nlater:"),
        FrameScan::Complete {
            declared: None,
            payload_start: 5,
            payload_end: 5,
            consumed: 6,
        }
    );
}

#[test]
fn drains_all_frames_in_one_delivery() {
    let mut decoder = FrameDecoder::new();
    let mut body: Vec<u8, RESPONSE_CAPACITY> = Vec::new();
    decoder.extend(b"+IPD5:hello\n+IPD5:world\n").unwrap();
    decoder.drain_into(&mut body).unwrap();
    assert_eq!(&body[..], b"helloworld");
    assert_eq!(decoder.pending(), 0);
}

#[test]
fn partial_frame_is_kept_intact() {
    let mut decoder = FrameDecoder::new();
    let mut body: Vec<u8, RESPONSE_CAPACITY> = Vec::new();

    decoder.extend(b"+IPD5:he").unwrap();
    decoder.drain_into(&mut body).unwrap();
    assert!(body.is_empty());
    assert_eq!(decoder.pending(), 8);

    decoder.extend(b"llo\n").unwrap();
    decoder.drain_into(&mut body).unwrap();
    assert_eq!(&body[..], b"hello");
    assert_eq!(decoder.pending(), 0);
}

#[test]
fn chatter_before_marker_is_consumed_with_the_frame() {
    let mut decoder = FrameDecoder::new();
    let mut body: Vec<u8, RESPONSE_CAPACITY> = Vec::new();
    decoder.extend(b"WIFI GOT IP\r\n+IPD2:hi\n").unwrap();
    decoder.drain_into(&mut body).unwrap();
    assert_eq!(&body[..], b"hi");
    assert_eq!(decoder.pending(), 0);
}

fn decode_in_chunks(stream: &[u8], chunk: usize) -> (Vec<u8, RESPONSE_CAPACITY>, bool) {
    let mut decoder = FrameDecoder::new();
    let mut body: Vec<u8, RESPONSE_CAPACITY> = Vec::new();
    for piece in stream.chunks(chunk) {
        decoder.extend(piece).unwrap();
        decoder.drain_into(&mut body).unwrap();
    }
    (body, decoder.closed())
}

#[test]
fn decoding_is_chunking_invariant() {
    let stream = b"junk\r\n+IPD5:hello\nnoise+IPD,6:world!\nCLOSED\n";
    let (reference, closed) = decode_in_chunks(stream, stream.len());
    assert_eq!(&reference[..], b"helloworld!");
    assert!(closed);

    for chunk in 1..stream.len() {
        let (body, closed) = decode_in_chunks(stream, chunk);
        assert_eq!(body, reference, "chunk size {}", chunk);
        assert!(closed, "chunk size {}", chunk);
    }
}

#[test]
fn close_marker_split_across_deliveries() {
    let mut decoder = FrameDecoder::new();
    decoder.extend(b"CLO").unwrap();
    assert!(!decoder.closed());
    decoder.extend(b"SED\n").unwrap();
    assert!(decoder.closed());
}

#[test]
fn inbound_overflow_resets_the_buffer() {
    let mut decoder = FrameDecoder::new();
    let filler = [b'a'; RX_BUFFER_CAPACITY];
    decoder.extend(&filler).unwrap();
    assert_eq!(decoder.extend(b"x"), Err(Error::Overflow));
    assert_eq!(decoder.pending(), 0);
}

static RETAINED_DELIVERY_LEN: AtomicUsize = AtomicUsize::new(usize::MAX);

fn note_retained(body: &[u8]) {
    RETAINED_DELIVERY_LEN.store(body.len(), Ordering::SeqCst);
}

#[test]
fn delivery_waits_for_handler_registration() {
    let mut session = ResponseSession::new();
    session.begin();
    session.body_mut().extend_from_slice(b"data").unwrap();

    assert!(!session.deliver());
    assert_eq!(session.body(), b"data");

    session.set_handler(note_retained);
    assert!(session.deliver());
    assert_eq!(RETAINED_DELIVERY_LEN.load(Ordering::SeqCst), 4);
    assert!(session.body().is_empty());
}

static FIRE_COUNT: AtomicUsize = AtomicUsize::new(0);

fn count_fire(_body: &[u8]) {
    FIRE_COUNT.fetch_add(1, Ordering::SeqCst);
}

#[test]
fn delivers_at_most_once_per_lifecycle() {
    let mut session = ResponseSession::new();
    session.set_handler(count_fire);
    session.begin();

    assert!(session.deliver());
    assert!(!session.deliver());
    assert_eq!(FIRE_COUNT.load(Ordering::SeqCst), 1);

    session.begin();
    assert!(session.deliver());
    assert_eq!(FIRE_COUNT.load(Ordering::SeqCst), 2);
}

static FIRST_SLOT: AtomicUsize = AtomicUsize::new(0);
static SECOND_SLOT: AtomicUsize = AtomicUsize::new(0);

fn first_handler(_body: &[u8]) {
    FIRST_SLOT.fetch_add(1, Ordering::SeqCst);
}

fn second_handler(_body: &[u8]) {
    SECOND_SLOT.fetch_add(1, Ordering::SeqCst);
}

#[test]
fn handler_registration_is_last_write_wins() {
    let mut session = ResponseSession::new();
    session.set_handler(first_handler);
    session.set_handler(second_handler);
    session.begin();

    assert!(session.deliver());
    assert_eq!(FIRST_SLOT.load(Ordering::SeqCst), 0);
    assert_eq!(SECOND_SLOT.load(Ordering::SeqCst), 1);
}

#[test]
fn url_splits_host_and_path() {
    assert_eq!(
        parse_url("http://example.com/page"),
        Ok(("example.com", "/page"))
    );
}

#[test]
fn url_without_path_defaults_to_root() {
    assert_eq!(parse_url("http://example.com"), Ok(("example.com", "/")));
}

#[test]
fn url_requires_the_http_scheme() {
    assert_eq!(parse_url("not-a-url"), Err(Error::InvalidUrl));
    assert_eq!(parse_url("https://example.com"), Err(Error::InvalidUrl));
}

#[test]
fn url_rejects_an_empty_host() {
    assert_eq!(parse_url("http://"), Err(Error::InvalidUrl));
    assert_eq!(parse_url("http:///page"), Err(Error::InvalidUrl));
}
