#![no_main]

use libfuzzer_sys::fuzz_target;
use nodebuf::ByteBuffer;

fuzz_target!(|input: (Vec<Vec<u8>>, u16, Vec<u8>)| {
    let (parts, total, pattern) = input;
    let total = usize::from(total);

    let buffers: Vec<ByteBuffer> = parts.iter().map(|p| ByteBuffer::from(p.as_slice())).collect();
    let flat = parts.concat();

    // Verify: concat without a total is the plain concatenation
    let joined = ByteBuffer::concat(&buffers, None).unwrap();
    assert_eq!(joined.to_vec(), flat);

    // Verify: a total either pads with zeros or rejects overflowing input
    match ByteBuffer::concat(&buffers, Some(total)) {
        Ok(padded) => {
            assert!(flat.len() <= total);
            assert_eq!(padded.len(), total);
            assert!(padded.to_vec()[flat.len()..].iter().all(|&b| b == 0));
        }
        Err(_) => assert!(flat.len() > total),
    }

    // Verify: fill repeats the pattern over a view without touching the rest
    if joined.len() >= 2 && !pattern.is_empty() {
        let view = joined.slice(Some(1), Some(-1));
        view.fill(&pattern, None).unwrap();
        let bytes = joined.to_vec();
        assert_eq!(bytes[0], flat[0]);
        assert_eq!(bytes[bytes.len() - 1], flat[flat.len() - 1]);
        for (i, &b) in bytes[1..bytes.len() - 1].iter().enumerate() {
            assert_eq!(b, pattern[i % pattern.len()]);
        }
    }
});
