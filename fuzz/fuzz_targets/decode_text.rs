#![no_main]

use libfuzzer_sys::fuzz_target;
use nodebuf::{BufferError, ByteBuffer, Encoding};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    for encoding in Encoding::ALL {
        let name = encoding.name();
        match ByteBuffer::from_text(&text, Some(name)) {
            Ok(buf) => {
                // Verify: byte_length agrees with the decoded buffer
                assert_eq!(
                    ByteBuffer::byte_length_with(&text, Some(name)).unwrap(),
                    buf.len()
                );

                // Verify: rendering never fails for a known, implemented encoding
                let rendered = buf.to_string_with(Some(name)).unwrap();

                // Verify: binary encodings are stable after one round
                if matches!(encoding, Encoding::Hex | Encoding::Base64) {
                    let again = ByteBuffer::from_text(&rendered, Some(name)).unwrap();
                    assert!(again.equals(&buf));
                }
            }
            Err(BufferError::InvalidEncodedText { .. }) => {}
            Err(err) => panic!("unexpected error for {name}: {err}"),
        }
    }

    // Arbitrary names never panic
    let _ = ByteBuffer::from("deno").to_string_with(Some(&text));
    let _ = ByteBuffer::is_encoding(&*text);
});
