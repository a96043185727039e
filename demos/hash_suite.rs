//! Times every hash algorithm of one backend over a file.
//!
//! Run with:
//!     cargo run --release --example hash_suite -- <native|portable> <input-file>

use nodebuf::ByteBuffer;
use nodebuf::bench;
use nodebuf::hash::Backend;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [backend, input] = args.as_slice() else {
        eprintln!("usage: hash_suite <native|portable> <input-file>");
        std::process::exit(1);
    };

    let backend: Backend = backend.parse()?;
    let data = ByteBuffer::from(std::fs::read(input)?);
    println!("Hashing {} bytes with the {backend} backend\n", data.len());

    for report in bench::run_suite(backend, &data)? {
        println!("[{}] {}", report.algorithm, report.elapsed_millis());
    }
    Ok(())
}
