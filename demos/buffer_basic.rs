//! Tour of the ByteBuffer API.
//!
//! Run with:
//!     cargo run --example buffer_basic

use nodebuf::ByteBuffer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Allocation with a repeating pattern
    let buf = ByteBuffer::alloc_with(13, "64656e6f", Some("hex"))?;
    println!("alloc_with hex pattern: {buf}");

    // Encodings
    let land = ByteBuffer::from("deno land");
    println!("hex:    {}", land.to_string_with(Some("hex"))?);
    println!("base64: {}", land.to_string_with(Some("base64"))?);

    // Slices are views; writes show through in the source
    let word = land.slice(Some(5), None);
    word.fill("L", None)?;
    println!("after filling the view: {land}");

    // Concat copies
    let joined = ByteBuffer::concat([&land, &ByteBuffer::from("!")], Some(12))?;
    println!("concat with padding: {joined:?}");

    // Numeric access
    let header = ByteBuffer::alloc(8)?;
    let next = header.write_u32_be(0xcafe_f00d, 0)?;
    header.write_u16_le(513, next)?;
    println!(
        "u32 be = {:#x}, u16 le = {}",
        header.read_u32_be(0)?,
        header.read_u16_le(next)?
    );

    // JSON
    println!("json: {}", ByteBuffer::from("deno").to_json());
    Ok(())
}
