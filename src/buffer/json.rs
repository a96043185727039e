//! JSON form of a buffer: `{"type":"Buffer","data":[...]}`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ByteBuffer;
use crate::error::BufferError;

const TYPE_TAG: &str = "Buffer";

#[derive(Serialize)]
struct TaggedRef<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    data: &'a [u8],
}

#[derive(Deserialize)]
struct Tagged {
    #[serde(rename = "type")]
    kind: String,
    data: Vec<u8>,
}

impl Serialize for ByteBuffer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.with_bytes(|data| {
            TaggedRef {
                kind: TYPE_TAG,
                data,
            }
            .serialize(serializer)
        })
    }
}

impl<'de> Deserialize<'de> for ByteBuffer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tagged = Tagged::deserialize(deserializer)?;
        if tagged.kind != TYPE_TAG {
            return Err(D::Error::custom(format_args!(
                "expected type \"{TYPE_TAG}\", found \"{}\"",
                tagged.kind
            )));
        }
        Ok(ByteBuffer::from_vec(tagged.data))
    }
}

impl ByteBuffer {
    /// The JSON value of this buffer.
    ///
    /// ```
    /// use nodebuf::ByteBuffer;
    ///
    /// let json = ByteBuffer::from("deno").to_json();
    /// assert_eq!(json.to_string(), r#"{"type":"Buffer","data":[100,101,110,111]}"#);
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        self.with_bytes(|data| {
            serde_json::json!({
                "type": TYPE_TAG,
                "data": data,
            })
        })
    }

    /// Parses the JSON form produced by [`to_json`](ByteBuffer::to_json).
    ///
    /// # Errors
    ///
    /// [`BufferError::Json`] for malformed input or a type tag other than
    /// `"Buffer"`.
    pub fn from_json_str(json: &str) -> Result<Self, BufferError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_view() {
        let buf = ByteBuffer::from("deno land");
        let view = buf.slice(Some(5), None);
        assert_eq!(
            serde_json::to_string(&view).unwrap(),
            r#"{"type":"Buffer","data":[108,97,110,100]}"#
        );
    }

    #[test]
    fn test_to_json_matches_serialize() {
        let buf = ByteBuffer::from(&[0u8, 255]);
        assert_eq!(buf.to_json(), serde_json::to_value(&buf).unwrap());
    }

    #[test]
    fn test_empty_buffer() {
        let json = ByteBuffer::default().to_json();
        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[test]
    fn test_from_json_str() {
        let buf = ByteBuffer::from_json_str(r#"{"type":"Buffer","data":[1,2,3]}"#).unwrap();
        assert_eq!(buf, [1u8, 2, 3]);
    }

    #[test]
    fn test_rejects_wrong_tag() {
        let err = ByteBuffer::from_json_str(r#"{"type":"Blob","data":[]}"#).unwrap_err();
        assert!(matches!(err, BufferError::Json(_)));
        assert!(err.to_string().contains("expected type \"Buffer\""));
    }

    #[test]
    fn test_rejects_out_of_range_byte() {
        assert!(ByteBuffer::from_json_str(r#"{"type":"Buffer","data":[256]}"#).is_err());
        assert!(ByteBuffer::from_json_str("[1,2]").is_err());
    }
}
