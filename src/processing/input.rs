//! Input loading.
//!
//! Input files are read as raw bytes and decoded leniently, so any
//! readable file yields text. Only the read itself can fail.

use std::fs;
use std::path::Path;
use std::str;

use crate::error::{ProcessError, Result};

/// Text encoding detected while decoding an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Latin1,
}

impl TextEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf16Le => "utf-16-le",
            TextEncoding::Utf16Be => "utf-16-be",
            TextEncoding::Latin1 => "latin-1",
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text read from an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText {
    pub text: String,
    pub encoding: TextEncoding,
    pub size_bytes: usize,
}

/// Read the whole file at `path` and decode it as text.
pub fn read_input(path: &Path) -> Result<InputText> {
    let bytes = fs::read(path).map_err(|e| ProcessError::read(path, e))?;
    let size_bytes = bytes.len();
    let (text, encoding) = decode_text(&bytes);

    Ok(InputText {
        text,
        encoding,
        size_bytes,
    })
}

/// Decode bytes as text.
///
/// UTF-8 is tried first and kept byte-for-byte. UTF-16 is only considered
/// when a byte order mark is present. Anything else falls back to Latin-1,
/// which maps every byte to one character and cannot fail.
pub fn decode_text(content: &[u8]) -> (String, TextEncoding) {
    if let Ok(s) = str::from_utf8(content) {
        return (s.to_string(), TextEncoding::Utf8);
    }

    let utf16 = match content {
        [0xFF, 0xFE, rest @ ..] => {
            decode_utf16(rest, u16::from_le_bytes).map(|s| (s, TextEncoding::Utf16Le))
        }
        [0xFE, 0xFF, rest @ ..] => {
            decode_utf16(rest, u16::from_be_bytes).map(|s| (s, TextEncoding::Utf16Be))
        }
        _ => None,
    };
    if let Some(decoded) = utf16 {
        return decoded;
    }

    let s: String = content.iter().map(|&b| b as char).collect();
    (s, TextEncoding::Latin1)
}

/// Decode code units following a BOM. A dangling odd byte or an unpaired
/// surrogate rejects the whole buffer rather than losing data.
fn decode_utf16(body: &[u8], unit: fn([u8; 2]) -> u16) -> Option<String> {
    if body.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = body.chunks_exact(2).map(|c| unit([c[0], c[1]])).collect();
    String::from_utf16(&units).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_utf8_kept_verbatim() {
        let (text, encoding) = decode_text("héllo\r\nwörld\n".as_bytes());

        assert_eq!(text, "héllo\r\nwörld\n");
        assert_eq!(encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_utf16_le_with_bom() {
        let content = [0xFF, 0xFE, b'h', 0x00, b'i', 0x00];
        let (text, encoding) = decode_text(&content);

        assert_eq!(text, "hi");
        assert_eq!(encoding, TextEncoding::Utf16Le);
    }

    #[test]
    fn test_utf16_be_with_bom() {
        let content = [0xFE, 0xFF, 0x00, b'o', 0x00, b'k'];
        let (text, encoding) = decode_text(&content);

        assert_eq!(text, "ok");
        assert_eq!(encoding, TextEncoding::Utf16Be);
    }

    #[test]
    fn test_utf16_bom_with_odd_length_keeps_every_byte() {
        let content = [0xFF, 0xFE, b'h', 0x00, b'i', 0x00, b'!'];
        let (text, encoding) = decode_text(&content);

        assert_eq!(encoding, TextEncoding::Latin1);
        assert_eq!(text.chars().count(), content.len());
        assert!(text.ends_with("i\u{0}!"));
    }

    #[test]
    fn test_latin1_fallback() {
        let content = [b'c', b'a', b'f', 0xE9];
        let (text, encoding) = decode_text(&content);

        assert_eq!(text, "café");
        assert_eq!(encoding, TextEncoding::Latin1);
        assert_eq!(text.chars().count(), content.len());
    }

    #[test]
    fn test_read_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"line one\nline two").unwrap();

        let input = read_input(file.path()).unwrap();

        assert_eq!(input.text, "line one\nline two");
        assert_eq!(input.encoding, TextEncoding::Utf8);
        assert_eq!(input.size_bytes, 17);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = read_input(&path).unwrap_err();
        assert!(err.is_read());
    }
}
