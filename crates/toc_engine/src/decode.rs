use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use toc_logging::toc_warn;

use crate::types::FetchOutput;

/// How far into the document a `<meta charset>` declaration is looked for.
const META_SNIFF_LIMIT: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding_label: String,
}

/// Decode a fetched page using its recorded content type.
pub fn decode_page(output: &FetchOutput) -> DecodedHtml {
    decode_html(&output.bytes, output.metadata.content_type.as_deref())
}

/// Decode raw bytes into UTF-8 using: BOM -> Content-Type charset -> meta charset -> chardetng fallback.
///
/// Malformed sequences become U+FFFD; one bad byte must not hide the rest of the page.
pub fn decode_html(bytes: &[u8], content_type: Option<&str>) -> DecodedHtml {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    let declared = content_type
        .and_then(charset_from_content_type)
        .or_else(|| charset_from_meta(bytes));
    if let Some(enc) = declared.and_then(|label| Encoding::for_label(label.as_bytes())) {
        return decode_with(bytes, enc);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|part| {
        let (key, value) = part.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\'']).to_string())
    })
}

fn charset_from_meta(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(META_SNIFF_LIMIT)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();
    let start = head.find("charset=")? + "charset=".len();
    let label: String = head[start..]
        .trim_start_matches(['"', '\''])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
        .collect();
    (!label.is_empty()).then_some(label)
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> DecodedHtml {
    let (text, _, had_errors) = enc.decode(bytes);
    if had_errors {
        toc_warn!(
            "malformed {} byte sequences replaced while decoding {} bytes",
            enc.name(),
            bytes.len()
        );
    }
    DecodedHtml {
        html: text.into_owned(),
        encoding_label: enc.name().to_string(),
    }
}
