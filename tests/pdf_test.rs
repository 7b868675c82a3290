//! End-to-end PDF output tests.

use mkpdf::{render_content, render_content_with_options, Mkpdf, RenderOptions};

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Page count from the page tree's /Count entry.
fn page_count(bytes: &[u8]) -> usize {
    let position = bytes
        .windows(7)
        .position(|w| w == b"/Count ")
        .expect("page tree present");
    let digits: String = bytes[position + 7..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .map(|b| *b as char)
        .collect();
    digits.parse().expect("count is numeric")
}

#[test]
fn test_output_is_pdf() {
    let bytes = render_content("Hello, world").unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(contains(&bytes, b"%%EOF"));
}

#[test]
fn test_times_family_registered() {
    let bytes = render_content("<p>plain <strong>bold</strong> <em>italic</em></p>").unwrap();
    assert!(contains(&bytes, b"Times-Roman"));
    assert!(contains(&bytes, b"Times-Bold"));
    assert!(contains(&bytes, b"Times-Italic"));
    assert!(contains(&bytes, b"Times-BoldItalic"));
    assert!(contains(&bytes, b"WinAnsiEncoding"));
}

#[test]
fn test_short_document_is_one_page() {
    let bytes = render_content("one line").unwrap();
    assert_eq!(page_count(&bytes), 1);
}

#[test]
fn test_long_document_spans_pages() {
    let content: String = (0..300).map(|i| format!("line number {i}\n")).collect();
    let bytes = render_content(&content).unwrap();
    assert!(page_count(&bytes) > 1);
}

#[test]
fn test_uncompressed_stream_contains_text() {
    let options = RenderOptions::new().with_compress(false);
    let bytes = render_content_with_options("findable marker text", &options).unwrap();
    assert!(contains(&bytes, b"(findable marker text)"));
}

#[test]
fn test_compressed_output_is_smaller() {
    let content = "a fairly repetitive sentence. ".repeat(200);
    let compressed = render_content(&content).unwrap();
    let plain =
        render_content_with_options(&content, &RenderOptions::new().with_compress(false)).unwrap();
    assert!(compressed.len() < plain.len());
    assert!(contains(&compressed, b"FlateDecode"));
}

#[test]
fn test_metadata_written() {
    let bytes = Mkpdf::new()
        .with_title("Annual Report")
        .with_author("Jordan Smith")
        .render("body")
        .unwrap();
    assert!(contains(&bytes, b"Annual Report"));
    assert!(contains(&bytes, b"Jordan Smith"));
    assert!(contains(&bytes, b"mkpdf"));
}

#[test]
fn test_render_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");
    mkpdf::render_to_file("<h1>Saved</h1>", &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_empty_input_still_renders() {
    let bytes = render_content("").unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(page_count(&bytes), 1);
}
