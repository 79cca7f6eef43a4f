//! PDF writer: turns laid-out pages into a PDF byte buffer with `lopdf`.
//!
//! Uses the standard Type1 Helvetica faces with WinAnsi encoding, so no fonts are embedded.
//! Characters with no WinAnsi glyph are written as `?`.
//! Content streams are written uncompressed.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::export::document::{Page, PageConfig};
use crate::export::font_metrics::{win_ansi_byte, PdfFont};
use crate::export::ExportError;

/// Renders `pages` into a complete PDF document.
pub fn render_pdf(pages: &[Page], config: &PageConfig) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = lopdf::Dictionary::new();
    for font in PdfFont::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_key(), font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let page_id = add_page(&mut doc, page, config, pages_id)?;
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                config.width_pt.into(),
                config.height_pt.into(),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ExportError::Pdf(format!("failed to serialize document: {e}")))?;
    Ok(buffer)
}

fn add_page(
    doc: &mut Document,
    page: &Page,
    config: &PageConfig,
    pages_id: ObjectId,
) -> Result<ObjectId, ExportError> {
    let mut operations = Vec::with_capacity(page.lines.len() * 5);
    for line in &page.lines {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![line.font.resource_key().into(), line.size_pt.into()],
        ));
        operations.push(Operation::new(
            "Td",
            vec![line.x_pt.into(), (config.height_pt - line.baseline_pt).into()],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(&line.text), StringFormat::Literal)],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    let content = Content { operations };
    let encoded = content
        .encode()
        .map_err(|e| ExportError::Pdf(format!("failed to encode page content: {e}")))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    }))
}

/// Maps text to single-byte WinAnsi codes, the encoding declared on every font.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::document::{default_page_config, layout_document};

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_output_is_a_pdf_with_literal_text() {
        let config = default_page_config();
        let pages = layout_document("Rustacean building search infrastructure", &config);
        let bytes = render_pdf(&pages, &config).unwrap();

        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert!(contains(&bytes, b"Rustacean building search infrastructure"));
        assert!(contains(&bytes, b"Helvetica-Bold"));
    }

    #[test]
    fn test_page_count_round_trips_through_lopdf() {
        let config = default_page_config();
        let text = (0..90)
            .map(|i| format!("Accomplishment {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let pages = layout_document(&text, &config);
        let bytes = render_pdf(&pages, &config).unwrap();

        let parsed = Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), pages.len());
        assert!(pages.len() > 1);
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(encode_win_ansi("Café"), vec![b'C', b'a', b'f', 0xE9]);
        assert_eq!(encode_win_ansi("a\tb"), b"a b".to_vec());
        assert_eq!(encode_win_ansi("漢字"), b"??".to_vec());
        assert_eq!(
            encode_win_ansi("I\u{2019}m \u{2022} \u{201C}x\u{201D} \u{2013} \u{20AC}5"),
            vec![b'I', 0x92, b'm', b' ', 0x95, b' ', 0x93, b'x', 0x94, b' ', 0x96, b' ', 0x80, b'5']
        );
        // C1 controls never reach the stream as raw bytes.
        assert_eq!(encode_win_ansi("a\u{0085}b"), b"a?b".to_vec());
    }
}
