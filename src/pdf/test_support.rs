//! In-memory PDFs for unit tests. Every page draws the text "Page N" so
//! tests can tell pages apart after they have been moved around.

use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;

fn media_box() -> Object {
    Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ])
}

fn add_page(
    doc: &mut Document,
    number: usize,
    parent: ObjectId,
    own_attributes: bool,
) -> ObjectId {
    let content = format!("BT /F1 12 Tf 72 720 Td (Page {}) Tj ET", number);
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

    let mut page = dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(parent),
        "Contents" => Object::Reference(content_id),
    };
    if own_attributes {
        page.set("MediaBox", media_box());
        page.set("Resources", dictionary! {});
    }
    doc.add_object(page)
}

fn finish(doc: &mut Document, root_id: ObjectId) {
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(root_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
}

/// A flat page tree of `num_pages` pages.
pub fn simple_pdf(num_pages: usize) -> Document {
    let mut doc = Document::with_version("1.5");
    let root_id = doc.new_object_id();

    let kids: Vec<Object> = (1..=num_pages)
        .map(|n| Object::Reference(add_page(&mut doc, n, root_id, true)))
        .collect();
    doc.objects.insert(
        root_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(num_pages as i64),
        }),
    );

    finish(&mut doc, root_id);
    doc
}

/// Four pages split over two intermediate nodes. Pages 3 and 4 carry no
/// MediaBox, Resources or Rotate of their own and inherit them from their
/// parent node.
pub fn nested_pdf() -> Document {
    let mut doc = Document::with_version("1.5");
    let root_id = doc.new_object_id();
    let first_id = doc.new_object_id();
    let second_id = doc.new_object_id();

    let first_kids: Vec<Object> = (1..=2)
        .map(|n| Object::Reference(add_page(&mut doc, n, first_id, true)))
        .collect();
    let second_kids: Vec<Object> = (3..=4)
        .map(|n| Object::Reference(add_page(&mut doc, n, second_id, false)))
        .collect();

    doc.objects.insert(
        first_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Parent" => Object::Reference(root_id),
            "Kids" => first_kids,
            "Count" => Object::Integer(2),
        }),
    );
    doc.objects.insert(
        second_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Parent" => Object::Reference(root_id),
            "Kids" => second_kids,
            "Count" => Object::Integer(2),
            "MediaBox" => media_box(),
            "Resources" => dictionary! {},
            "Rotate" => Object::Integer(90),
        }),
    );
    doc.objects.insert(
        root_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(first_id), Object::Reference(second_id)],
            "Count" => Object::Integer(4),
        }),
    );

    finish(&mut doc, root_id);
    doc
}

/// The "Page N" marker of every page, in page order.
pub fn page_markers(doc: &Document) -> Vec<String> {
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let content = doc.get_page_content(page_id).unwrap();
            let text = String::from_utf8_lossy(&content);
            let start = text.find('(').unwrap() + 1;
            let end = text.find(')').unwrap();
            text[start..end].to_string()
        })
        .collect()
}

/// Write `doc` to a temporary `.pdf` file.
pub fn write_temp_pdf(doc: &mut Document) -> tempfile::NamedTempFile {
    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    let mut f = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    f.write_all(&buf).unwrap();
    f.flush().unwrap();
    f
}
