use crate::error::{SplitError, SplitResult};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Page attributes a page may take from an ancestor in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guards the parent walk against cyclic page trees.
const MAX_TREE_DEPTH: usize = 256;

pub struct PdfDocument {
    pub doc: Document,
    pub path: String,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> SplitResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SplitError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let doc = Document::load(path)?;
        Ok(PdfDocument {
            doc,
            path: path.display().to_string(),
        })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Page object IDs in page order
    pub fn page_ids(&self) -> Vec<ObjectId> {
        // get_pages is keyed by 1-based page number, so iteration is in order
        self.doc.get_pages().into_values().collect()
    }

    /// Check that every zero-based index names a page of this document.
    pub fn validate_indices(&self, indices: &[i64]) -> SplitResult<()> {
        let total = self.page_count();
        for &index in indices {
            if index < 0 || index >= total as i64 {
                return Err(SplitError::Range {
                    page: index + 1,
                    total,
                });
            }
        }
        Ok(())
    }

    /// Build a new document holding the pages at `indices`, in that order.
    ///
    /// The source is cloned, its page tree collapsed into the root node with
    /// the requested pages as the only kids, and whatever is no longer
    /// reachable is pruned. Page content is carried over untouched.
    pub fn extract_pages(&self, indices: &[i64]) -> SplitResult<Document> {
        if indices.is_empty() {
            return Err(SplitError::NoPages);
        }
        self.validate_indices(indices)?;

        let page_ids = self.page_ids();
        let mut new_doc = self.doc.clone();
        let root_id = new_doc.catalog()?.get(b"Pages")?.as_reference()?;

        let mut kids = Vec::with_capacity(indices.len());
        let mut placed = HashSet::new();
        for &index in indices {
            let page_id = page_ids[index as usize];
            let mut page = self.flattened_page(page_id)?;
            page.set("Parent", Object::Reference(root_id));

            // A page repeated in the output needs its own object, since a
            // page node can only have one parent.
            let id = if placed.insert(page_id) {
                new_doc.objects.insert(page_id, Object::Dictionary(page));
                page_id
            } else {
                new_doc.add_object(page)
            };
            debug!(page = index + 1, ?id, "appended page");
            kids.push(Object::Reference(id));
        }

        let root = new_doc.get_dictionary_mut(root_id)?;
        root.set("Kids", kids);
        root.set("Count", indices.len() as i64);

        let pruned = new_doc.prune_objects();
        debug!(pruned = pruned.len(), "pruned unreferenced objects");

        Ok(new_doc)
    }

    /// A copy of the page dictionary with inherited attributes made explicit.
    fn flattened_page(&self, page_id: ObjectId) -> SplitResult<Dictionary> {
        let mut page = self.doc.get_dictionary(page_id)?.clone();
        let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();

        let mut depth = 0;
        while let Some(node_id) = parent {
            depth += 1;
            if depth > MAX_TREE_DEPTH {
                return Err(SplitError::Malformed(format!(
                    "page tree above object {} {} R is too deep",
                    page_id.0, page_id.1
                )));
            }
            let node = self.doc.get_dictionary(node_id)?;
            for key in INHERITABLE {
                if !page.has(key) {
                    if let Ok(value) = node.get(key) {
                        page.set(key.to_vec(), value.clone());
                    }
                }
            }
            parent = node.get(b"Parent").and_then(Object::as_reference).ok();
        }

        Ok(page)
    }

    /// Save to a file, replacing whatever is there.
    ///
    /// The document is serialized in memory first so that a failed write
    /// never leaves a truncated PDF behind.
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> SplitResult<()> {
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        std::fs::write(path.as_ref(), buffer)?;
        Ok(())
    }
}
