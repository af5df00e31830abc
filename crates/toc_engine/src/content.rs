use crate::document::PageDocument;
use crate::{ExtractionError, PageTitleExtraction};

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Read the first two elements carrying `class_name` as page titles.
///
/// Never fails: missing or empty titles are reported in `status_message`.
pub fn extract_titles<D: PageDocument>(doc: &D, class_name: &str) -> PageTitleExtraction {
    let class_name = class_name.trim();
    let elements = doc.elements_by_class(class_name);
    let Some(&first) = elements.first() else {
        return PageTitleExtraction {
            primary_title: None,
            secondary_title: None,
            status_message: format!(
                "No elements found with class: '{class_name}'. Using default history titles."
            ),
        };
    };

    let mut status = Vec::with_capacity(2);

    let primary_title = non_empty_text(doc, first);
    match &primary_title {
        Some(title) => status.push(format!("Fetched primary title: \"{title}\".")),
        None => status.push(format!(
            "Primary title element (class: '{class_name}') found, but text is empty."
        )),
    }

    let secondary_title = match elements.get(1) {
        Some(&second) => {
            let title = non_empty_text(doc, second);
            match &title {
                Some(title) => status.push(format!("Fetched secondary title: \"{title}\".")),
                None => status.push(format!(
                    "Second title element (class: '{class_name}') found, but text is empty."
                )),
            }
            title
        }
        None => {
            status.push(format!(
                "Second title element (class: '{class_name}') not found."
            ));
            None
        }
    };

    PageTitleExtraction {
        primary_title,
        secondary_title,
        status_message: status.join(" ").trim().to_string(),
    }
}

/// Join the non-empty paragraphs inside the element with id `container_id`.
pub fn extract_body<D: PageDocument>(
    doc: &D,
    container_id: &str,
) -> Result<String, ExtractionError> {
    let container_id = container_id.trim();
    let container =
        doc.element_by_id(container_id)
            .ok_or_else(|| ExtractionError::ContentContainerNotFound {
                id: container_id.to_string(),
            })?;

    let paragraphs: Vec<String> = doc
        .descendants_by_tag(container, "p")
        .into_iter()
        .map(|p| doc.text_content(p).trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    if paragraphs.is_empty() {
        return Err(ExtractionError::NoContent {
            id: container_id.to_string(),
        });
    }
    Ok(paragraphs.join(PARAGRAPH_SEPARATOR))
}

fn non_empty_text<D: PageDocument>(doc: &D, node: D::Node) -> Option<String> {
    let text = doc.text_content(node);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
