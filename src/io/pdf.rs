//! Minimal PDF writer placing one vector canvas per page
//!
//! Produces PDF 1.4 with a catalog, a page tree, one uncompressed content
//! stream per page and a byte-exact cross-reference table.

use crate::io::configuration::{PDF_PAGE_MARGIN_PT, PDF_PAGE_SIZE_PT};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::vector::VectorCanvas;
use std::io::Write;
use std::path::Path;

/// Multi-page document collecting canvases
#[derive(Debug, Clone)]
pub struct PdfDocument {
    pages: Vec<VectorCanvas>,
    page_size: (f64, f64),
    margin: f64,
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDocument {
    /// Create an empty document with A0 portrait pages
    pub const fn new() -> Self {
        Self::with_page_size(PDF_PAGE_SIZE_PT, PDF_PAGE_MARGIN_PT)
    }

    /// Create an empty document with a custom page size and margin in points
    pub const fn with_page_size(page_size: (f64, f64), margin: f64) -> Self {
        Self {
            pages: Vec::new(),
            page_size,
            margin,
        }
    }

    /// Append a canvas as a new page
    pub fn add_page(&mut self, canvas: VectorCanvas) {
        self.pages.push(canvas);
    }

    /// Number of pages collected so far
    pub const fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialize the document
    ///
    /// # Errors
    ///
    /// Returns an error if the document has no pages or the margin leaves
    /// no drawable area
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        if self.pages.is_empty() {
            return Err(invalid_parameter("pages", &0, &"document has no pages"));
        }
        let (page_width, page_height) = self.page_size;
        if page_width <= 2.0 * self.margin || page_height <= 2.0 * self.margin {
            return Err(invalid_parameter(
                "margin",
                &self.margin,
                &"leaves no drawable area",
            ));
        }

        let mut out = Vec::new();
        let mut offsets = Vec::with_capacity(2 + 2 * self.pages.len());
        out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

        offsets.push(out.len());
        writeln!(out, "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj")?;

        let kids = (0..self.pages.len())
            .map(|k| format!("{} 0 R", page_object(k)))
            .collect::<Vec<_>>()
            .join(" ");
        offsets.push(out.len());
        writeln!(
            out,
            "2 0 obj\n<< /Type /Pages /Kids [{kids}] /Count {} >>\nendobj",
            self.pages.len()
        )?;

        for (k, canvas) in self.pages.iter().enumerate() {
            offsets.push(out.len());
            writeln!(
                out,
                "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Contents {} 0 R >>\nendobj",
                page_object(k),
                format_number(page_width),
                format_number(page_height),
                page_object(k) + 1
            )?;

            let content = self.page_content(canvas);
            offsets.push(out.len());
            writeln!(
                out,
                "{} 0 obj\n<< /Length {} >>\nstream",
                page_object(k) + 1,
                content.len()
            )?;
            out.extend_from_slice(content.as_bytes());
            writeln!(out, "\nendstream\nendobj")?;
        }

        let xref_offset = out.len();
        writeln!(out, "xref\n0 {}\n0000000000 65535 f ", offsets.len() + 1)?;
        for offset in &offsets {
            writeln!(out, "{offset:010} 00000 n ")?;
        }
        writeln!(
            out,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF",
            offsets.len() + 1
        )?;

        Ok(out)
    }

    /// Write the document to a file, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written
    pub fn write_to(&self, output_path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }
        std::fs::write(output_path, bytes)
            .map_err(|e| file_system_error(output_path, "write file", e))?;

        tracing::info!(
            path = %output_path.display(),
            pages = self.pages.len(),
            "wrote vector document"
        );
        Ok(())
    }

    // Canvas centred on the page and scaled to fit inside the margin
    fn page_content(&self, canvas: &VectorCanvas) -> String {
        let (page_width, page_height) = self.page_size;
        let side = canvas.side().max(1) as f64;
        let scale = ((page_width - 2.0 * self.margin) / side)
            .min((page_height - 2.0 * self.margin) / side);
        let tx = (page_width - side * scale) / 2.0;
        let ty = (page_height - side * scale) / 2.0;

        let mut content = format!(
            "q\n{} 0 0 {} {} {} cm\n",
            format_number(scale),
            format_number(scale),
            format_number(tx),
            format_number(ty)
        );

        let mut current_fill = None;
        for rect in canvas.rects() {
            if current_fill != Some(rect.fill) {
                content.push_str(&format!("{} g\n", format_number(rect.fill.level())));
                current_fill = Some(rect.fill);
            }
            content.push_str(&format!(
                "{} {} {} {} re f\n",
                rect.x, rect.y, rect.width, rect.height
            ));
        }
        content.push('Q');
        content
    }
}

// Catalog and page tree take objects 1 and 2; each page adds a page object
// followed by its content stream.
const fn page_object(index: usize) -> usize {
    3 + 2 * index
}

fn format_number(value: f64) -> String {
    let text = format!("{value:.4}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
