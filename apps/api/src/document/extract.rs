//! Text Extractor — converts PDF bytes into plain text.

use tracing::info;

use crate::errors::AppError;

/// Extracts the text of every page, in page order, concatenated with no
/// separator. A zero-page document yields an empty string.
///
/// Bytes that are not a valid PDF, or pages whose text cannot be decoded,
/// fail with `AppError::Extraction`; the message is surfaced verbatim in the
/// HTTP response.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(e.to_string()))?;

    info!("Extracted {} characters of CV text", text.len());

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a minimal one-page PDF containing `text`, computing the xref
    /// offsets at assembly time so the file is structurally valid.
    fn one_page_pdf(text: &str) -> Vec<u8> {
        let stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>"
                .to_string(),
            format!("<< /Length {} >>\nstream\n{stream}\nendstream", stream.len()),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut out = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, obj) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend(format!("{} 0 obj\n{obj}\nendobj\n", i + 1).into_bytes());
        }

        let xref_pos = out.len();
        out.extend(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).into_bytes());
        for offset in &offsets {
            out.extend(format!("{offset:010} 00000 n \n").into_bytes());
        }
        out.extend(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_pos}\n%%EOF\n",
                objects.len() + 1
            )
            .into_bytes(),
        );
        out
    }

    #[test]
    fn test_extracts_text_from_one_page_pdf() {
        let pdf = one_page_pdf("5 years Go experience");
        let text = extract_text(&pdf).unwrap();
        assert!(text.contains("5 years Go experience"));
    }

    #[test]
    fn test_garbage_bytes_fail_with_extraction_error() {
        let result = extract_text(b"definitely not a pdf");
        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
        assert!(!err.to_string().is_empty());
    }
}
