use crate::errors::AppError;

/// Extracts plain text from PDF bytes.
///
/// Pages are concatenated in page order; no separator is guaranteed beyond
/// what the underlying renderer emits. The input buffer is neither mutated
/// nor retained.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::DocumentFormat(format!("Could not parse PDF document: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_a_format_error() {
        let result = extract_text(b"definitely not a pdf");
        assert!(matches!(result, Err(AppError::DocumentFormat(_))));
    }

    #[test]
    fn test_empty_input_is_a_format_error() {
        let result = extract_text(&[]);
        assert!(matches!(result, Err(AppError::DocumentFormat(_))));
    }

    #[test]
    fn test_truncated_header_is_a_format_error() {
        // A bare magic number with no xref table or trailer is not well-formed.
        let result = extract_text(b"%PDF-1.7\n");
        assert!(matches!(result, Err(AppError::DocumentFormat(_))));
    }
}
