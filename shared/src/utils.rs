use std::path::Path;

/// Extensions we advertise as resume formats. Anything else is still
/// accepted; the file content is never read.
pub fn is_common_resume_format(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    matches!(ext.to_lowercase().as_str(), "pdf" | "doc" | "docx" | "txt" | "md")
}
