use super::*;

#[test]
fn validate_accepts_known_extensions_any_case() {
    assert_eq!(validate_resume_name("cv.pdf"), Ok(()));
    assert_eq!(validate_resume_name("CV.PDF"), Ok(()));
    assert_eq!(validate_resume_name("resume.final.docx"), Ok(()));
    assert_eq!(validate_resume_name("old.doc"), Ok(()));
}

#[test]
fn validate_rejects_other_or_missing_extensions() {
    assert_eq!(validate_resume_name("photo.png"), Err(UNSUPPORTED_FILE));
    assert_eq!(validate_resume_name("resume"), Err(UNSUPPORTED_FILE));
    assert_eq!(validate_resume_name("resume.pdf.exe"), Err(UNSUPPORTED_FILE));
}

#[test]
fn accept_attr_lists_every_extension() {
    for ext in ACCEPTED_EXTENSIONS {
        assert!(ACCEPT_ATTR.contains(&format!(".{ext}")));
    }
}

#[test]
fn format_size_picks_unit() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(2048), "2.0 KB");
    assert_eq!(format_size(1_572_864), "1.5 MB");
}
