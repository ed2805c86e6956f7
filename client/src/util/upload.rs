//! Resume file selection helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages accept a resume from a file picker or a drag & drop target. The
//! browser `File` handle only exists under `hydrate`; the name and size are
//! kept alongside it so rendering and validation stay platform-neutral.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Extensions the backend can parse.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// `accept` attribute for resume file inputs.
pub const ACCEPT_ATTR: &str = ".pdf,.doc,.docx";

pub const MISSING_FILE: &str = "Please select a resume first!";
pub const UNSUPPORTED_FILE: &str = "Unsupported file type. Upload a PDF, DOC or DOCX resume.";

/// A resume chosen by the user.
#[derive(Clone, Debug)]
pub struct ResumeFile {
    pub name: String,
    pub size: u64,
    #[cfg(feature = "hydrate")]
    pub handle: web_sys::File,
}

impl ResumeFile {
    #[cfg(feature = "hydrate")]
    pub fn from_browser(file: web_sys::File) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = file.size().max(0.0) as u64;
        Self { name: file.name(), size, handle: file }
    }
}

/// Check the file name against `ACCEPTED_EXTENSIONS` (case-insensitive).
///
/// # Errors
///
/// Returns the inline message to show when the extension is not accepted.
pub fn validate_resume_name(name: &str) -> Result<(), &'static str> {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext {
        Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(UNSUPPORTED_FILE),
    }
}

/// Short human-readable size, e.g. `1.5 MB`.
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// First file from an `<input type="file">` change event.
#[cfg(feature = "hydrate")]
pub fn file_from_input_event(ev: &leptos::ev::Event) -> Option<ResumeFile> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0)?;
    Some(ResumeFile::from_browser(file))
}

/// First file from a drop event.
#[cfg(feature = "hydrate")]
pub fn file_from_drop_event(ev: &leptos::ev::DragEvent) -> Option<ResumeFile> {
    let file = ev.data_transfer()?.files()?.get(0)?;
    Some(ResumeFile::from_browser(file))
}
