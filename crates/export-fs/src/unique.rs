//! Unique output-path resolution
//!
//! Export file names are derived from model element names, which may contain
//! characters that are illegal in file names and may collide with files
//! already on disk. This module sanitizes a desired label and probes the
//! target directory until it finds a name that is not taken.

use tracing::trace;

use crate::NormalizedPath;

/// Characters that are replaced when a label is turned into a file name.
///
/// Covers the union of characters rejected by common filesystems plus `%`,
/// which some shells and URL-ish tooling mangle.
pub const FORBIDDEN_CHARS: &[char] = &['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Replace every forbidden character in `label` with `replacement`.
///
/// The replacement applies globally, not just to the first match, and is
/// idempotent for labels that are already clean. The replacement token itself
/// is not inspected: passing a token that contains a forbidden character
/// reintroduces it.
pub fn sanitize_label(label: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        if FORBIDDEN_CHARS.contains(&c) {
            out.push_str(replacement);
        } else {
            out.push(c);
        }
    }
    out
}

/// Resolve a path inside `dir` for the desired `label` that does not
/// currently exist on disk.
///
/// The label is sanitized with [`sanitize_label`] first; an absent label is
/// treated as the empty string. On collision the decimal attempt counter
/// (starting at 1) is appended to the current label and the probe repeats,
/// so a label colliding twice resolves to `foo1`, then `foo12` — the suffix
/// compounds on the already-suffixed name. That matches the long-standing
/// export naming on disk and is kept as-is.
///
/// There is no attempt cap: with N existing colliding entries the loop
/// terminates after at most N + 1 probes.
///
/// The returned path did not exist at the moment of the final check. Nothing
/// holds that guarantee open: a concurrent writer can claim the path before
/// the caller writes to it. Known limitation; callers that need atomicity
/// must create the file themselves with `create_new` semantics.
pub fn unique_path(dir: &NormalizedPath, label: Option<&str>, replacement: &str) -> NormalizedPath {
    let mut label = sanitize_label(label.unwrap_or(""), replacement);
    let mut attempt: u32 = 1;

    let mut candidate = dir.join(&label);
    while candidate.exists() {
        trace!(candidate = %candidate, attempt, "output path taken, retrying");
        label.push_str(&attempt.to_string());
        attempt += 1;
        candidate = dir.join(&label);
    }
    candidate
}
