/// Macro name used in generated headers when none is given.
pub const DEFAULT_VERSION_MACRO: &str = "LAST_CHANGE";

/// Everything after the last occurrence of this marker forms the include guard.
const GUARD_ROOT_MARKER: &str = "src/";

pub fn plain_contents(revision: &str) -> String {
    format!("LASTCHANGE={revision}\n")
}

/// Include guard for a header at `path`, e.g. `out/src/foo/bar.h` -> `FOO_BAR_H_`.
pub fn header_guard(path: &str) -> String {
    let relevant = path
        .rfind(GUARD_ROOT_MARKER)
        .map_or(path, |index| &path[index + GUARD_ROOT_MARKER.len()..]);
    let mut guard: String = relevant
        .to_uppercase()
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '.') { '_' } else { c })
        .collect();
    guard.push('_');
    guard
}

pub fn header_contents(path: &str, version_macro: &str, revision: &str) -> String {
    let guard = header_guard(path);
    format!(
        "/* Generated by lastchange.py, do not edit.*/\n\
         \n\
         #ifndef {guard}\n\
         #define {guard}\n\
         \n\
         #define {version_macro} \"{revision}\"\n\
         \n\
         #endif  // {guard}\n"
    )
}
