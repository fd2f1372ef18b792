/// Inserts `suffix` after the part of `file_name` that precedes the first `.`.
/// Everything after the first `.` is kept verbatim as the extension,
/// so `archive.tar.gz` becomes `archive-suffix.tar.gz`.
/// If there is no `.` at all, the suffix is appended to the end.
pub fn watermarked_file_name(file_name: &str, suffix: &str) -> String {
    match file_name.split_once('.') {
        Some((name, extension)) => format!("{name}{suffix}.{extension}"),
        None => format!("{file_name}{suffix}"),
    }
}
