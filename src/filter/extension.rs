/// File extensions that never lead to crawlable HTML
///
/// Lowercase, without the leading dot. Matched as path suffixes.
pub const BLOCKED_EXTENSIONS: &[&str] = &[
    // stylesheets and scripts
    "css", "js",
    // images
    "bmp", "gif", "jpg", "jpeg", "ico", "png", "tif", "tiff", "psd",
    // audio and video
    "mid", "mp2", "mp3", "mp4", "wav", "avi", "mov", "mpeg", "ram", "m4v", "mkv", "ogg", "ogv",
    "rm", "smil", "wmv", "swf", "wma",
    // documents
    "pdf", "ps", "eps", "tex", "ppt", "pptx", "doc", "docx", "xls", "xlsx", "epub", "rtf",
    "thmx", "mso",
    // data files
    "names", "data", "dat", "arff", "csv", "cnf", "sha1",
    // archives, binaries and disk images
    "exe", "bz2", "tar", "msi", "bin", "7z", "dmg", "iso", "dll", "tgz", "jar", "zip", "rar",
    "gz",
];

/// Returns the blocked extension a path ends in, if any
///
/// Only the last path segment is inspected, with any `;params` cut off. The
/// comparison is case-insensitive and requires the extension to follow a
/// dot, so `/pub/archive.ZIP` matches `zip` while `/courses/css` does not.
pub fn blocked_extension(path: &str) -> Option<&'static str> {
    let segment = path.rsplit_once('/').map_or(path, |(_, last)| last);
    let segment = segment.split_once(';').map_or(segment, |(name, _)| name);
    let lowered = segment.to_lowercase();
    let (_, suffix) = lowered.rsplit_once('.')?;
    BLOCKED_EXTENSIONS
        .iter()
        .copied()
        .find(|extension| *extension == suffix)
}
