/// Percent-encode a document name for use in a generated hyperlink.
///
/// Names containing non-ASCII characters are encoded twice: the doc viewer
/// decodes the link once before resolving it against the file system.
pub fn encode_link_target(name: &str) -> String {
    let once = urlencoding::encode(name).into_owned();
    if name.is_ascii() {
        once
    } else {
        urlencoding::encode(&once).into_owned()
    }
}

/// Markdown link to the generated document of `name`.
pub fn markdown_link(label: &str, directory: &str, name: &str, extension: &str) -> String {
    let target = encode_link_target(name);
    if directory.is_empty() {
        format!("[{}]({}.{})", label, target, extension)
    } else {
        format!("[{}]({}/{}.{})", label, directory, target, extension)
    }
}
