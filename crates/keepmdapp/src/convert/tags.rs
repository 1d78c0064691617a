//! Maps note labels and colors to hashtag names.

use crate::config::ConvertOptions;
use crate::model::LabelRef;

/// Applies the hierarchy prefix: `keep` + `errands` -> `keep/errands`.
pub fn prefixed(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}

/// Tag names for a note, color first, then labels in input order.
///
/// Names carry no leading `#`; see [`render_tag_line`]. Duplicates are kept.
pub fn tags_for(labels: &[LabelRef], color: Option<&str>, opts: &ConvertOptions) -> Vec<String> {
    let color_tag = color
        .filter(|_| opts.convert_color_as_tag)
        .map(|c| prefixed(&opts.tag_prefix, c));

    color_tag
        .into_iter()
        .chain(labels.iter().map(|l| prefixed(&opts.tag_prefix, &l.name)))
        .collect()
}

/// `#a #b #c`, no trailing newline. Empty for no tags.
pub fn render_tag_line(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}
