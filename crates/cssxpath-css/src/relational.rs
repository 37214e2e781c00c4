//! Experimental `E!` relational shorthand
//!
//! `ul li! > a` selects the `li` that has an `a` child: the path after `!` is
//! walked and one `/..` step is appended per path segment beyond the first.
//! This is unstable and only loosely tested; `:has()` is not supported.

/// Expand `!` markers in an already path-shaped expression
///
/// Each comma group is handled on its own. Only the text between the first
/// and second `!` of a group is kept as the tail; groups without `!` are
/// returned unchanged.
pub fn expand_relational(path: &str) -> String {
    path.split(',').map(expand_group).collect::<Vec<_>>().join(",")
}

fn expand_group(group: &str) -> String {
    let mut parts = group.split('!');
    let head = parts.next().unwrap_or_default();
    let Some(tail) = parts.next() else {
        return group.to_owned();
    };
    let steps = path_segments(tail).len().saturating_sub(1);
    format!("{head}{tail}{}", "/..".repeat(steps))
}

/// Split a path into runs of non-slash text, each with up to two trailing slashes
pub(crate) fn path_segments(path: &str) -> Vec<&str> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;

    while start < bytes.len() {
        let mut end = start;
        while end < bytes.len() && bytes[end] != b'/' {
            end += 1;
        }
        for _ in 0..2 {
            if end < bytes.len() && bytes[end] == b'/' {
                end += 1;
            }
        }
        segments.push(&path[start..end]);
        start = end;
    }

    segments
}
