//! Line-level path redaction.
//!
//! A line is only touched when it contains a `/`. Markup tokens (`<...>`)
//! are collected first; path-like runs are then matched inside the `=`/`"`
//! delimited segments of the line, filtered against the markup tokens and
//! the ignore set, and finally replaced globally with the placeholder.

use crate::policy::RedactionPolicy;
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use std::borrow::Cow;
use std::collections::HashSet;

// Markup-tag-like token, e.g. `<a href="/home">` or `</td>`. Paths inside
// these are structural, not data.
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?-u)<.*?[\w:.="-]+>"#).unwrap());

// A `/`-rooted token run: one or more `/segment` repetitions, where a
// segment is word characters, dots, colons, or hyphens. Approximates a
// filesystem or URL path without a full path grammar.
static PATH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u)(?:/[\w.:-]+)+").unwrap());

/// Applies the redaction policy to individual log lines.
pub struct Redactor {
    placeholder: Vec<u8>,
    marker_prefix: String,
    ignore: HashSet<Vec<u8>>,
}

impl Redactor {
    /// Build a redactor from a policy.
    pub fn new(policy: RedactionPolicy) -> Self {
        let ignore = policy
            .ignore_paths
            .iter()
            .map(|p| p.as_bytes().to_vec())
            .collect();
        Self {
            placeholder: policy.placeholder.into_bytes(),
            marker_prefix: policy.marker_prefix,
            ignore,
        }
    }

    /// Filename prefix marking already-processed files.
    pub fn marker_prefix(&self) -> &str {
        &self.marker_prefix
    }

    /// Redact one line. Returns the input unchanged (borrowed) when nothing
    /// matched. Line terminators are preserved as-is.
    pub fn redact_line<'a>(&self, line: &'a [u8]) -> Cow<'a, [u8]> {
        if !line.contains(&b'/') {
            return Cow::Borrowed(line);
        }

        let tags: Vec<&[u8]> = TAG_RE.find_iter(line).map(|m| m.as_bytes()).collect();

        // Candidate paths come from the `=`/`"` delimited segments, so that
        // quoted values and key=value pairs are matched individually.
        let mut targets: Vec<&[u8]> = Vec::new();
        for segment in line.split(|&b| b == b'=' || b == b'"') {
            for m in PATH_RE.find_iter(segment) {
                let path = m.as_bytes();
                if self.is_exempt(path, &tags) {
                    continue;
                }
                if !targets.contains(&path) {
                    targets.push(path);
                }
            }
        }
        if targets.is_empty() {
            return Cow::Borrowed(line);
        }

        // Longest first, so a short run never splits a longer one that
        // contains it.
        targets.sort_by_key(|t| std::cmp::Reverse(t.len()));

        let mut out = line.to_vec();
        for target in targets {
            out = replace_all(&out, target, &self.placeholder);
        }
        Cow::Owned(out)
    }

    /// A matched run is exempt when it sits inside a markup token, or when
    /// every one of its `/segment` components is in the ignore set.
    fn is_exempt(&self, path: &[u8], tags: &[&[u8]]) -> bool {
        if tags.iter().any(|tag| contains_subslice(tag, path)) {
            return true;
        }
        segments(path).all(|seg| self.ignore.contains(seg))
    }
}

/// Iterate the `/segment` components of a path run, each including its
/// leading slash (`/a/b` yields `/a` then `/b`).
fn segments(path: &[u8]) -> impl Iterator<Item = &[u8]> {
    let starts: Vec<usize> = path
        .iter()
        .enumerate()
        .filter_map(|(i, &b)| (b == b'/').then_some(i))
        .collect();
    let len = path.len();
    starts
        .clone()
        .into_iter()
        .zip(starts.into_iter().skip(1).chain(std::iter::once(len)))
        .map(move |(start, end)| &path[start..end])
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}

fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(pos) = rest
        .windows(needle.len())
        .position(|w| w == needle)
    {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(replacement);
        rest = &rest[pos + needle.len()..];
    }
    out.extend_from_slice(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RedactionPolicy;

    fn redactor() -> Redactor {
        Redactor::new(RedactionPolicy::default())
    }

    #[test]
    fn line_without_slash_is_untouched() {
        let r = redactor();
        let line = b"nothing to see here";
        assert!(matches!(r.redact_line(line), Cow::Borrowed(_)));
    }

    #[test]
    fn key_value_path_is_collapsed() {
        let r = redactor();
        assert_eq!(
            &r.redact_line(b"data=/home/user accessed")[..],
            b"data=/xxx accessed"
        );
    }

    #[test]
    fn quoted_path_is_redacted() {
        let r = redactor();
        assert_eq!(
            &r.redact_line(b"mount point \"/var/log/cluster\" full")[..],
            b"mount point \"/xxx\" full"
        );
    }

    #[test]
    fn path_inside_markup_token_is_exempt() {
        let r = redactor();
        let line = b"<a href=\"/home\">click</a>";
        assert_eq!(&r.redact_line(line)[..], line);
    }

    #[test]
    fn markup_exemption_is_per_token() {
        let r = redactor();
        // The same path outside any token is still redacted.
        assert_eq!(
            &r.redact_line(b"<b>bold</b> saw /home/user today")[..],
            b"<b>bold</b> saw /xxx today"
        );
    }

    #[test]
    fn ignore_set_run_survives() {
        let r = redactor();
        let line = b"path=/table/td";
        assert_eq!(&r.redact_line(line)[..], line);
    }

    #[test]
    fn non_ignored_run_is_redacted() {
        let r = redactor();
        assert_eq!(
            &r.redact_line(b"path=/secret/config")[..],
            b"path=/xxx"
        );
    }

    #[test]
    fn mixed_run_is_redacted() {
        let r = redactor();
        // One non-ignored segment taints the whole run.
        assert_eq!(
            &r.redact_line(b"path=/table/secret")[..],
            b"path=/xxx"
        );
    }

    #[test]
    fn repeated_path_is_replaced_globally() {
        let r = redactor();
        assert_eq!(
            &r.redact_line(b"src=/data/a dst=/data/a")[..],
            b"src=/xxx dst=/xxx"
        );
    }

    #[test]
    fn longer_run_not_split_by_shorter() {
        let r = redactor();
        assert_eq!(
            &r.redact_line(b"a=/home b=/home/user")[..],
            b"a=/xxx b=/xxx"
        );
    }

    #[test]
    fn versions_and_ports_match_the_pattern() {
        let r = redactor();
        assert_eq!(
            &r.redact_line(b"node=/rack-1/host:9042 up")[..],
            b"node=/xxx up"
        );
    }

    #[test]
    fn non_utf8_bytes_round_trip() {
        let r = redactor();
        let line = b"raw \xff\xfe bytes, no match";
        assert_eq!(&r.redact_line(line)[..], line);
    }

    #[test]
    fn non_utf8_bytes_near_a_match() {
        let r = redactor();
        let out = r.redact_line(b"\xff marker=/opt/app \xfe");
        assert_eq!(&out[..], b"\xff marker=/xxx \xfe");
    }

    #[test]
    fn segments_iterator_includes_leading_slash() {
        let segs: Vec<&[u8]> = segments(b"/a/bc/d").collect();
        assert_eq!(segs, vec![&b"/a"[..], &b"/bc"[..], &b"/d"[..]]);
    }

    #[test]
    fn custom_placeholder_is_honored() {
        let policy = RedactionPolicy {
            placeholder: "/hidden".to_string(),
            ..RedactionPolicy::default()
        };
        let r = Redactor::new(policy);
        assert_eq!(
            &r.redact_line(b"data=/home/user")[..],
            b"data=/hidden"
        );
    }
}
