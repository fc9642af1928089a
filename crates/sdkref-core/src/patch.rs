use std::borrow::Cow;

use regex::Regex;

/// Heading that opens the generated section.
pub const SECTION_HEADING: &str = "## SDK Reference";

/// Headings that terminate the section, in insertion-priority order.
pub const NEXT_SECTION_MARKERS: [&str; 2] = ["## Documentation", "## License"];

/// Result of splicing the rendered section into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The document changed; carries the new content.
    Updated(String),
    /// Nothing to do: the section is already up to date, or the document
    /// has neither an existing section nor an insertion anchor.
    Unchanged,
}

/// Splice the rendered section into the document text.
///
/// The existing section spans from the section heading up to (not including)
/// the first next-section marker; it is replaced wholesale. When no such
/// region exists the section is inserted immediately before the first marker
/// found. With no marker at all the document is left alone.
pub fn splice_section(content: &str, fragment: &str) -> PatchOutcome {
    let pattern = format!(
        "(?s){}\n.*?({}|{})",
        regex::escape(SECTION_HEADING),
        regex::escape(NEXT_SECTION_MARKERS[0]),
        regex::escape(NEXT_SECTION_MARKERS[1]),
    );
    let re = Regex::new(&pattern).expect("section pattern should be valid");

    let replaced = re.replace(content, |caps: &regex::Captures| {
        format!("{}\n{}", fragment, &caps[1])
    });
    if let Cow::Owned(new_content) = replaced {
        return if new_content == content {
            PatchOutcome::Unchanged
        } else {
            PatchOutcome::Updated(new_content)
        };
    }

    // Section doesn't exist yet: insert before the first anchor found.
    for marker in NEXT_SECTION_MARKERS {
        if let Some(at) = content.find(marker) {
            let mut new_content = String::with_capacity(content.len() + fragment.len() + 1);
            new_content.push_str(&content[..at]);
            new_content.push_str(fragment);
            new_content.push('\n');
            new_content.push_str(&content[at..]);
            return PatchOutcome::Updated(new_content);
        }
    }

    PatchOutcome::Unchanged
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAGMENT: &str = "## SDK Reference\n\n### Posts\n| Method | Description |\n|--------|-------------|\n| `client.ListPostsWithResponse()` | List all posts |\n";

    #[test]
    fn test_replace_existing_section() {
        let readme = "# SDK\n\nIntro.\n\n## SDK Reference\n\nstale content\n\n## Documentation\n\nSee the docs.\n";
        match splice_section(readme, FRAGMENT) {
            PatchOutcome::Updated(new_content) => {
                assert!(new_content.starts_with("# SDK\n\nIntro.\n\n## SDK Reference\n"));
                assert!(new_content.contains("| `client.ListPostsWithResponse()` | List all posts |\n\n## Documentation\n"));
                assert!(!new_content.contains("stale content"));
                // The tail of the document is untouched.
                assert!(new_content.ends_with("## Documentation\n\nSee the docs.\n"));
            }
            PatchOutcome::Unchanged => panic!("expected an update"),
        }
    }

    #[test]
    fn test_replace_stops_at_first_marker() {
        let readme = "## SDK Reference\n\nold\n\n## Documentation\n\ndocs\n\n## License\n\nMIT\n";
        match splice_section(readme, FRAGMENT) {
            PatchOutcome::Updated(new_content) => {
                // The documentation section between the two markers survives.
                assert!(new_content.contains("## Documentation\n\ndocs\n\n## License\n"));
            }
            PatchOutcome::Unchanged => panic!("expected an update"),
        }
    }

    #[test]
    fn test_insert_before_documentation() {
        let readme = "# SDK\n\nIntro.\n\n## Documentation\n\nSee the docs.\n";
        match splice_section(readme, FRAGMENT) {
            PatchOutcome::Updated(new_content) => {
                let at = new_content.find("## SDK Reference").unwrap();
                let doc_at = new_content.find("## Documentation").unwrap();
                assert!(at < doc_at);
                assert!(new_content.contains("| List all posts |\n\n## Documentation\n"));
            }
            PatchOutcome::Unchanged => panic!("expected an update"),
        }
    }

    #[test]
    fn test_insert_falls_back_to_license() {
        let readme = "# SDK\n\n## License\n\nMIT\n";
        match splice_section(readme, FRAGMENT) {
            PatchOutcome::Updated(new_content) => {
                assert!(new_content.contains("| List all posts |\n\n## License\n"));
            }
            PatchOutcome::Unchanged => panic!("expected an update"),
        }
    }

    #[test]
    fn test_no_anchor_leaves_document_alone() {
        let readme = "# SDK\n\nJust an intro, nothing else.\n";
        assert_eq!(splice_section(readme, FRAGMENT), PatchOutcome::Unchanged);
    }

    #[test]
    fn test_idempotent_second_pass() {
        let readme = "# SDK\n\n## Documentation\n\nSee the docs.\n";
        let once = match splice_section(readme, FRAGMENT) {
            PatchOutcome::Updated(new_content) => new_content,
            PatchOutcome::Unchanged => panic!("expected an update"),
        };
        assert_eq!(splice_section(&once, FRAGMENT), PatchOutcome::Unchanged);
    }
}
