use minijinja::{Environment, context};
use serde::Serialize;

use crate::extract::{Method, Reference};

#[derive(Serialize)]
struct ResourceContext<'a> {
    display_name: &'a str,
    methods: &'a [Method],
}

/// Emit the `## SDK Reference` markdown section.
///
/// One sub-heading and method table per populated resource, in the
/// reference's section order; resources without methods are skipped.
/// Descriptions are emitted verbatim; a summary containing `|` will break
/// the table layout, which is accepted rather than silently rewritten.
pub fn render_reference(reference: &Reference) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("reference.md.j2", include_str!("../templates/reference.md.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("reference.md.j2").unwrap();

    let resources: Vec<ResourceContext<'_>> = reference
        .order
        .iter()
        .filter_map(|key| {
            let methods = reference.resources.get(key)?;
            if methods.is_empty() {
                return None;
            }
            let display_name = reference
                .display_names
                .get(key)
                .map(String::as_str)
                .unwrap_or(key);
            Some(ResourceContext {
                display_name,
                methods,
            })
        })
        .collect();

    tmpl.render(context! { resources => resources })
        .expect("render should succeed")
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    fn method(name: &str, description: &str) -> Method {
        Method {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_render_single_resource() {
        let mut resources = IndexMap::new();
        resources.insert(
            "Posts".to_string(),
            vec![method("ListPosts", "List all posts")],
        );
        let reference = Reference {
            resources,
            order: vec!["Posts".to_string()],
            display_names: IndexMap::from([("Posts".to_string(), "Posts".to_string())]),
        };

        let section = render_reference(&reference);
        assert_eq!(
            section,
            "## SDK Reference\n\
             \n\
             ### Posts\n\
             | Method | Description |\n\
             |--------|-------------|\n\
             | `client.ListPostsWithResponse()` | List all posts |\n"
        );
    }

    #[test]
    fn test_render_blank_line_between_resources() {
        let mut resources = IndexMap::new();
        resources.insert("Posts".to_string(), vec![method("ListPosts", "List")]);
        resources.insert("Accounts".to_string(), vec![method("ListAccounts", "List")]);
        let reference = Reference {
            resources,
            order: vec!["Posts".to_string(), "Accounts".to_string()],
            display_names: IndexMap::new(),
        };

        let section = render_reference(&reference);
        assert!(section.contains("| `client.ListPostsWithResponse()` | List |\n\n### Accounts\n"));
        assert!(section.ends_with("| `client.ListAccountsWithResponse()` | List |\n"));
    }

    #[test]
    fn test_render_skips_empty_resources() {
        let mut resources = IndexMap::new();
        resources.insert("Posts".to_string(), Vec::new());
        let reference = Reference {
            resources,
            order: vec!["Posts".to_string()],
            display_names: IndexMap::new(),
        };

        assert_eq!(render_reference(&reference), "## SDK Reference\n");
    }

    #[test]
    fn test_render_falls_back_to_resource_key() {
        let mut resources = IndexMap::new();
        resources.insert("Drafts".to_string(), vec![method("ListDrafts", "List")]);
        let reference = Reference {
            resources,
            order: vec!["Drafts".to_string()],
            display_names: IndexMap::new(),
        };

        assert!(render_reference(&reference).contains("### Drafts\n"));
    }
}
