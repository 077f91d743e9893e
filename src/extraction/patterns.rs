//! Registration call-site matching, e.g. `.component('userCard'`.
//!
//! Matching is purely lexical. A commented-out registration still counts,
//! and a registration whose name is built dynamically is missed.

use crate::core::Category;
use once_cell::sync::Lazy;
use regex::Regex;

struct CategoryPattern {
    category: Category,
    regex: Regex,
}

static CATEGORY_PATTERNS: Lazy<Vec<CategoryPattern>> = Lazy::new(|| {
    Category::ALL
        .iter()
        .map(|&category| CategoryPattern {
            category,
            regex: Regex::new(&format!(
                r#"\.{}\s*\(\s*['"]([^'"]+)['"]"#,
                category.keyword()
            ))
            .expect("category pattern is a valid regex"),
        })
        .collect()
});

/// A declaration name matched in one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub category: Category,
    pub name: String,
}

/// All declarations in `content`, grouped by category in [`Category::ALL`]
/// order and by position within each category.
///
/// `Regex::captures_iter` starts from the beginning of the haystack on every
/// call, so nothing carries over from one file to the next.
pub fn extract_declarations(content: &str) -> Vec<Declaration> {
    CATEGORY_PATTERNS
        .iter()
        .flat_map(|pattern| {
            pattern.regex.captures_iter(content).map(|caps| Declaration {
                category: pattern.category,
                name: caps[1].to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn extract_names(content: &str, category: Category) -> Vec<String> {
        extract_declarations(content)
            .into_iter()
            .filter(|d| d.category == category)
            .map(|d| d.name)
            .collect()
    }

    #[test]
    fn test_extracts_each_category() {
        let content = indoc! {r#"
            angular.module('app')
              .component('userCard', {})
              .directive("autoFocus", fn)
              .controller('MainCtrl', MainCtrl)
              .service('userService', UserService)
              .factory('apiFactory', apiFactory);
        "#};

        let found = extract_declarations(content);
        assert_eq!(
            found,
            vec![
                Declaration {
                    category: Category::Component,
                    name: "userCard".to_string()
                },
                Declaration {
                    category: Category::Directive,
                    name: "autoFocus".to_string()
                },
                Declaration {
                    category: Category::Controller,
                    name: "MainCtrl".to_string()
                },
                Declaration {
                    category: Category::Service,
                    name: "userService".to_string()
                },
                Declaration {
                    category: Category::Factory,
                    name: "apiFactory".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_multiple_matches_are_all_kept() {
        let content = indoc! {r#"
            app.component('first', a);
            app.component( 'second' , b);
            app.component('first', c);
        "#};
        assert_eq!(
            extract_names(content, Category::Component),
            vec!["first", "second", "first"]
        );
    }

    #[test]
    fn test_categories_are_grouped_in_table_order() {
        let content = "app.factory('f1', x); app.component('c1', y); app.factory('f2', z);";
        let names: Vec<_> = extract_declarations(content)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["c1", "f1", "f2"]);
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let first = "app.service('a', A); app.service('b', B);";
        let second = "app.service('c', C);";

        assert_eq!(extract_names(first, Category::Service), vec!["a", "b"]);
        assert_eq!(extract_names(second, Category::Service), vec!["c"]);
        assert_eq!(extract_names(first, Category::Service), vec!["a", "b"]);
    }

    #[test]
    fn test_requires_leading_dot_and_quoted_name() {
        let content = indoc! {r#"
            component('bare', x);
            app.component(someVariable, x);
            app.componentFactory('nope', x);
        "#};
        assert!(extract_declarations(content).is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(extract_declarations("const x = 1;").is_empty());
        assert!(extract_declarations("").is_empty());
    }
}
