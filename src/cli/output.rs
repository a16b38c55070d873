//! Output formatting utilities

use crate::application::SnippetMatch;

/// Format snippets for display, one block per snippet
pub fn format_snippet_list(matches: &[SnippetMatch]) -> String {
    if matches.is_empty() {
        return "No snippets found.".to_string();
    }

    let mut output = String::new();
    for (n, m) in matches.iter().enumerate() {
        if n > 0 {
            output.push('\n');
        }
        output.push_str(&format!(
            "[{}] {}  ({})\n",
            m.index, m.record.id, m.record.category
        ));
        for line in m.record.text.lines() {
            output.push_str(&format!("    {}\n", line));
        }
        if !m.record.url.is_empty() {
            output.push_str(&format!("    <{}>\n", m.record.url));
        }
    }
    output
}

/// Format the category list for display
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories found".to_string();
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(category);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SnippetId, SnippetRecord};

    fn snippet(index: usize, id: u64, text: &str, url: &str) -> SnippetMatch {
        SnippetMatch {
            index,
            record: SnippetRecord {
                id: SnippetId(id),
                text: text.to_string(),
                category: "rust".to_string(),
                url: url.to_string(),
            },
        }
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_snippet_list(&[]), "No snippets found.");
    }

    #[test]
    fn test_snippet_block() {
        let output = format_snippet_list(&[snippet(2, 5, "fn main() {}", "http://x")]);
        assert_eq!(output, "[2] #5  (rust)\n    fn main() {}\n    <http://x>\n");
    }

    #[test]
    fn test_multiline_text_indented() {
        let output = format_snippet_list(&[snippet(0, 1, "a\nb", "")]);
        assert_eq!(output, "[0] #1  (rust)\n    a\n    b\n");
    }

    #[test]
    fn test_blocks_separated_by_blank_line() {
        let output = format_snippet_list(&[snippet(0, 1, "a", ""), snippet(1, 2, "b", "")]);
        assert!(output.contains("    a\n\n[1] #2"));
    }

    #[test]
    fn test_category_list() {
        assert_eq!(format_category_list(&[]), "No categories found");
        let categories = vec!["work".to_string(), "home".to_string()];
        assert_eq!(format_category_list(&categories), "work\nhome\n");
    }
}
