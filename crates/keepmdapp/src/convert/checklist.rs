use crate::model::TaskItem;

/// Renders Keep list items as a Markdown task list followed by one blank line.
///
/// Item text is inserted verbatim. An empty list renders as just `"\n"`.
pub fn render_checklist(items: &[TaskItem]) -> String {
    let mut out: String = items
        .iter()
        .map(|item| {
            let status = if item.is_checked { 'X' } else { ' ' };
            format!("- [{}] {}\n", status, item.text)
        })
        .collect();
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_checked_and_unchecked() {
        let items = vec![TaskItem::new("A", true), TaskItem::new("B", false)];
        assert_eq!(render_checklist(&items), "- [X] A\n- [ ] B\n\n");
    }

    #[test]
    fn test_empty_list_is_blank_line() {
        assert_eq!(render_checklist(&[]), "\n");
    }

    #[test]
    fn test_text_is_not_escaped() {
        let items = vec![TaskItem::new("*bold* [link](x) #tag", false)];
        assert_eq!(render_checklist(&items), "- [ ] *bold* [link](x) #tag\n\n");
    }

    #[test]
    fn test_one_line_per_item() {
        let items: Vec<TaskItem> = (0..5).map(|i| TaskItem::new(i.to_string(), i % 2 == 0)).collect();
        let rendered = render_checklist(&items);
        let lines: Vec<&str> = rendered.trim_end_matches('\n').lines().collect();
        assert_eq!(lines.len(), 5);
        for (line, item) in lines.iter().zip(&items) {
            let expected = if item.is_checked { "- [X] " } else { "- [ ] " };
            assert!(line.starts_with(expected));
        }
        assert!(rendered.ends_with("\n\n"));
    }
}
