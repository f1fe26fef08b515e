//! Plain-text grid for the reward-type listing.

use reward_store::RewardSummary;

const HEADERS: [&str; 3] = ["id", "reward name", "number of codes left"];

/// Render `rows` as a box-drawn grid.
///
/// Numeric columns are right-aligned, names left-aligned.
pub fn render(rows: &[RewardSummary]) -> String {
    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|row| {
            [
                row.id.to_string(),
                row.display_name.clone(),
                row.remaining.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };

    let line = |cells: [&str; 3]| {
        format!(
            "│ {:>w0$} │ {:<w1$} │ {:>w2$} │",
            cells[0],
            cells[1],
            cells[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        )
    };

    let mut lines = vec![border("┌", "┬", "┐"), line(HEADERS)];
    for row in &cells {
        lines.push(border("├", "┼", "┤"));
        lines.push(line([row[0].as_str(), row[1].as_str(), row[2].as_str()]));
    }
    lines.push(border("└", "┴", "┘"));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: usize, display_name: &str, remaining: usize) -> RewardSummary {
        RewardSummary {
            id,
            name: format!("{}xx", display_name),
            display_name: display_name.to_string(),
            remaining,
        }
    }

    #[test]
    fn test_render_rows() {
        let table = render(&[summary(0, "trial", 12), summary(1, "premium", 0)]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "│ id │ reward name │ number of codes left │");
        assert_eq!(lines[3], "│  0 │ trial       │                   12 │");
        assert_eq!(lines[5], "│  1 │ premium     │                    0 │");
        assert!(lines[0].starts_with('┌') && lines[6].ends_with('┘'));
    }

    #[test]
    fn test_long_names_widen_column() {
        let table = render(&[summary(0, "an_unusually_long_reward", 1)]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(
            lines[3],
            "│  0 │ an_unusually_long_reward │                    1 │"
        );
        assert_eq!(lines[1].chars().count(), lines[3].chars().count());
    }

    #[test]
    fn test_render_empty() {
        let table = render(&[]);
        assert_eq!(table.lines().count(), 3);
    }
}
