//! Table rendering
//!
//! Boxed, center-aligned text tables for the "view all" screen.

/// Render `rows` under `headers` as a boxed table
///
/// ```text
/// +----+-------------+
/// | id |    name     |
/// +----+-------------+
/// | 1  | Ruchi Singh |
/// +----+-------------+
/// ```
///
/// Short rows are padded with blank cells; extra cells are dropped.
pub fn render<H, C>(headers: &[H], rows: &[Vec<C>]) -> String
where
    H: AsRef<str>,
    C: AsRef<str>,
{
    let mut widths: Vec<usize> = headers.iter().map(|h| width(h.as_ref())).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(width(cell.as_ref()));
        }
    }

    let rule = rule(&widths);
    let mut out = String::new();
    out.push_str(&rule);
    out.push_str(&line(&widths, headers.iter().map(|h| h.as_ref())));
    out.push_str(&rule);
    for row in rows {
        let cells = (0..widths.len()).map(|i| row.get(i).map_or("", |c| c.as_ref()));
        out.push_str(&line(&widths, cells));
    }
    out.push_str(&rule);
    out
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn rule(widths: &[usize]) -> String {
    let mut s = String::from("+");
    for w in widths {
        s.push_str(&"-".repeat(w + 2));
        s.push('+');
    }
    s.push('\n');
    s
}

fn line<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
    let mut s = String::from("|");
    for (w, cell) in widths.iter().zip(cells) {
        let pad = w - width(cell);
        let left = pad / 2;
        s.push(' ');
        s.push_str(&" ".repeat(left));
        s.push_str(cell);
        s.push_str(&" ".repeat(pad - left));
        s.push_str(" |");
    }
    s.push('\n');
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_centers_cells() {
        let table = render(&["id", "name"], &[vec!["1", "Ruchi Singh"]]);
        let expected = "\
+----+-------------+
| id |    name     |
+----+-------------+
| 1  | Ruchi Singh |
+----+-------------+
";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_render_pads_short_rows() {
        let table = render(&["a", "b"], &[vec!["xyz"]]);
        assert!(table.contains("| xyz |   |"));
    }

    #[test]
    fn test_render_counts_chars_not_bytes() {
        let table = render(&["name"], &[vec!["Zoë"]]);
        assert!(table.starts_with("+------+\n"));
    }

    #[test]
    fn test_render_no_rows() {
        let table = render::<&str, &str>(&["id"], &[]);
        assert_eq!(table, "+----+\n| id |\n+----+\n+----+\n");
    }
}
