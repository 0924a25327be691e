//! Plain-text table output

use crate::rpc::ChainStatus;

/// Format a number with thousands separators
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let len = s.len();

    if len <= 3 {
        return s;
    }

    let mut result = String::with_capacity(len + (len - 1) / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Render statuses as an aligned table; unknown values show as `-`
pub fn render_table(statuses: &[ChainStatus]) -> String {
    let rows: Vec<[String; 3]> = statuses
        .iter()
        .map(|s| {
            [
                s.url.clone(),
                s.height.map(format_thousands).unwrap_or_else(|| "-".to_string()),
                s.latency
                    .map(|ms| format!("{} ms", ms))
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    let header = ["URL", "HEIGHT", "LATENCY"];
    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let mut push_row = |cells: [&str; 3]| {
        out.push_str(&format!(
            "{:<w0$}  {:>w1$}  {:>w2$}\n",
            cells[0],
            cells[1],
            cells[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        ));
    };

    push_row(header);
    for row in &rows {
        push_row([row[0].as_str(), row[1].as_str(), row[2].as_str()]);
    }

    out
}
