//! Caption, alt and status line wording shared by the render projection.

pub fn alt_text(label: &str, panel_number: usize) -> String {
    format!("{label} — panel {panel_number}")
}

pub fn caption_text(label: &str, panel_number: usize, panel_total: usize) -> String {
    format!("{label} — {panel_number}/{panel_total}")
}

pub fn status_text(
    label: &str,
    panel_number: usize,
    panel_total: usize,
    hint: Option<&str>,
) -> String {
    let mut status = format!("Episode: {label} · Panel {panel_number} of {panel_total}");
    if let Some(hint) = hint {
        status.push_str(hint);
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_and_status_wording() {
        assert_eq!(alt_text("A", 2), "A — panel 2");
        assert_eq!(caption_text("A", 2, 5), "A — 2/5");
        assert_eq!(status_text("A", 2, 5, None), "Episode: A · Panel 2 of 5");
        assert_eq!(
            status_text("A", 2, 5, Some(" · tap")),
            "Episode: A · Panel 2 of 5 · tap"
        );
    }
}
