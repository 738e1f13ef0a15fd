use std::fmt::Write as _;

/// Drawing surface able to place rotated text.
pub trait LabelRenderer {
    /// Draws `text` rotated by `angle_degrees` around the anchor `(x, y)`.
    fn draw_rotated_label(&mut self, text: &str, x: f32, y: f32, angle_degrees: f32);
}

/// Bar value labels drawn at a fixed angle so long numbers do not overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngledLabels {
    pub angle_degrees: f32,
    pub x_offset: f32,
    pub y_offset: f32,
}

impl Default for AngledLabels {
    fn default() -> Self {
        Self {
            angle_degrees: -45.0,
            x_offset: 0.0,
            y_offset: 10.0,
        }
    }
}

impl AngledLabels {
    pub fn anchor(&self, x: f32, y: f32) -> (f32, f32) {
        (x + self.x_offset, y + self.y_offset)
    }

    pub fn draw_labels<R, S>(&self, renderer: &mut R, labels: &[(S, f32, f32)])
    where
        R: LabelRenderer + ?Sized,
        S: AsRef<str>,
    {
        for (text, x, y) in labels {
            let text = text.as_ref();
            if text.is_empty() {
                continue;
            }
            let (x, y) = self.anchor(*x, *y);
            renderer.draw_rotated_label(text, x, y, self.angle_degrees);
        }
    }
}

/// Collects labels as SVG `<text>` elements.
#[derive(Debug, Default)]
pub struct SvgLabelRenderer {
    svg: String,
}

impl SvgLabelRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_svg(self) -> String {
        self.svg
    }

    fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                c => escaped.push(c),
            }
        }
        escaped
    }
}

impl LabelRenderer for SvgLabelRenderer {
    fn draw_rotated_label(&mut self, text: &str, x: f32, y: f32, angle_degrees: f32) {
        let _ = writeln!(
            self.svg,
            r#"<text x="{x}" y="{y}" transform="rotate({angle_degrees} {x} {y})">{}</text>"#,
            Self::escape(text)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(String, f32, f32, f32)>,
    }

    impl LabelRenderer for Recorder {
        fn draw_rotated_label(&mut self, text: &str, x: f32, y: f32, angle_degrees: f32) {
            self.calls.push((text.to_owned(), x, y, angle_degrees));
        }
    }

    #[test]
    fn labels_are_offset_and_rotated() {
        let layout = AngledLabels {
            angle_degrees: 30.0,
            x_offset: 2.0,
            y_offset: -4.0,
        };
        let mut recorder = Recorder::default();
        layout.draw_labels(&mut recorder, &[("1200", 10.0, 20.0), ("800", 30.0, 20.0)]);

        assert_eq!(
            recorder.calls,
            vec![
                ("1200".to_owned(), 12.0, 16.0, 30.0),
                ("800".to_owned(), 32.0, 16.0, 30.0),
            ]
        );
    }

    #[test]
    fn empty_labels_are_skipped() {
        let mut recorder = Recorder::default();
        AngledLabels::default().draw_labels(&mut recorder, &[("", 0.0, 0.0), ("5", 0.0, 0.0)]);
        assert_eq!(recorder.calls.len(), 1);
        assert_eq!(recorder.calls[0].3, -45.0);
    }

    #[test]
    fn svg_output_is_escaped() {
        let mut svg = SvgLabelRenderer::new();
        svg.draw_rotated_label("a<b", 1.0, 2.0, -45.0);
        assert_eq!(
            svg.into_svg(),
            "<text x=\"1\" y=\"2\" transform=\"rotate(-45 1 2)\">a&lt;b</text>\n"
        );
    }
}
