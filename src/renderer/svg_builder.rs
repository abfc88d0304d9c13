//! SVG builder. Accumulates SVG elements and produces the final string.
//!
//! Also holds the text escaping and number formatting used by every element,
//! so output is well-formed and byte-identical for identical input.

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    style: Vec<String>,
    depth: usize,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            style: Vec::new(),
            depth: 1,
            width,
            height,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&format!(
            r#"<svg id="Layer_1" data-name="Layer 1" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
            num(self.width),
            num(self.height)
        ));
        svg.push('\n');
        if !self.style.is_empty() {
            svg.push_str("  <defs>\n    <style>\n");
            for rule in &self.style {
                svg.push_str("      ");
                svg.push_str(rule);
                svg.push('\n');
            }
            svg.push_str("    </style>\n  </defs>\n");
        }
        for el in &self.elements {
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Add one CSS rule to the document's style block.
    pub(super) fn css(&mut self, selector: &str, body: &str) {
        self.style.push(format!("{selector} {{ {body} }}"));
    }

    fn push(&mut self, el: String) {
        let mut line = "  ".repeat(self.depth);
        line.push_str(&el);
        self.elements.push(line);
    }

    pub(super) fn open_group(&mut self, class: Option<&str>, transform: &str) {
        let class_attr = class.map(|c| format!(r#" class="{c}""#)).unwrap_or_default();
        self.push(format!(r#"<g{class_attr} transform="{transform}">"#));
        self.depth += 1;
    }

    pub(super) fn close_group(&mut self) {
        self.depth = self.depth.saturating_sub(1).max(1);
        self.push("</g>".to_string());
    }

    pub(super) fn rect(&mut self, class: &str, x: f64, y: f64, w: f64, h: f64, radius: f64) {
        if radius > 0.0 {
            self.push(format!(
                r#"<rect class="{}" x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}"/>"#,
                class, num(x), num(y), num(w), num(h), num(radius), num(radius)
            ));
        } else {
            self.push(format!(
                r#"<rect class="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
                class, num(x), num(y), num(w), num(h)
            ));
        }
    }

    pub(super) fn circle(&mut self, class: &str, cx: f64, cy: f64, r: f64) {
        self.push(format!(
            r#"<circle class="{}" cx="{}" cy="{}" r="{}"/>"#,
            class, num(cx), num(cy), num(r)
        ));
    }

    pub(super) fn path(&mut self, class: Option<&str>, d: &str) {
        match class {
            Some(c) => self.push(format!(r#"<path class="{c}" d="{d}"/>"#)),
            None => self.push(format!(r#"<path d="{d}"/>"#)),
        }
    }

    pub(super) fn image(&mut self, x: f64, y: f64, w: f64, h: f64, href: &str) {
        self.push(format!(
            r#"<image x="{}" y="{}" width="{}" height="{}" href="{}" preserveAspectRatio="xMidYMid slice"/>"#,
            num(x), num(y), num(w), num(h), escape_xml(href)
        ));
    }

    /// Single-line text; `content` is escaped here.
    pub(super) fn text(&mut self, class: &str, x: f64, y: f64, anchor: &str, hanging: bool, content: &str) {
        let baseline = if hanging { r#" dominant-baseline="hanging""# } else { "" };
        self.push(format!(
            r#"<text x="{}" y="{}"{} class="{}" text-anchor="{}">{}</text>"#,
            num(x), num(y), baseline, class, anchor, escape_xml(content)
        ));
    }

    /// Stacked lines in one `<text>`; each line after the first advances by `line_advance`.
    pub(super) fn text_lines(&mut self, class: &str, x: f64, y: f64, line_advance: f64, lines: &[&str]) {
        let spans: String = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let dy = if i == 0 { 0.0 } else { line_advance };
                format!(r#"<tspan x="{}" dy="{}">{}</tspan>"#, num(x), num(dy), escape_xml(line))
            })
            .collect();
        self.push(format!(
            r#"<text x="{}" y="{}" dominant-baseline="hanging" class="{}" text-anchor="start">{}</text>"#,
            num(x), num(y), class, spans
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Escaping & number formatting
// ═══════════════════════════════════════════════════════════════════════

/// Escape text for XML content and attribute values.
///
/// Markup characters become named entities and every non-ASCII code point
/// becomes a decimal character reference. Characters outside the XML 1.0
/// `Char` production (C0 controls other than tab and LF, U+FFFE, U+FFFF)
/// are replaced with U+FFFD. CR and DEL are written as references so they
/// survive parsing unchanged.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\t' | '\n' => out.push(ch),
            '\r' => out.push_str("&#13;"),
            '\u{7f}' => out.push_str("&#127;"),
            c if c < ' ' || c == '\u{FFFE}' || c == '\u{FFFF}' => out.push_str("&#65533;"),
            c if c.is_ascii() => out.push(c),
            c => out.push_str(&format!("&#{};", c as u32)),
        }
    }
    out
}

/// Format a coordinate with at most two decimals and no trailing zeros.
pub(super) fn num(v: f64) -> String {
    let v = if v.abs() < 0.005 || !v.is_finite() { 0.0 } else { v };
    let s = format!("{v:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_markup_and_non_ascii() {
        assert_eq!(escape_xml("Tom & Jerry <live>"), "Tom &amp; Jerry &lt;live&gt;");
        assert_eq!(escape_xml(r#"Say "hi" it's"#), "Say &quot;hi&quot; it&#39;s");
        assert_eq!(escape_xml("Beyoncé"), "Beyonc&#233;");
        assert_eq!(escape_xml("童年"), "&#31461;&#24180;");
        // Astral code points are encoded whole, not as surrogate halves
        assert_eq!(escape_xml("🎵"), "&#127925;");
        assert_eq!(escape_xml("a\u{7}b"), "a&#65533;b");
    }

    #[test]
    fn characters_xml_cannot_carry_are_replaced() {
        assert_eq!(escape_xml("\u{FFFE}\u{FFFF}"), "&#65533;&#65533;");
        assert_eq!(escape_xml("\u{0}"), "&#65533;");
        assert_eq!(escape_xml("A\u{7f}B"), "A&#127;B");
        assert_eq!(escape_xml("a\r\nb\tc"), "a&#13;\nb\tc");
        assert_eq!(escape_xml("\u{FFFD}"), "&#65533;");
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(num(36.0), "36");
        assert_eq!(num(535.19), "535.19");
        assert_eq!(num(6.8), "6.8");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(853.99), "853.99");
        assert_eq!(num(1.005_1), "1.01");
    }

    #[test]
    fn groups_nest_and_build_closes_document() {
        let mut svg = SvgBuilder::new(10.0, 20.0);
        svg.css(".a", "fill:#000;");
        svg.open_group(None, "translate(1, 2)");
        svg.circle("a", 1.0, 2.0, 3.0);
        svg.close_group();
        let out = svg.build();
        assert!(out.starts_with("<?xml"));
        assert!(out.contains(r#"viewBox="0 0 10 20""#));
        assert!(out.contains(".a { fill:#000; }"));
        assert!(out.contains("    <circle class=\"a\" cx=\"1\" cy=\"2\" r=\"3\"/>"));
        assert!(out.trim_end().ends_with("</svg>"));
    }
}
