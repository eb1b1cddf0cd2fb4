use super::TextMeasure;

/// Greedy per-character line breaking against a pixel width budget.
///
/// Every character is a break opportunity, which suits scripts written without
/// spaces between words. A character wider than `max_width` on its own still
/// gets a line to itself and may overflow. Concatenating the returned lines
/// always reproduces `text`.
pub fn wrap_text<M: TextMeasure + ?Sized>(text: &str, measure: &M, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for ch in text.chars() {
        let mut candidate = line.clone();
        candidate.push(ch);
        if measure.text_width(&candidate) <= max_width {
            line = candidate;
        } else {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            line.push(ch);
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// ASCII advances 10px, anything else 20px
    struct HalfWidth;

    impl TextMeasure for HalfWidth {
        fn text_width(&self, text: &str) -> u32 {
            text.chars().map(|c| if c.is_ascii() { 10 } else { 20 }).sum()
        }

        fn line_height(&self) -> u32 {
            20
        }
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(wrap_text("", &HalfWidth, 100).is_empty());
    }

    #[test]
    fn fits_on_one_line() {
        assert_eq!(wrap_text("abc", &HalfWidth, 30), vec!["abc"]);
    }

    #[test]
    fn breaks_mixed_width_text_greedily() {
        // 日(20)本(20)a(10) = 50 fits, 語(20) would make 70
        let lines = wrap_text("日本a語bc", &HalfWidth, 50);
        assert_eq!(lines, vec!["日本a", "語bc"]);
    }

    #[test]
    fn spaces_are_ordinary_break_points() {
        let lines = wrap_text("ab cd", &HalfWidth, 20);
        assert_eq!(lines, vec!["ab", " c", "d"]);
    }

    #[test]
    fn oversized_character_gets_its_own_line() {
        let lines = wrap_text("日a日", &HalfWidth, 15);
        assert_eq!(lines, vec!["日", "a", "日"]);

        // No empty leading line when the very first char is too wide
        let lines = wrap_text("日", &HalfWidth, 5);
        assert_eq!(lines, vec!["日"]);
    }

    #[test]
    fn rejoining_reproduces_input_and_lines_fit() {
        let samples = [
            "日本で一番高い山は何でしょう？",
            "Ans. : 富士山 (Mt. Fuji, 3776m)",
            "  leading and trailing  ",
            "😀 emoji ✓ and ｶﾀｶﾅ",
        ];
        for width in [5u32, 10, 19, 20, 35, 120, 1000] {
            for s in samples {
                let lines = wrap_text(s, &HalfWidth, width);
                assert_eq!(lines.concat(), s);
                for line in &lines {
                    assert!(!line.is_empty());
                    let w = HalfWidth.text_width(line);
                    assert!(w <= width || line.chars().count() == 1, "{line:?} at {width}");
                }
            }
        }
    }
}
