//! Block letter font for the hero name.

/// Rows in every glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Columns between adjacent glyphs.
pub const GLYPH_GAP: usize = 1;

type Glyph = [&'static str; GLYPH_HEIGHT];

/// Letters A to Z, 5 lines tall and 5 chars wide.
pub const LETTERS: [Glyph; 26] = [
    // A
    [" ███ ", "█   █", "█████", "█   █", "█   █"],
    // B
    ["████ ", "█   █", "████ ", "█   █", "████ "],
    // C
    [" ████", "█    ", "█    ", "█    ", " ████"],
    // D
    ["████ ", "█   █", "█   █", "█   █", "████ "],
    // E
    ["█████", "█    ", "████ ", "█    ", "█████"],
    // F
    ["█████", "█    ", "████ ", "█    ", "█    "],
    // G
    [" ████", "█    ", "█  ██", "█   █", " ████"],
    // H
    ["█   █", "█   █", "█████", "█   █", "█   █"],
    // I
    ["█████", "  █  ", "  █  ", "  █  ", "█████"],
    // J
    ["█████", "   █ ", "   █ ", "█  █ ", " ██  "],
    // K
    ["█   █", "█  █ ", "███  ", "█  █ ", "█   █"],
    // L
    ["█    ", "█    ", "█    ", "█    ", "█████"],
    // M
    ["█   █", "██ ██", "█ █ █", "█   █", "█   █"],
    // N
    ["█   █", "██  █", "█ █ █", "█  ██", "█   █"],
    // O
    [" ███ ", "█   █", "█   █", "█   █", " ███ "],
    // P
    ["████ ", "█   █", "████ ", "█    ", "█    "],
    // Q
    [" ███ ", "█   █", "█ █ █", "█  █ ", " ██ █"],
    // R
    ["████ ", "█   █", "████ ", "█  █ ", "█   █"],
    // S
    [" ████", "█    ", " ███ ", "    █", "████ "],
    // T
    ["█████", "  █  ", "  █  ", "  █  ", "  █  "],
    // U
    ["█   █", "█   █", "█   █", "█   █", " ███ "],
    // V
    ["█   █", "█   █", "█   █", " █ █ ", "  █  "],
    // W
    ["█   █", "█   █", "█ █ █", "██ ██", "█   █"],
    // X
    ["█   █", " █ █ ", "  █  ", " █ █ ", "█   █"],
    // Y
    ["█   █", " █ █ ", "  █  ", "  █  ", "  █  "],
    // Z
    ["█████", "   █ ", "  █  ", " █   ", "█████"],
];

/// Word separator.
pub const SPACE: Glyph = ["   ", "   ", "   ", "   ", "   "];

/// Glyph for `ch`, case-insensitive. Unsupported characters have none.
pub fn glyph(ch: char) -> Option<Glyph> {
    match ch.to_ascii_uppercase() {
        c @ 'A'..='Z' => Some(LETTERS[(c as u8 - b'A') as usize]),
        ' ' => Some(SPACE),
        _ => None,
    }
}

/// Width of a glyph in columns.
pub fn glyph_width(glyph: &Glyph) -> usize {
    glyph[0].chars().count()
}

/// Columns needed to draw `text`, or `None` if it has unsupported characters.
pub fn art_width(text: &str) -> Option<usize> {
    let mut width = 0;
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            width += GLYPH_GAP;
        }
        width += glyph_width(&glyph(ch)?);
    }
    Some(width)
}

/// Build block art for `text`, one string per line.
///
/// Returns `None` when `text` contains characters the font lacks.
pub fn build_word_art(text: &str) -> Option<Vec<String>> {
    let glyphs = text.chars().map(glyph).collect::<Option<Vec<_>>>()?;
    let mut lines = Vec::with_capacity(GLYPH_HEIGHT);
    for row in 0..GLYPH_HEIGHT {
        let mut line = String::new();
        for (i, glyph) in glyphs.iter().enumerate() {
            if i > 0 {
                line.push_str(&" ".repeat(GLYPH_GAP));
            }
            line.push_str(glyph[row]);
        }
        lines.push(line);
    }
    Some(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_are_uniform() {
        for letter in LETTERS {
            for row in letter {
                assert_eq!(row.chars().count(), 5);
            }
        }
    }

    #[test]
    fn test_art_width_matches_built_art() {
        let art = build_word_art("Hi There").unwrap();
        assert_eq!(art.len(), GLYPH_HEIGHT);
        let width = art_width("Hi There").unwrap();
        for line in &art {
            assert_eq!(line.chars().count(), width);
        }
        assert_eq!(width, 7 * 5 + 3 + 7 * GLYPH_GAP);
    }

    #[test]
    fn test_unsupported_characters() {
        assert!(glyph('7').is_none());
        assert!(art_width("R2D2").is_none());
        assert!(build_word_art("O'Neil").is_none());
    }
}
