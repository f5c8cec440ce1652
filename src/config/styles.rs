//! Widget style table.
//!
//! Styles are written as strings like `"red bold"` or `"white on blue"` in
//! the config file and parsed into ratatui styles on load.

use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(key, style_str)| (key, parse_style(&style_str)))
            .collect();

        Ok(Styles(styles))
    }
}

/// Parse a style string: an optional foreground, an optional `on <bg>`, and
/// any number of modifier words. Unknown words are ignored.
pub fn parse_style(line: &str) -> Style {
    let (fg_part, bg_part) = match line.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None => (line, None),
    };

    let mut style = Style::default();
    let mut fg_set = false;
    for word in fg_part.split_whitespace() {
        if let Some(modifier) = parse_modifier(word) {
            style = style.add_modifier(modifier);
        } else if !fg_set {
            if let Some(color) = parse_color(word) {
                style = style.fg(color);
                fg_set = true;
            }
        }
    }

    if let Some(bg_part) = bg_part {
        for word in bg_part.split_whitespace() {
            if let Some(modifier) = parse_modifier(word) {
                style = style.add_modifier(modifier);
            } else if let Some(color) = parse_color(word) {
                style = style.bg(color);
            }
        }
    }

    style
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "blink" => Some(Modifier::SLOW_BLINK),
        "rapidblink" => Some(Modifier::RAPID_BLINK),
        "reversed" | "reverse" => Some(Modifier::REVERSED),
        "hidden" => Some(Modifier::HIDDEN),
        "crossedout" | "strikethrough" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}

fn parse_color(word: &str) -> Option<Color> {
    if let Some(hex) = word.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }
    if let Ok(index) = word.parse::<u8>() {
        return Some(Color::Indexed(index));
    }
    match word {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("red", Style::default().fg(Color::Red))]
    #[case("red bold", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))]
    #[case("gray italic", Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC))]
    #[case("white on blue", Style::default().fg(Color::White).bg(Color::Blue))]
    #[case("#ff6464", Style::default().fg(Color::Rgb(255, 100, 100)))]
    #[case("208", Style::default().fg(Color::Indexed(208)))]
    #[case("", Style::default())]
    #[case("notacolor", Style::default())]
    fn test_parse_style(#[case] raw: &str, #[case] expected: Style) {
        assert_eq!(parse_style(raw), expected);
    }

    #[test]
    fn test_styles_deserialize() {
        let styles: Styles =
            json5::from_str(r#"{ "ticker_up": "green", "status_bar": "gray italic" }"#)
                .expect("parses");
        assert_eq!(
            styles.get("ticker_up"),
            Some(&Style::default().fg(Color::Green))
        );
    }
}
