use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;

use super::Reply;

const TEXT_COLOR: Color = Color::AnsiValue(231);

fn accent(color: u32) -> Color {
    Color::Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Draws the reply as a framed card. Field names and the title use the
/// card's accent color; the footer is dimmed.
pub fn render_card<W: Write>(out: &mut W, reply: &Reply) -> std::io::Result<()> {
    let width = reply
        .lines()
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let accent = accent(reply.color);
    let pad = |used: usize| " ".repeat(width.saturating_sub(used));

    queue!(
        out,
        SetForegroundColor(accent),
        Print(format!("╔{:═<w$}╗\n", "", w = width + 2)),
        Print("║ "),
        SetAttribute(Attribute::Bold),
        Print(&reply.title),
        SetAttribute(Attribute::Reset),
        SetForegroundColor(accent),
        Print(format!("{} ║\n", pad(reply.title.chars().count()))),
        Print(format!("╠{:═<w$}╣\n", "", w = width + 2)),
    )?;

    let mut body: Vec<(Option<&str>, String)> = Vec::new();
    if let Some(description) = &reply.description {
        body.push((None, description.clone()));
    }
    if let Some(thumbnail) = &reply.thumbnail {
        body.push((Some("Icon"), thumbnail.clone()));
    }
    for field in &reply.fields {
        body.push((Some(field.name.as_str()), field.value.clone()));
    }

    for (name, value) in &body {
        queue!(out, SetForegroundColor(accent), Print("║ "))?;
        let used = match name {
            Some(name) => {
                queue!(
                    out,
                    Print(format!("{name}: ")),
                    SetForegroundColor(TEXT_COLOR),
                    Print(value),
                )?;
                name.chars().count() + 2 + value.chars().count()
            }
            None => {
                queue!(out, SetForegroundColor(TEXT_COLOR), Print(value))?;
                value.chars().count()
            }
        };
        queue!(
            out,
            SetForegroundColor(accent),
            Print(format!("{} ║\n", pad(used)))
        )?;
    }

    if let Some(footer) = &reply.footer {
        queue!(
            out,
            Print(format!("╟{:─<w$}╢\n", "", w = width + 2)),
            Print("║ "),
            SetAttribute(Attribute::Dim),
            Print(footer),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(accent),
            Print(format!("{} ║\n", pad(footer.chars().count()))),
        )?;
    }

    queue!(
        out,
        Print(format!("╚{:═<w$}╝\n", "", w = width + 2)),
        ResetColor
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_color_components() {
        assert_eq!(
            accent(0xC19A6B),
            Color::Rgb {
                r: 0xC1,
                g: 0x9A,
                b: 0x6B
            }
        );
    }

    #[test]
    fn test_render_contains_every_line() {
        let reply = Reply::usage();
        let mut buffer = Vec::new();
        render_card(&mut buffer, &reply).unwrap();

        let rendered = String::from_utf8(buffer).unwrap();
        assert!(rendered.contains("Command"));
        assert!(rendered.contains("lol_stats <player> [--region <code>]"));
        assert!(rendered.contains("Example: `lol_stats Faker --region kr`"));
        assert!(rendered.starts_with("\u{1b}["), "card should start with a color code");
        assert_eq!(rendered.matches('╔').count(), 1);
        assert_eq!(rendered.matches('╚').count(), 1);
    }

    #[test]
    fn test_render_failure_card_has_no_footer_rule() {
        let reply = Reply::from_failure(&crate::error::LookupFailure::Transport, &["br"]);
        let mut buffer = Vec::new();
        render_card(&mut buffer, &reply).unwrap();

        let rendered = String::from_utf8(buffer).unwrap();
        assert!(rendered.contains("Connection error."));
        assert!(!rendered.contains('╟'));
    }
}
