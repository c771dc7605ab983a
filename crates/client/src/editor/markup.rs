//! Screenplay markup parser
//!
//! Deterministic, line-oriented transformation of generated sample-script
//! markup into renderable blocks plus scene anchors for scroll-to-scene
//! navigation. Pure: no side effects, and re-parsing identical input yields
//! byte-identical output including anchor numbering.
//!
//! Recognized conventions:
//! - `# ` title line
//! - `Logline:` emphasized line
//! - `Characters:` heading followed by `- ` bullets, one per character
//! - `INT.` / `EXT.` / `INT./EXT.` / `EST.` / `I/E` sluglines
//! - a line wholly wrapped in `**...**` is a dialogue speaker cue
//! - inline `**bold**` and `*italic*` emphasis
//!
//! Anything else passes through as a plain paragraph. Malformed or
//! unterminated markers never fail; the unmatched fragment passes through
//! literally.

use once_cell::sync::Lazy;
use regex_lite::Regex;

static SLUGLINE: Lazy<Regex> = Lazy::new(|| {
    // Slugline prefixes per screenplay convention; dot required except I/E.
    Regex::new(r"^(?:INT\./EXT\.|INT\.|EXT\.|EST\.|I/E\.?)(?:\s|$)").expect("static pattern")
});

/// Inline span within a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
    Italic(String),
}

/// A rendered block element, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `# ` title line
    Title(Vec<Inline>),
    /// `Logline:` line, displayed emphasized
    Logline(Vec<Inline>),
    /// The `Characters:` heading opening the character section
    CharactersHeading,
    /// One `- ` bullet in the character section
    CharacterNote(Vec<Inline>),
    /// Slugline with its scroll-to anchor
    SceneHeading { anchor: String, text: String },
    /// Dialogue speaker cue (a wholly bolded line)
    Speaker(String),
    /// Any other non-blank line
    Paragraph(Vec<Inline>),
}

/// A stable per-parse identifier for a scene heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneAnchor {
    /// `scene-{n}`, assigned first-to-last in order of appearance
    pub id: String,
    /// The slugline text
    pub label: String,
}

/// Result of parsing a sample script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedScript {
    pub blocks: Vec<Block>,
    pub scene_anchors: Vec<SceneAnchor>,
    /// Character names extracted from the character section, in order
    pub characters: Vec<String>,
}

/// Line-classification state of the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Body,
    /// Inside the `Characters:` section; only `- ` bullets keep it open
    Characters,
}

/// Parse sample-script markup into blocks, anchors, and character names.
pub fn parse(input: &str) -> ParsedScript {
    let mut parsed = ParsedScript::default();
    let mut state = State::Body;
    let mut scene_index = 0usize;

    for raw_line in input.lines() {
        let line = raw_line.trim_end();
        let trimmed = line.trim();

        if trimmed.is_empty() {
            state = State::Body;
            continue;
        }

        if state == State::Characters {
            if let Some(bullet) = trimmed.strip_prefix("- ") {
                if let Some(name) = character_name(bullet) {
                    parsed.characters.push(name);
                }
                parsed.blocks.push(Block::CharacterNote(parse_inline(bullet)));
                continue;
            }
            state = State::Body;
        }

        if let Some(title) = trimmed.strip_prefix("# ") {
            parsed.blocks.push(Block::Title(parse_inline(title)));
        } else if trimmed.starts_with("Logline:") {
            parsed.blocks.push(Block::Logline(parse_inline(trimmed)));
        } else if trimmed == "Characters:" {
            parsed.blocks.push(Block::CharactersHeading);
            state = State::Characters;
        } else if SLUGLINE.is_match(trimmed) {
            let anchor = format!("scene-{scene_index}");
            scene_index += 1;
            parsed.scene_anchors.push(SceneAnchor {
                id: anchor.clone(),
                label: trimmed.to_string(),
            });
            parsed.blocks.push(Block::SceneHeading {
                anchor,
                text: trimmed.to_string(),
            });
        } else if let Some(name) = speaker_cue(trimmed) {
            parsed.blocks.push(Block::Speaker(name));
        } else {
            parsed.blocks.push(Block::Paragraph(parse_inline(trimmed)));
        }
    }

    parsed
}

/// Scene labels in script order (for the editor's scene sidebar).
pub fn scene_labels(parsed: &ParsedScript) -> Vec<String> {
    parsed
        .scene_anchors
        .iter()
        .map(|anchor| anchor.label.clone())
        .collect()
}

/// A line wholly wrapped in `**...**` is a speaker cue.
fn speaker_cue(line: &str) -> Option<String> {
    let inner = line.strip_prefix("**")?.strip_suffix("**")?;
    if inner.is_empty() || inner.contains('*') {
        return None;
    }
    Some(inner.to_string())
}

/// Extract the character name from a `- Name: description` bullet.
fn character_name(bullet: &str) -> Option<String> {
    let head = match bullet.split_once(':') {
        Some((head, _)) => head,
        None => bullet,
    };
    let name = head.replace("**", "").replace('*', "");
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Split a line into text/bold/italic spans.
///
/// Best-effort: an unterminated marker is emitted literally rather than
/// swallowing the rest of the line.
fn parse_inline(line: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut text = String::new();
    let mut rest = line;

    while let Some(pos) = rest.find('*') {
        text.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if let Some(after) = rest.strip_prefix("**") {
            match after.find("**") {
                Some(end) => {
                    flush(&mut spans, &mut text);
                    spans.push(Inline::Bold(after[..end].to_string()));
                    rest = &after[end + 2..];
                }
                None => {
                    // Unterminated bold marker: pass through literally
                    text.push_str("**");
                    rest = after;
                }
            }
        } else {
            let after = &rest[1..];
            match after.find('*') {
                Some(end) => {
                    flush(&mut spans, &mut text);
                    spans.push(Inline::Italic(after[..end].to_string()));
                    rest = &after[end + 1..];
                }
                None => {
                    text.push('*');
                    rest = after;
                }
            }
        }
    }

    text.push_str(rest);
    flush(&mut spans, &mut text);
    spans
}

fn flush(spans: &mut Vec<Inline>, text: &mut String) {
    if !text.is_empty() {
        spans.push(Inline::Text(std::mem::take(text)));
    }
}

/// Render parsed blocks to display HTML.
///
/// Consecutive character notes are grouped into a single list. Output is a
/// pure function of the blocks, so identical input markup renders to
/// byte-identical HTML.
pub fn render_html(parsed: &ParsedScript) -> String {
    let mut html = String::new();
    let mut in_list = false;

    for block in &parsed.blocks {
        let is_note = matches!(block, Block::CharacterNote(_));
        if in_list && !is_note {
            html.push_str("</ul>\n");
            in_list = false;
        }

        match block {
            Block::Title(spans) => {
                html.push_str("<h1>");
                render_spans(&mut html, spans);
                html.push_str("</h1>\n");
            }
            Block::Logline(spans) => {
                html.push_str("<p class=\"logline\"><em>");
                render_spans(&mut html, spans);
                html.push_str("</em></p>\n");
            }
            Block::CharactersHeading => {
                html.push_str("<h3>Characters:</h3>\n");
            }
            Block::CharacterNote(spans) => {
                if !in_list {
                    html.push_str("<ul>\n");
                    in_list = true;
                }
                html.push_str("<li>");
                render_spans(&mut html, spans);
                html.push_str("</li>\n");
            }
            Block::SceneHeading { anchor, text } => {
                html.push_str(&format!("<h3 id=\"{anchor}\">"));
                escape_into(&mut html, text);
                html.push_str("</h3>\n");
            }
            Block::Speaker(name) => {
                html.push_str("<p><strong>");
                escape_into(&mut html, name);
                html.push_str("</strong></p>\n");
            }
            Block::Paragraph(spans) => {
                html.push_str("<p>");
                render_spans(&mut html, spans);
                html.push_str("</p>\n");
            }
        }
    }

    if in_list {
        html.push_str("</ul>\n");
    }
    html
}

fn render_spans(html: &mut String, spans: &[Inline]) {
    for span in spans {
        match span {
            Inline::Text(text) => escape_into(html, text),
            Inline::Bold(text) => {
                html.push_str("<strong>");
                escape_into(html, text);
                html.push_str("</strong>");
            }
            Inline::Italic(text) => {
                html.push_str("<em>");
                escape_into(html, text);
                html.push_str("</em>");
            }
        }
    }
}

fn escape_into(html: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => html.push_str("&amp;"),
            '<' => html.push_str("&lt;"),
            '>' => html.push_str("&gt;"),
            other => html.push(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures::SAMPLE_SCRIPT;

    #[test]
    fn anchors_are_assigned_in_order_of_appearance() {
        let parsed = parse(SAMPLE_SCRIPT);
        let ids: Vec<&str> = parsed.scene_anchors.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["scene-0", "scene-1"]);
        assert_eq!(
            scene_labels(&parsed),
            vec!["INT. MAP ARCHIVE - NIGHT", "EXT. CANAL DISTRICT - DAWN"]
        );
    }

    #[test]
    fn parsing_is_idempotent() {
        let first = parse(SAMPLE_SCRIPT);
        let second = parse(SAMPLE_SCRIPT);
        assert_eq!(first, second);
        assert_eq!(render_html(&first), render_html(&second));
    }

    #[test]
    fn characters_are_extracted_from_bullets_in_order() {
        let parsed = parse(SAMPLE_SCRIPT);
        assert_eq!(parsed.characters, vec!["Mara", "Theo"]);
    }

    #[test]
    fn speaker_cues_become_speaker_blocks() {
        let parsed = parse("**MARA**\nWe can't stay here.");
        assert_eq!(
            parsed.blocks,
            vec![
                Block::Speaker("MARA".to_string()),
                Block::Paragraph(vec![Inline::Text("We can't stay here.".to_string())]),
            ]
        );
    }

    #[test]
    fn unterminated_bold_passes_through_literally() {
        let parsed = parse("An **unterminated marker");
        assert_eq!(
            parsed.blocks,
            vec![Block::Paragraph(vec![Inline::Text(
                "An **unterminated marker".to_string()
            )])]
        );
    }

    #[test]
    fn inline_emphasis_is_split_into_spans() {
        let parsed = parse("She *whispers* and **shouts** at once.");
        assert_eq!(
            parsed.blocks,
            vec![Block::Paragraph(vec![
                Inline::Text("She ".to_string()),
                Inline::Italic("whispers".to_string()),
                Inline::Text(" and ".to_string()),
                Inline::Bold("shouts".to_string()),
                Inline::Text(" at once.".to_string()),
            ])]
        );
    }

    #[test]
    fn unknown_text_passes_through_unchanged() {
        let parsed = parse("FADE IN:");
        assert_eq!(
            parsed.blocks,
            vec![Block::Paragraph(vec![Inline::Text("FADE IN:".to_string())])]
        );
    }

    #[test]
    fn blank_line_closes_the_character_section() {
        let input = "Characters:\n- Mara: a cartographer\n\n- not a character";
        let parsed = parse(input);
        assert_eq!(parsed.characters, vec!["Mara"]);
        // The dangling bullet after the blank line is a plain paragraph
        assert!(matches!(parsed.blocks.last(), Some(Block::Paragraph(_))));
    }

    #[test]
    fn html_escapes_raw_angle_brackets() {
        let parsed = parse("a <tag> & more");
        assert_eq!(render_html(&parsed), "<p>a &lt;tag&gt; &amp; more</p>\n");
    }
}
