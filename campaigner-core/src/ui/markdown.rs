//! Markdown rendering for generated campaigns

use termimad::MadSkin;
use termimad::crossterm::style::Color;

/// Skin used for campaign output: cyan headings, yellow bold text
pub fn campaign_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    for header in skin.headers.iter_mut() {
        header.set_fg(Color::Cyan);
    }
    skin.bold.set_fg(Color::Yellow);
    skin
}

/// Render Markdown to a string sized for the current terminal
pub fn render_markdown_to_string(text: &str) -> String {
    campaign_skin().term_text(text).to_string()
}

/// Render Markdown to stdout. Piped output gets the raw text instead so the
/// result stays copyable.
pub fn render_markdown(text: &str) {
    if super::terminal::is_piped_output() {
        println!("{text}");
    } else {
        print!("{}", render_markdown_to_string(text));
    }
}
