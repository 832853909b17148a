use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const ART: [&str; 5] = [
    r" _____ __  __  ___      _ ___ _______   __",
    r"| ____|  \/  |/ _ \    | |_ _|  ___\ \ / /",
    r"|  _| | |\/| | | | |_  | || || |_   \ V / ",
    r"| |___| |  | | |_| | |_| || ||  _|   | |  ",
    r"|_____|_|  |_|\___/ \___/|___|_|     |_|  ",
];

const TAGLINE: &str = "swap the faces in any image for emoji";

/// Banner rows plus one spacer and the tagline.
pub const HEIGHT: u16 = ART.len() as u16 + 2;

/// Static header; the terminal stand-in for the site's masthead image.
pub fn render(frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = ART
        .iter()
        .map(|row| Line::from(Span::styled(*row, Theme::banner())))
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(TAGLINE, Theme::tagline())));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
