use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextInput {}

impl<'a> TextInput {
    /// Single line input used by the booking form.
    pub fn new(title: &str, placeholder: &str) -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(placeholder);
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title.to_string())
                .padding(Padding::new(1, 1, 0, 0)),
        );

        return textarea;
    }

    pub fn focus(textarea: &mut tui_textarea::TextArea<'a>, focused: bool) {
        let mut block = textarea.block().cloned().unwrap_or_default();
        if focused {
            block = block
                .border_type(BorderType::Double)
                .title_style(Style::default().add_modifier(Modifier::BOLD));
            textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        } else {
            block = block
                .border_type(BorderType::Rounded)
                .title_style(Style::default());
            textarea.set_cursor_style(Style::default());
        }
        textarea.set_block(block);
    }

    pub fn value(textarea: &tui_textarea::TextArea<'a>) -> String {
        return textarea.lines().join("").trim().to_string();
    }
}
