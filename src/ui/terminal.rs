use std::collections::VecDeque;

use crate::console::Console;

/// Console panel: scrollback above, one input line below. Submitted lines are
/// queued in order until the main loop takes them.
pub struct Terminal {
    lines: VecDeque<String>,
    scrollback: usize,
    input: String,
    submitted: VecDeque<String>,
    scroll_to_top: bool,
}

impl Terminal {
    pub fn new(scrollback: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            scrollback: scrollback.max(1),
            input: String::new(),
            submitted: VecDeque::new(),
            scroll_to_top: false,
        }
    }

    /// Jump the scrollback to its first line on the next frame.
    pub fn scroll_to_top(&mut self) {
        self.scroll_to_top = true;
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Next submitted input line, oldest first.
    pub fn next_input(&mut self) -> Option<String> {
        self.submitted.pop_front()
    }

    fn submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        self.submitted.push_back(line);
    }

    pub fn show(&mut self, ctx: &egui::Context, width: f32) {
        egui::SidePanel::right("terminal")
            .exact_width(width)
            .resizable(false)
            .show(ctx, |ui| {
                let output_height = (ui.available_height() - 36.0).max(0.0);
                let mut area = egui::ScrollArea::vertical()
                    .max_height(output_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true);
                if std::mem::take(&mut self.scroll_to_top) {
                    area = area.vertical_scroll_offset(0.0);
                }
                area.show(ui, |ui| {
                    for line in &self.lines {
                        ui.label(egui::RichText::new(line).monospace());
                    }
                });

                ui.separator();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.input)
                        .desired_width(f32::INFINITY)
                        .font(egui::TextStyle::Monospace)
                        .hint_text("p | r a=40 | t 5"),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.submit();
                    response.request_focus();
                }
            });
    }
}

impl Console for Terminal {
    fn println(&mut self, line: &str) {
        // A multi-line report becomes several scrollback rows.
        for row in line.split('\n') {
            self.lines.push_back(row.to_string());
        }
        while self.lines.len() > self.scrollback {
            self.lines.pop_front();
        }
    }
}
