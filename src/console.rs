/// Line-oriented text output for command results and generation reports.
pub trait Console {
    fn println(&mut self, line: &str);
}

impl Console for Vec<String> {
    fn println(&mut self, line: &str) {
        self.push(line.to_string());
    }
}
