use std::collections::VecDeque;

/// Number of output lines kept for the status readout.
pub const STATUS_LINES: usize = 10;

/// Tail of the most recent status lines.
#[derive(Debug, Clone, Default)]
pub struct StatusLog {
    lines: VecDeque<String>,
}

impl StatusLog {
    pub fn push(&mut self, line: impl Into<String>) {
        if self.lines.len() == STATUS_LINES {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    /// Replace everything with a single message
    pub fn set(&mut self, message: impl Into<String>) {
        self.lines.clear();
        self.lines.push_back(message.into());
    }

    pub fn render(&self) -> String {
        self.lines.iter().map(String::as_str).collect::<Vec<_>>().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_last_ten_lines() {
        let mut log = StatusLog::default();
        for i in 0..15 {
            log.push(format!("line {}", i));
        }

        let rendered = log.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), STATUS_LINES);
        assert_eq!(lines.first(), Some(&"line 5"));
        assert_eq!(lines.last(), Some(&"line 14"));
    }

    #[test]
    fn test_set_replaces_tail() {
        let mut log = StatusLog::default();
        log.push("a");
        log.push("b");
        log.set("Download completed successfully.");
        assert_eq!(log.render(), "Download completed successfully.");
    }
}
