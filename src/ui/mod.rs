pub mod render;

pub use render::{controls_hint, fits, render, render_too_small};

#[cfg(test)]
pub mod testing {
    use ratatui::{backend::TestBackend, Terminal};

    /// Text content of a test terminal, one string per row
    pub fn screen_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }
}
