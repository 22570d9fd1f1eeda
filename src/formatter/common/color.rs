use std::io::{self, IsTerminal};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum ColorSetting {
    #[default]
    Automatic,
    Always,
    Never,
}

pub(crate) mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

pub trait SupportsColor {
    fn supports_color(&self) -> bool;
}

impl SupportsColor for io::Stdout {
    fn supports_color(&self) -> bool {
        self.is_terminal()
    }
}

impl SupportsColor for io::Stderr {
    fn supports_color(&self) -> bool {
        self.is_terminal()
    }
}
