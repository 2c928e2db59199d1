use ratatui::symbols::border;

/// Border character set for drawing the indicator card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

/// Rounded corners, the default card look
pub const BORDER_ROUNDED: BorderSet = BorderSet {
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    horizontal: '─',
    vertical: '│',
};

/// Standard single-line borders
pub const BORDER_SINGLE: BorderSet = BorderSet {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
};

/// Plain ASCII borders for terminals without box-drawing glyphs
pub const BORDER_ASCII: BorderSet = BorderSet {
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    horizontal: '-',
    vertical: '|',
};

const ASCII_SYMBOLS: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

impl BorderSet {
    /// ratatui symbols for the same border style.
    pub fn symbols(&self) -> border::Set {
        if *self == BORDER_ASCII {
            ASCII_SYMBOLS
        } else if *self == BORDER_SINGLE {
            border::PLAIN
        } else {
            border::ROUNDED
        }
    }
}
