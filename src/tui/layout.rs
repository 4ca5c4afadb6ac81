/// Responsive breakpoints for topic cards.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 50 cols: title and counters only
    Compact,
    /// 50-99 cols: full card
    Normal,
    /// 100+ cols: full card with a wider counter column
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=49 => Breakpoint::Compact,
            50..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Whether cards have room for the author/date line
    pub fn shows_meta(&self) -> bool {
        *self >= Breakpoint::Normal
    }

    /// Columns reserved for the like/reply counters
    pub fn counter_width(&self) -> u16 {
        match self {
            Breakpoint::Compact => 12,
            Breakpoint::Normal => 16,
            Breakpoint::Wide => 20,
        }
    }

    /// Rows per card including its border
    pub fn card_height(&self) -> u16 {
        if self.shows_meta() {
            4
        } else {
            3
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(30), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(49), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(50), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
    }

    #[test]
    fn compact_cards_drop_meta_line() {
        assert!(!Breakpoint::Compact.shows_meta());
        assert_eq!(Breakpoint::Compact.card_height(), 3);
        assert!(Breakpoint::Wide.shows_meta());
        assert_eq!(Breakpoint::Normal.card_height(), 4);
    }
}
