//! core/theme.rs
//! Light/dark flag. Purely cosmetic; the view picks a palette from it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeToggle {
    dark: bool,
}

impl ThemeToggle {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        self.dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light() {
        assert!(!ThemeToggle::default().is_dark());
    }

    #[test]
    fn toggling_twice_is_identity() {
        for start in [false, true] {
            let mut theme = ThemeToggle::new(start);
            theme.toggle();
            assert_ne!(theme.is_dark(), start);
            theme.toggle();
            assert_eq!(theme.is_dark(), start);
        }
    }
}
