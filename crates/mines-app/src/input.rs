//! Mouse button classification.
//!
//! A cell reacts to button presses and releases, not to clicks: pressing both
//! primary and secondary together chords, and a release only counts when the
//! pointer is still over the cell it was pressed on.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

bitflags::bitflags! {
    /// Buttons currently held down.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct HeldButtons: u8 {
        const PRIMARY = 0b0000_0001;
        const SECONDARY = 0b0000_0010;
    }
}

impl HeldButtons {
    #[must_use]
    fn of(button: MouseButton) -> Self {
        match button {
            MouseButton::Primary => Self::PRIMARY,
            MouseButton::Secondary => Self::SECONDARY,
            MouseButton::Middle => Self::empty(),
        }
    }
}

/// The semantic action a button event maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum ClickIntent {
    Reveal,
    ToggleFlag,
    Chord,
}

/// Turns press and release events into at most one [`ClickIntent`] each.
///
/// - Pressing middle chords immediately.
/// - Pressing primary or secondary while the other one is held chords.
/// - Releasing over the cell: primary alone reveals, secondary alone toggles a
///   flag, middle chords.
///
/// A released button is always cleared from the held set, even when the
/// pointer has left the cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClickClassifier {
    held: HeldButtons,
}

impl ClickClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn held(&self) -> HeldButtons {
        self.held
    }

    pub fn press(&mut self, button: MouseButton) -> Option<ClickIntent> {
        if button.is_middle() {
            return Some(ClickIntent::Chord);
        }
        self.held |= HeldButtons::of(button);
        self.held.is_all().then_some(ClickIntent::Chord)
    }

    pub fn release(&mut self, button: MouseButton, over_cell: bool) -> Option<ClickIntent> {
        let intent = if over_cell {
            match button {
                MouseButton::Primary if self.held == HeldButtons::PRIMARY => {
                    Some(ClickIntent::Reveal)
                }
                MouseButton::Secondary if self.held == HeldButtons::SECONDARY => {
                    Some(ClickIntent::ToggleFlag)
                }
                MouseButton::Middle => Some(ClickIntent::Chord),
                _ => None,
            }
        } else {
            None
        };
        self.held.remove(HeldButtons::of(button));
        intent
    }

    /// Forgets every held button, e.g. when the board is replaced.
    pub fn reset(&mut self) {
        self.held = HeldButtons::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use MouseButton::{Middle, Primary, Secondary};

    #[test]
    fn test_primary_click_reveals() {
        let mut classifier = ClickClassifier::new();
        assert_eq!(classifier.press(Primary), None);
        assert_eq!(classifier.release(Primary, true), Some(ClickIntent::Reveal));
        assert!(classifier.held().is_empty());
    }

    #[test]
    fn test_secondary_click_toggles_flag() {
        let mut classifier = ClickClassifier::new();
        assert_eq!(classifier.press(Secondary), None);
        assert_eq!(
            classifier.release(Secondary, true),
            Some(ClickIntent::ToggleFlag)
        );
    }

    #[test]
    fn test_middle_chords_on_press_and_release() {
        let mut classifier = ClickClassifier::new();
        assert_eq!(classifier.press(Middle), Some(ClickIntent::Chord));
        assert!(classifier.held().is_empty());
        assert_eq!(classifier.release(Middle, true), Some(ClickIntent::Chord));
        assert_eq!(classifier.release(Middle, false), None);
    }

    #[test]
    fn test_both_buttons_chord_once() {
        let mut classifier = ClickClassifier::new();
        assert_eq!(classifier.press(Primary), None);
        assert_eq!(classifier.press(Secondary), Some(ClickIntent::Chord));

        // Neither release does anything else while the other button is held
        assert_eq!(classifier.release(Primary, true), None);
        assert_eq!(classifier.held(), HeldButtons::SECONDARY);
        assert_eq!(classifier.release(Secondary, true), None);
        assert!(classifier.held().is_empty());
    }

    #[test]
    fn test_release_outside_cell_cancels() {
        let mut classifier = ClickClassifier::new();
        classifier.press(Primary);
        assert_eq!(classifier.release(Primary, false), None);
        assert!(classifier.held().is_empty());

        // The next click is unaffected
        classifier.press(Primary);
        assert_eq!(classifier.release(Primary, true), Some(ClickIntent::Reveal));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut classifier = ClickClassifier::new();
        assert_eq!(classifier.release(Primary, true), None);
        assert_eq!(classifier.release(Secondary, true), None);
    }

    #[test]
    fn test_reset_clears_held_buttons() {
        let mut classifier = ClickClassifier::new();
        classifier.press(Secondary);
        classifier.reset();
        assert_eq!(classifier.press(Primary), None);
        assert_eq!(classifier.release(Primary, true), Some(ClickIntent::Reveal));
    }
}
