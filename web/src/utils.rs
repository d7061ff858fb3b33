/// Seed drawn from JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes(std::array::from_fn(|_| (256. * random()) as u8))
}

/// Maps a DOM mouse button to a board button, other buttons are ignored.
pub(crate) fn board_button(button: i16) -> Option<minesweep_core::Button> {
    match button {
        0 => Some(minesweep_core::Button::Primary),
        2 => Some(minesweep_core::Button::Secondary),
        _ => None,
    }
}

/// Single character keys, named keys like "Enter" yield nothing.
pub(crate) fn key_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minesweep_core::Button;

    #[test]
    fn only_main_and_context_buttons_click() {
        assert_eq!(board_button(0), Some(Button::Primary));
        assert_eq!(board_button(2), Some(Button::Secondary));
        assert_eq!(board_button(1), None);
        assert_eq!(board_button(4), None);
    }

    #[test]
    fn named_keys_are_skipped() {
        assert_eq!(key_char("r"), Some('r'));
        assert_eq!(key_char("R"), Some('R'));
        assert_eq!(key_char("Enter"), None);
        assert_eq!(key_char(""), None);
    }
}
