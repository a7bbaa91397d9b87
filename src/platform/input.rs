//! winit keyboard mapping

use winit::keyboard::KeyCode;

use crate::sim::Key;

/// Map a physical key to the game's logical key
pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(KeyCode::ArrowLeft), Key::Left);
        assert_eq!(map_key(KeyCode::ArrowRight), Key::Right);
        assert_eq!(map_key(KeyCode::Escape), Key::Escape);
        assert_eq!(map_key(KeyCode::Space), Key::Other);
        assert_eq!(map_key(KeyCode::KeyA), Key::Other);
    }
}
