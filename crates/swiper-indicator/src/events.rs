//! Input events delivered to an indicator.

use swiper_indicator_core::Point;

/// Keys the indicator distinguishes; everything else is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Tab,
    Other,
}

/// Phase of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Down,
    Up,
    LongPress,
}

/// Key event routed through a node's focus hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key involved.
    pub key: Key,
    /// Press, release or long press.
    pub action: KeyAction,
}

impl KeyEvent {
    pub fn new(key: Key, action: KeyAction) -> Self {
        Self { key, action }
    }

    /// A key press.
    pub fn down(key: Key) -> Self {
        Self::new(key, KeyAction::Down)
    }

    /// A key release.
    pub fn up(key: Key) -> Self {
        Self::new(key, KeyAction::Up)
    }
}

/// Touch phase reported by the gesture hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchType {
    Down,
    Move,
    Up,
    Cancel,
}

/// Single-finger touch event in node-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub touch_type: TouchType,
    pub location: Point,
}

impl TouchEvent {
    pub fn new(touch_type: TouchType, location: impl Into<Point>) -> Self {
        Self {
            touch_type,
            location: location.into(),
        }
    }
}
