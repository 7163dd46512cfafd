use bevy::math::DVec2;
use bevy::prelude::Event;

/// Window positions carried by a pointer event. Clicks fill `position`,
/// moves fill `start_position` and `end_position`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerMovement {
    pub position: Option<DVec2>,
    pub start_position: Option<DVec2>,
    pub end_position: Option<DVec2>,
}
impl PointerMovement {
    pub fn click(position: DVec2) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }
    pub fn moved(start_position: DVec2, end_position: DVec2) -> Self {
        Self {
            position: None,
            start_position: Some(start_position),
            end_position: Some(end_position),
        }
    }
    /// The position the pointer is at now.
    pub fn window_position(&self) -> Option<DVec2> {
        return self.position.or(self.end_position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_position() {
        let click = PointerMovement::click(DVec2::new(1.0, 2.0));
        assert_eq!(click.window_position(), Some(DVec2::new(1.0, 2.0)));
        let moved = PointerMovement::moved(DVec2::ZERO, DVec2::new(3.0, 4.0));
        assert_eq!(moved.window_position(), Some(DVec2::new(3.0, 4.0)));
        assert_eq!(PointerMovement::default().window_position(), None);
    }
}
