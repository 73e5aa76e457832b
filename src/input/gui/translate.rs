use crate::controllers::interactive::events::InputEvent;
use crate::core::data::point::ScreenPoint;
use crate::input::gui::touch::TouchTracker;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

/// Maps winit window events onto controller input.
///
/// Mouse button events carry no position in winit, so the last cursor
/// position is remembered here.
#[derive(Debug, Default)]
pub struct PointerTranslator {
    cursor: ScreenPoint,
    touches: TouchTracker,
}

impl PointerTranslator {
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = ScreenPoint::new(position.x, position.y);
                Some(InputEvent::MouseMove {
                    position: self.cursor,
                })
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => Some(match state {
                ElementState::Pressed => InputEvent::MouseDown {
                    position: self.cursor,
                },
                ElementState::Released => InputEvent::MouseUp,
            }),
            WindowEvent::CursorLeft { .. } => Some(InputEvent::MouseUp),
            WindowEvent::MouseWheel { delta, .. } => {
                wheel_delta_y(*delta).map(|delta_y| InputEvent::Wheel {
                    position: self.cursor,
                    delta_y,
                })
            }
            WindowEvent::Touch(touch) => self.touches.apply(
                touch.id,
                touch.phase,
                ScreenPoint::new(touch.location.x, touch.location.y),
            ),
            _ => None,
        }
    }
}

/// winit reports scrolling up as a positive y; the controller expects the
/// opposite sign. A zero delta carries no direction and is dropped.
pub fn wheel_delta_y(delta: MouseScrollDelta) -> Option<f64> {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    (y != 0.0).then_some(-y)
}
