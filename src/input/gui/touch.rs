use crate::controllers::interactive::events::InputEvent;
use crate::core::data::point::ScreenPoint;
use std::collections::BTreeMap;
use winit::event::TouchPhase;

/// Folds winit's per-finger touch events into whole-gesture snapshots.
///
/// winit reports one finger at a time; the controller wants every active
/// touch with each event, ordered by touch id.
#[derive(Debug, Default)]
pub struct TouchTracker {
    active: BTreeMap<u64, ScreenPoint>,
}

impl TouchTracker {
    pub fn apply(
        &mut self,
        id: u64,
        phase: TouchPhase,
        position: ScreenPoint,
    ) -> Option<InputEvent> {
        match phase {
            TouchPhase::Started => {
                self.active.insert(id, position);
                Some(InputEvent::TouchStart {
                    touches: self.snapshot(),
                })
            }
            TouchPhase::Moved => {
                let touch = self.active.get_mut(&id)?;
                *touch = position;
                Some(InputEvent::TouchMove {
                    touches: self.snapshot(),
                })
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active.remove(&id)?;
                Some(InputEvent::TouchEnd {
                    touches: self.snapshot(),
                })
            }
        }
    }

    #[cfg(test)]
    fn active_count(&self) -> usize {
        self.active.len()
    }

    fn snapshot(&self) -> Vec<ScreenPoint> {
        self.active.values().copied().collect()
    }
}
