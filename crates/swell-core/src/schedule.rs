use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag between an animation loop and whoever tears it down.
/// Cancelling only prevents the next frame from being scheduled.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}
