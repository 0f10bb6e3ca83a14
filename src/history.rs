use crate::surface::Surface;

/// Single-slot snapshot store backing one-step undo.
///
/// The slot always holds a full independent copy of a surface, never an
/// alias of the live canvas.
#[derive(Default)]
pub struct History {
    snapshot: Option<Surface>,
}

impl History {
    /// Records the canvas as it was immediately before the stroke that just
    /// completed, replacing any prior snapshot.
    pub fn commit(&mut self, before: Surface) {
        self.snapshot = Some(before);
    }

    /// Swaps `live` with the stored snapshot, rescaling the snapshot to the
    /// live dimensions if they differ. With no snapshot the live surface is
    /// replaced by white. The replaced surface becomes the new snapshot, so
    /// a second undo toggles back (redo-via-undo).
    pub fn undo(&mut self, live: &mut Surface) {
        let (width, height) = (live.width(), live.height());
        let restored = match self.snapshot.take() {
            Some(snapshot) => snapshot
                .resized_to(width, height)
                .unwrap_or_else(|_| Surface::new(width, height)),
            None => Surface::new(width, height),
        };
        self.snapshot = Some(std::mem::replace(live, restored));
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }
}
