#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CyclerPhase {
    Idle,          // No images to show; absorbing
    Displaying,    // Dwelling on the current image
    Transitioning, // Cross-fade in flight
    Disposed,      // Slots released; absorbing
}
