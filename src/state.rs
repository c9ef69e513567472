#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ModalState {
    Closed, // Overlay hidden, page receives input
    Open,   // Overlay shown, background scroll locked
}
