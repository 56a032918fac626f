//! Individual screens of the state machine.

mod end;
mod party;
mod play;
mod setup;

pub use end::EndScreen;
pub use party::PartyScreen;
pub use play::PlayScreen;
pub use setup::SetupScreen;
