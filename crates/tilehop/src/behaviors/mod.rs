//! Behavior variants attached to entities by the factories.

pub mod go;
pub mod jump;
pub mod killable;
pub mod shell;
pub mod stompable;
pub mod stomper;
pub mod turbo;
pub mod walking;

pub use go::Go;
pub use jump::Jump;
pub use killable::Killable;
pub use shell::{Shell, ShellState};
pub use stompable::Stompable;
pub use stomper::Stomper;
pub use turbo::{SpeedProfile, Turbo};
pub use walking::Walking;
