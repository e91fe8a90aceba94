pub mod constants;
pub mod elapsed;
pub mod fx;
pub mod rotate;
pub mod throttle;
pub mod typewriter;

pub use constants::*;
pub use elapsed::*;
pub use fx::*;
pub use rotate::*;
pub use throttle::*;
pub use typewriter::*;
