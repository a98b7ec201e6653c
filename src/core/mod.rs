// Domain-layer modules: the car entity, the premium pipeline and its orchestration
pub mod car {
    pub use crate::car::*;
}

pub mod calculator {
    pub use crate::calculator::*;
}

pub mod services {
    pub use crate::services::*;
}
