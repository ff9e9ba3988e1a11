pub mod discipline;
pub mod enrollment;
pub mod event;
pub mod fisher;
pub mod result;
pub mod season;

pub use discipline::Discipline;
pub use enrollment::{Enrollment, TeamMember};
pub use event::{Event, EventType};
pub use fisher::{Fisher, FisherType};
pub use result::EventResult;
pub use season::Season;
