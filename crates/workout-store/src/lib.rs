pub mod error;
pub mod memory;
pub mod model;
pub mod postgres;
pub mod store;
pub mod window;

pub use common::{LogId, Username};
pub use error::{Result, WorkoutStoreError};
pub use memory::InMemoryWorkoutStore;
pub use model::{GoalUpdate, NewWorkout, User, WorkoutLog, WorkoutLogEntry};
pub use postgres::PostgresWorkoutStore;
pub use store::{WorkoutStore, WorkoutStoreExt};
pub use window::DayWindow;
