mod welcome;
pub use welcome::Welcome;

mod workspace;
pub use workspace::{Dashboard, History, Prediction, Profile, Recommendation, Summary, Workspace};
