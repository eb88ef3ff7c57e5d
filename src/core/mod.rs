pub mod add;
pub mod choice;
pub mod del;
pub mod edit;
pub mod locator;
pub mod log;
pub mod session;
pub mod view;

pub use add::AddLogic;
pub use del::DeleteLogic;
pub use edit::{EditLogic, EditOutcome};
pub use session::Session;
pub use view::View;
