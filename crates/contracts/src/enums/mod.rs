pub mod budget_range;
pub mod project_type;
pub mod timeline;

pub use budget_range::BudgetRange;
pub use project_type::ProjectType;
pub use timeline::Timeline;
