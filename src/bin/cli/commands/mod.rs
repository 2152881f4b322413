pub mod add;
pub mod backup;
pub mod edit;
pub mod list;
pub mod review;
pub mod stats;
