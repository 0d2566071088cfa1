pub mod activity;
pub mod career;
pub mod jobs;
pub mod roadmap;
pub mod skills;
pub mod user;
