pub mod git;
pub mod github;
pub mod netrc;
