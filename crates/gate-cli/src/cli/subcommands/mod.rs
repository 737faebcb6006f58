mod org;

pub use org::{OrgCommands, OrgDecodeArgs, OrgListArgs};
