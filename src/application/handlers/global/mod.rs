//! Global parameter handlers.

mod commit_global_param;

pub use commit_global_param::{
    CommitGlobalParamCommand, CommitGlobalParamError, CommitGlobalParamHandler, GlobalParam,
};
