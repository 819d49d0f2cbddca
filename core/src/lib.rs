pub mod config;
pub mod filters;
pub mod like;
pub mod locators;
pub mod submission;
pub mod tags;

pub use config::{ClassNames, DomIds, PageConfig};
pub use filters::{FilterKey, FilterState};
pub use like::{
    classify, like_endpoint, LikeError, LikePhase, LikeState, LikeToggle, RequestTicket,
    Settlement,
};
pub use locators::{single_locator, LocatorList};
pub use submission::{ArtworkDraft, RequiredField, ValidationError, SUBMITTING_LABEL};
pub use tags::{DuplicateCheck, TagCommit, TagSet, TAG_DELIMITER};
