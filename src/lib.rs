//! claris - content submission pipeline and review workflow
//!
//! A small team submits raw ideas and graphic requests; a multi-stage
//! pipeline (research extraction, drafting, graphic/video generation)
//! processes them on a remote endpoint; reviewers approve, reject, or rework
//! the result before publication.
//!
//! The crate is organized around two cores:
//! - [`submit`]: plans which pipeline stages apply, picks the routing and
//!   timeout policy, and drives the one cancellable long-running call with
//!   progress reporting and strict completion verification
//! - [`review`]: the status state machine plus the mutually exclusive
//!   payload operations (regenerate, variations, select)
//!
//! Supporting modules: [`classify`] (graphic type from free text),
//! [`media`] (payload classification and export), [`api`] (collaborator
//! seams and their HTTP implementation), [`config`], [`error`], [`types`].

pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod media;
pub mod review;
pub mod submit;
pub mod types;
