// SPDX-License-Identifier: MPL-2.0
//! Application layer - use cases and orchestration.
//!
//! - [`port`]: trait definitions the infrastructure implements
//! - [`location`]: the location URL and its `year` query parameter
//! - [`session`]: the year-selection and speech-fetch state machine
//!
//! # Dependency Rule
//!
//! - The application layer depends on the domain layer
//! - Infrastructure implements application ports
//! - The Iced front end drives the session and executes its fetch requests

pub mod location;
pub mod port;
pub mod session;
