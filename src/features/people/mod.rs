//! People listing feature for the team section of the site.
//!
//! People are maintained as pages of a Notion database. This feature
//! queries that database and normalizes each fully resolved page into a
//! flat `Person` record.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/people` | No | List people (404 with `"No people found."` when empty) |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::PeopleService;
