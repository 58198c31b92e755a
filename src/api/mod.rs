//! Typed access to the remote posts API.
//!
//! ```text
//! GET    /api        -> [Post]
//! POST   /api        <- {title, content, status}
//! PUT    /api/{id}   <- {id, title, content, status} | {status}
//! DELETE /api/{id}
//! ```

mod client;
mod error;
mod types;

pub use client::{parse_base_url, PostsClient};
pub use error::ApiError;
pub use types::{decode_post_list, NewPost, Post, PostId, PostStatus, PostUpdate, StatusPatch};
