//! Property tests over the public `Tree` API.

mod tree;
