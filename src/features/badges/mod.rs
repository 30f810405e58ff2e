//! Badge and profile feature: data-backend client, wire types, client-side
//! leaderboard ranking and the GitHub OAuth redirect plumbing. Routes import
//! these modules so view code stays focused on rendering.

pub(crate) mod client;
pub(crate) mod leaderboard;
pub(crate) mod oauth;
pub(crate) mod types;
