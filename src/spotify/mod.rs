//! # Spotify Integration Module
//!
//! Interface to the Spotify Web API for the operations the daily
//! reconciliation needs: authentication, catalog search, and reading and
//! appending to the target playlist. It handles HTTP communication, the OAuth
//! flow, rate limiting and error propagation so the higher layers deal with
//! domain types only.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 PKCE (Proof Key for Code Exchange)
//! flow: verifier and challenge generation, a local callback server for the
//! authorization code, token exchange and token refresh. PKCE avoids storing
//! a client secret on disk.
//!
//! ### Search Module
//!
//! [`search`] - Resolves a (track, artist) pair to a concrete catalog track
//! via the `/search` endpoint, keeping the first exact-name match. Also hosts
//! [`search::CatalogResolver`], the production implementation of the
//! selector's resolve capability.
//!
//! ### Playlist Module
//!
//! [`playlist`] - Reads the full track listing of the target playlist
//! (following pagination) and appends the selected track, treating any answer
//! other than 201 Created as a failed mutation.
//!
//! ## Error Handling
//!
//! - 429 Too Many Requests is honored by waiting out the `Retry-After` header
//!   before retrying, unless the delay is abnormally long.
//! - 502 Bad Gateway responses on reads are retried after a short pause.
//! - Everything else propagates to the caller; the pipeline deliberately has
//!   no retry policy of its own.
//!
//! ## API Coverage
//!
//! - `GET /search` - catalog search for candidate resolution
//! - `GET /playlists/{id}/tracks` - playlist listing for the membership test
//! - `POST /playlists/{id}/tracks` - append the daily pick
//! - `POST /api/token` - token exchange and refresh

pub mod auth;
pub mod playlist;
pub mod search;
