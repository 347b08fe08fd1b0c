//! CheerCast core library.
//!
//! This crate implements the pipeline that moves ambient "what colour is the
//! world" events across a local network and renders them on LED hardware:
//! the binary message codec (`protocol`), the UDP multicast transport and
//! receive-loop discipline (`net`), the crossfade rendering state machine
//! (`render`), the named-colour table (`colour`) and the broker feed payload
//! shape (`feed`). Wire decoding is byte-oriented and side-effect free; all
//! I/O is isolated in `net`, all hardware access behind sink traits.
//!
//! Invariants:
//! - `decode(encode(colour, caption)) == (colour, caption)` for every valid
//!   input; the blob is canonical and immutable once built.
//! - Malformed datagrams never stop a listener; they are logged and dropped.
//! - Transitions on one render target are strictly serialized: event N's
//!   100 frames complete before event N+1 starts.
//!
//! Version française (résumé):
//! Cette crate fournit le cœur : codec binaire (`protocol`) -> transport
//! multidiffusion (`net`) -> rendu en fondu (`render`). Les E/S restent dans
//! `net`, le matériel derrière des traits. Garanties : aller-retour exact du
//! codec, tolérance aux datagrammes malformés, transitions sérialisées.
//!
//! # Examples
//! ```no_run
//! use cheercast_core::{ChannelConfig, CheerMessage, MulticastChannel};
//!
//! let message = CheerMessage::from_text("paint the town red")?;
//! let channel = MulticastChannel::connect(&ChannelConfig::default())?;
//! channel.send(&message)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod colour;
pub mod feed;
pub mod net;
pub mod protocol;
pub mod render;

pub use colour::{Colour, find_in_text, lookup};
pub use net::{
    BindError, ChannelConfig, ListenError, Listener, MulticastChannel, RecvError, SendError,
};
pub use protocol::{CheerMessage, DecodeError, NoColourFound};
pub use render::{
    CheerTarget, LegSink, PiglowRenderer, PixelSink, RenderError, SharedTarget, StripRenderer,
};
