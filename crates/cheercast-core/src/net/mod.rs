//! Multicast transport for cheer messages.
//!
//! A [`MulticastChannel`] owns one UDP socket bound to the shared group and
//! moves whole message blobs as single datagrams. The [`listener`] module
//! adds the receive-loop discipline: drop malformed datagrams, stop on I/O
//! or sink failure, and run on an explicitly joined worker thread.
//!
//! Version française (résumé):
//! Canal UDP multidiffusion : un blob par datagramme. La boucle de réception
//! ignore les datagrammes malformés, s'arrête sur erreur d'E/S et tourne sur
//! un thread dédié que l'on peut joindre à l'arrêt.

pub mod channel;
pub mod listener;

pub use channel::{
    BindError, ChannelConfig, DEFAULT_GROUP, DEFAULT_PORT, DEFAULT_TTL, MulticastChannel,
    RECV_BUFFER_LEN, RecvError, SendError,
};
pub use listener::{ListenError, Listener};
