use std::net::Ipv4Addr;
use std::sync::mpsc;
use std::time::Duration;

use cheercast_core::net::ListenError;
use cheercast_core::{
    ChannelConfig, CheerMessage, CheerTarget, Colour, Listener, MulticastChannel, RecvError,
    RenderError,
};

/// Loopback test endpoint: default group, test-local port so runs do not
/// collide with a real deployment or each other.
fn config(port: u16) -> ChannelConfig {
    ChannelConfig {
        group: Ipv4Addr::new(224, 1, 1, 1),
        port,
        ttl: 1,
    }
}

#[test]
fn end_to_end_loopback_round_trip() {
    let config = config(45123);
    let mut receiver = MulticastChannel::bind(&config).unwrap();
    receiver
        .set_recv_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    let sender = MulticastChannel::connect(&config).unwrap();

    let sent = CheerMessage::new(Colour::new(0x00FF00).unwrap(), "go green now");
    sender.send(&sent).unwrap();

    let (received, _from) = receiver.recv().unwrap();
    assert_eq!(received.colour().packed(), 0x00FF00);
    assert_eq!(received.text(), "go green now");
    assert_eq!(received.blob(), sent.blob());
}

#[test]
fn malformed_datagram_surfaces_as_decode_error() {
    let config = config(45124);
    let mut receiver = MulticastChannel::bind(&config).unwrap();
    receiver
        .set_recv_timeout(Some(Duration::from_secs(5)))
        .unwrap();

    let sender = MulticastChannel::connect(&config).unwrap();
    // Raw socket bytes, not a valid message: opcode 9.
    let raw = std::net::UdpSocket::bind("0.0.0.0:0").unwrap();
    raw.set_multicast_ttl_v4(1).unwrap();
    raw.send_to(&[9, 0, 0, 0, 0], sender.destination()).unwrap();

    match receiver.recv() {
        Err(RecvError::Decode(_)) => {}
        other => panic!("expected decode error, got {other:?}"),
    }
}

/// Relays each colour to a channel so the test can observe updates.
struct ForwardingTarget(mpsc::Sender<Colour>);

impl CheerTarget for ForwardingTarget {
    fn update(&mut self, colour: Colour) -> Result<(), RenderError> {
        self.0
            .send(colour)
            .map_err(std::io::Error::other)
            .map_err(RenderError::from)
    }
}

#[test]
fn listener_skips_garbage_and_feeds_target() {
    let config = config(45125);
    let receiver = MulticastChannel::bind(&config).unwrap();
    // The loop exits via the read timeout once the test traffic is done.
    receiver
        .set_recv_timeout(Some(Duration::from_secs(2)))
        .unwrap();

    let (tx, rx) = mpsc::channel();
    let listener = Listener::spawn(receiver, ForwardingTarget(tx)).unwrap();

    let sender = MulticastChannel::connect(&config).unwrap();
    sender
        .send(&CheerMessage::from_text("red sky at night").unwrap())
        .unwrap();

    // Garbage in the middle must not end the loop.
    let raw = std::net::UdpSocket::bind("0.0.0.0:0").unwrap();
    raw.set_multicast_ttl_v4(1).unwrap();
    raw.send_to(&[0xFF; 8], sender.destination()).unwrap();

    sender
        .send(&CheerMessage::from_text("and now blue").unwrap())
        .unwrap();

    let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    let second = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(first.packed(), 0xFF0000);
    assert_eq!(second.packed(), 0x0000FF);

    // After the timeout the loop reports the I/O error to the joiner.
    match listener.join() {
        Err(ListenError::Io(_)) => {}
        other => panic!("expected I/O exit, got {other:?}"),
    }
}
