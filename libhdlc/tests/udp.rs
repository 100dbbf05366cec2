use futures::{SinkExt, StreamExt};

use tokio::net::UdpSocket;
use tokio_util::udp::UdpFramed;

use hdlc::{Codec, CodecError, Error, Frame, SupervisoryKind, UnnumberedKind};


#[tokio::test(flavor = "current_thread")]
async fn frames_over_udp() -> Result<(), anyhow::Error> {
    let a = UdpSocket::bind("127.0.0.1:0").await?;
    let b = UdpSocket::bind("127.0.0.1:0").await?;

    let b_addr = b.local_addr()?;

    let mut tx = UdpFramed::new(a, Codec::default());
    let mut rx = UdpFramed::new(b, Codec::default());

    let frames = [
        Frame::unnumbered(0x03, UnnumberedKind::SetAsynchronousBalancedMode).with_pf(true),
        Frame::information(0x03, 0, 0, &b"hello"[..])?,
        Frame::supervisory(0x01, SupervisoryKind::ReceiveReady, 1)?,
    ];

    for frame in &frames {
        tx.send((frame.clone(), b_addr)).await?;
    }

    for frame in &frames {
        let (received, _) = rx.next().await.expect("stream closed")?;
        assert_eq!(&received, frame);
    }

    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn invalid_datagram_is_reported() -> Result<(), anyhow::Error> {
    let a = UdpSocket::bind("127.0.0.1:0").await?;
    let b = UdpSocket::bind("127.0.0.1:0").await?;

    a.send_to(&[0x03, 0xFF], b.local_addr()?).await?;
    a.send_to(&[0x03, 0x63], b.local_addr()?).await?;

    let mut rx = UdpFramed::new(b, Codec::default());

    let res = rx.next().await.expect("stream closed");
    assert!(matches!(res, Err(CodecError::Frame(Error::UnrecognizedControlField(0xFF)))));

    // the stream continues with the next datagram
    let (frame, _) = rx.next().await.expect("stream closed")?;
    assert_eq!(frame.to_string(), "UA addr=0x03 pf=0");

    Ok(())
}
