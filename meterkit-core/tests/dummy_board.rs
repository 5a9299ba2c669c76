//! Message output running on the dummy board's host UART

use meterkit_core::message::{MessageError, Messages, SharedMessages, SlotId, SlotState};
use meterkit_core::{message, message_error, message_raw, message_warn};
use meterkit_hal_dummy::DummyHostUart;

type Output = Messages<DummyHostUart<256>, 64, 32>;

#[test]
fn messages_reach_the_uart_in_order() {
    let mut out = Output::new(DummyHostUart::new());

    message!(out, "ADE9178 rev {}", 2).unwrap();
    message_warn!(out, "no cal").unwrap();
    assert_eq!(out.flush(), Ok(()));

    message_raw!(out, "> ").unwrap();
    message_error!(out, "crc {:04X}", 0xBEEFu16).unwrap();
    assert_eq!(out.flush(), Ok(()));

    let uart = out.pipeline().transport();
    assert_eq!(
        uart.captured(),
        b"ADE9178 rev 2\n\rWarn : no cal\n\r> Error : crc BEEF\n\r".as_slice()
    );
    assert_eq!(uart.submissions(), 2);
}

#[test]
fn slow_uart_drops_messages_instead_of_blocking() {
    let mut out = Output::new(DummyHostUart::manual());

    // First batch goes out and keeps the UART busy
    message!(out, "batch one").unwrap();
    assert_eq!(out.flush(), Err(MessageError::Pending));

    // Second slot fills up while the UART is busy
    let mut dropped = 0;
    for i in 0..20 {
        if message!(out, "sample {}", i).is_err() {
            dropped += 1;
        }
    }
    assert!(dropped > 0);
    assert_eq!(out.flush(), Err(MessageError::Pending));
    assert_eq!(out.pipeline().transport().submissions(), 1);
    assert_eq!(out.pipeline().slot_state(SlotId::A), SlotState::Draining);

    // Completion interrupt fires, the next flush hands over slot B
    out.pipeline_mut().transport_mut().complete();
    assert_eq!(out.flush(), Err(MessageError::Pending));
    assert_eq!(out.pipeline().transport().submissions(), 2);
    assert_eq!(out.pipeline().slot_state(SlotId::B), SlotState::Draining);
    assert_eq!(out.pipeline().slot_state(SlotId::A), SlotState::Idle);
}

#[test]
fn drain_before_reset() {
    let shared: SharedMessages<DummyHostUart<256>, 64, 32> =
        SharedMessages::new(DummyHostUart::new());

    message!(shared, "going down").unwrap();
    assert_eq!(shared.drain(8), Ok(()));
    shared.reset();

    shared.with(|out| {
        assert_eq!(out.pipeline().transport().captured(), b"going down\n\r".as_slice());
        assert_eq!(out.pipeline().active_slot(), SlotId::A);
    });
}
