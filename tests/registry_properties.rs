//! Properties every fake record must satisfy
//!
//! Checked against several of the host fakes with different signatures.

use std::sync::Arc;

use bt_id_mocks::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn counting_matches_invocations() {
    for n in [0usize, 1, 7, 64] {
        reset_all();
        for i in 0..n {
            bt_le_scan_set_enable((i % 2) as u8);
            bt_unpair(i as u8, None);
        }
        assert_eq!(BT_LE_SCAN_SET_ENABLE_FAKE.call_count(), n);
        assert_eq!(BT_UNPAIR_FAKE.call_count(), n);
        assert_eq!(BT_LE_SCAN_SET_ENABLE_FAKE.arg_history().len(), n);
    }
}

#[test]
#[serial]
fn capture_fidelity() {
    reset_all();
    let calls: Vec<(u16, u8)> = vec![
        (hci::OP_RESET, 0),
        (hci::OP_LE_SET_RANDOM_ADDRESS, 6),
        (hci::OP_LE_SET_PRIVACY_MODE, 8),
        (hci::OP_VS_READ_STATIC_ADDRS, 0),
    ];
    for &(opcode, len) in &calls {
        bt_hci_cmd_create(opcode, len);
    }
    let history = BT_HCI_CMD_CREATE_FAKE.arg_history();
    for (i, &(opcode, len)) in calls.iter().enumerate() {
        assert_eq!(history[i].0, opcode, "arg0 of call {i}");
        assert_eq!(history[i].1, len, "arg1 of call {i}");
    }
}

#[test]
#[serial]
fn return_value_is_repeated() {
    reset_all();
    BT_UNPAIR_FAKE.set_return_val(-EINVAL);
    for _ in 0..5 {
        assert_eq!(bt_unpair(0, None), -EINVAL);
    }
}

#[test]
#[serial]
fn sequence_is_consumed_then_latches() {
    reset_all();
    BT_LE_ADV_SET_ENABLE_FAKE.set_return_val_seq(vec![-EAGAIN, -EBUSY, 0]);
    let got: Vec<i32> = (0..6).map(|_| bt_le_adv_set_enable(None, true)).collect();
    assert_eq!(got, vec![-EAGAIN, -EBUSY, 0, 0, 0, 0]);
}

#[test]
#[serial]
fn custom_fake_overrides_without_consuming_sequence() {
    reset_all();
    BT_LE_SCAN_SET_ENABLE_FAKE.set_return_val_seq(vec![1, 2]);
    BT_LE_SCAN_SET_ENABLE_FAKE.set_custom_fake(Arc::new(|enable: u8| -i32::from(enable)));

    assert_eq!(bt_le_scan_set_enable(BT_HCI_LE_SCAN_ENABLE), -1);
    assert_eq!(bt_le_scan_set_enable(BT_HCI_LE_SCAN_ENABLE), -1);

    BT_LE_SCAN_SET_ENABLE_FAKE.clear_custom_fake();
    assert_eq!(bt_le_scan_set_enable(0), 1);
    assert_eq!(bt_le_scan_set_enable(0), 2);
}

#[test]
#[serial]
fn reset_twice_equals_reset_once() {
    reset_all();
    BT_RAND_FAKE.set_custom_fake(fill_with(0xFF));
    BT_HCI_CMD_SEND_SYNC_FAKE.set_return_val_seq(vec![-EIO]);
    let mut buf = [0u8; 2];
    bt_rand(&mut buf, 2);
    bt_hci_cmd_send_sync(hci::OP_RESET, None, None);

    reset_all();
    reset_all();

    assert_eq!(fixture::total_calls(), 0);
    assert!(fixture::called_fakes().is_empty());

    // behaves like a fresh process
    let mut buf = [0u8; 2];
    assert_eq!(bt_rand(&mut buf, 2), 0);
    assert_eq!(buf, [0, 0]);
    assert_eq!(bt_hci_cmd_send_sync(hci::OP_RESET, None, None), 0);
    assert_eq!(BT_RAND_FAKE.call_count(), 1);
    assert_eq!(BT_HCI_CMD_SEND_SYNC_FAKE.call_count(), 1);
}

#[test]
#[serial]
fn reading_past_call_count_is_an_error() {
    reset_all();
    bt_unpair(0, None);
    let err = BT_UNPAIR_FAKE.call_args(1).unwrap_err();
    assert!(matches!(err, FakeError::CallOutOfRange { index: 1, .. }));
    assert!(err.to_string().contains("bt_unpair"));
}

#[test]
#[serial]
fn scenarios_program_sequences() {
    reset_all();
    BT_HCI_CMD_SEND_SYNC_FAKE.apply(ReturnScenario::FailAfter {
        successes: 2,
        ok: 0,
        err: -ENOBUFS,
    });
    let got: Vec<i32> = (0..4)
        .map(|_| bt_hci_cmd_send_sync(hci::OP_RESET, None, None))
        .collect();
    assert_eq!(got, vec![0, 0, -ENOBUFS, -ENOBUFS]);
}

#[test]
#[serial]
fn bounded_history_from_config() -> anyhow::Result<()> {
    reset_all();
    FakeConfig::from_toml_str("arg_history_len = 3")?.apply()?;

    for i in 0..5u8 {
        bt_unpair(i, None);
    }
    FakeConfig::default().apply()?;

    assert_eq!(BT_UNPAIR_FAKE.call_count(), 5);
    assert_eq!(BT_UNPAIR_FAKE.arg_history().len(), 3);
    assert_eq!(BT_UNPAIR_FAKE.arg_histories_dropped(), 2);
    assert_eq!(BT_UNPAIR_FAKE.last_args(), Some((4, None)));
    Ok(())
}

#[test]
#[serial]
fn shared_reference_arguments_keep_their_identity() {
    reset_all();
    let bonded = LeAddr::random([0x10, 0x20, 0x30, 0x40, 0x50, 0xC0]);
    let lookalike = bonded;

    bt_unpair(0, Some(&bonded));
    bt_unpair(0, Some(&lookalike));

    let history = BT_UNPAIR_FAKE.arg_history();
    let first = history[0].1.clone().unwrap();
    let second = history[1].1.clone().unwrap();
    assert_ne!(first, second, "distinct objects must be told apart");
    assert!(first.points_to(&bonded));
    assert!(second.points_to(&lookalike));
    assert_eq!(first.value(), &bonded);
    assert_eq!(second.value(), &bonded);
}
