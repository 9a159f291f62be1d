//! Replacement scenarios driven through the simulator.

use crate::common::harness::{TestHarness, pages};
use memsim::PolicyKind;
use memsim::core::mmu::Source;
use rstest::rstest;

#[test]
fn test_fifo_evicts_first_loaded_despite_hits() {
    // A, B, hit A, C: C replaces A under FIFO.
    let mut h = TestHarness::new(2, PolicyKind::Fifo);
    let out = h.run(&pages(&[10, 11, 10, 12]));
    assert_eq!(out[2].source, Source::TlbHit);
    assert_eq!(out[3].frame, out[0].frame);
}

#[test]
fn test_lru_evicts_least_recently_read() {
    // A, B, hit A, C: C replaces B under LRU.
    let mut h = TestHarness::new(2, PolicyKind::Lru);
    let out = h.run(&pages(&[10, 11, 10, 12]));
    assert_eq!(out[3].frame, out[1].frame);
}

#[test]
fn test_opt_evicts_page_needed_latest() {
    // After loading 1, 2, 3 into three frames, 4 arrives; 1 is needed next,
    // 2 after that, 3 never. OPT drops 3.
    let mut h = TestHarness::new(3, PolicyKind::Opt);
    let out = h.run(&pages(&[1, 2, 3, 4, 1, 2]));
    assert_eq!(out[3].frame, out[2].frame);
    assert_eq!(out[4].source, Source::TlbHit);
    assert_eq!(out[5].source, Source::TlbHit);
}

#[rstest]
#[case(PolicyKind::Fifo)]
#[case(PolicyKind::Lru)]
#[case(PolicyKind::Opt)]
fn test_full_memory_never_evicts(#[case] policy: PolicyKind) {
    let trace: Vec<u8> = (0..=255u8).chain((0..=255u8).rev()).collect();
    let mut h = TestHarness::new(256, policy);
    let out = h.run(&pages(&trace));

    let mut frame_of = [None; 256];
    for res in &out {
        let slot = &mut frame_of[res.addr.page_number() as usize];
        match *slot {
            Some(frame) => assert_eq!(frame, res.frame),
            None => *slot = Some(res.frame),
        }
    }
    assert_eq!(h.stats().page_faults, 256);
}

#[test]
fn test_belady_reference_string() {
    // Classic textbook string with 3 frames: FIFO 9, LRU 10, OPT 7 faults.
    let trace = pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
    assert_eq!(TestHarness::faults_for(3, PolicyKind::Fifo, &trace), 9);
    assert_eq!(TestHarness::faults_for(3, PolicyKind::Lru, &trace), 10);
    assert_eq!(TestHarness::faults_for(3, PolicyKind::Opt, &trace), 7);
}

#[test]
fn test_belady_anomaly_under_fifo() {
    let trace = pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
    let three = TestHarness::faults_for(3, PolicyKind::Fifo, &trace);
    let four = TestHarness::faults_for(4, PolicyKind::Fifo, &trace);
    assert!(four > three);
}
